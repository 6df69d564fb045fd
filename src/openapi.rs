use utoipa::OpenApi;

use crate::dto::document::{
    DocumentDetails, ExtractedData, UploadMetadata, UploadResponse, ValidationRequest,
    ValidationResult,
};
use crate::errors::ErrorResponse;
use crate::routes::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Document Intake API",
        version = "1.0.0",
        description = "Accepts document uploads with pipeline metadata and validates extracted data."
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::documents::upload,
        crate::routes::documents::validate,
    ),
    components(
        schemas(
            HealthResponse,
            UploadMetadata, DocumentDetails, ExtractedData, UploadResponse,
            ValidationRequest, ValidationResult,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check"),
        (name = "Documents", description = "Document upload and validation"),
    )
)]
pub struct ApiDoc;
