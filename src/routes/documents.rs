use axum::Json;

use crate::dto::document::{UploadResponse, ValidationRequest, ValidationResult};
use crate::extractors::{AppJson, UploadForm};
use crate::services::{checks, extraction};

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/documents/upload",
    tag = "Documents",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Fields: document (file), pipeline, project, notes (optional)"),
    responses(
        (status = 200, body = UploadResponse),
        (status = 413, body = crate::errors::ErrorResponse),
        (status = 422, body = crate::errors::ErrorResponse),
    )
))]
pub async fn upload(form: UploadForm) -> Json<UploadResponse> {
    let UploadForm { metadata, file } = form;
    let filename = file.filename.as_deref();

    let document = extraction::describe(filename, file.content_type.as_deref(), &file.bytes);
    let extracted_data = extraction::extract(filename, &file.bytes);

    tracing::info!(
        pipeline = %metadata.pipeline,
        project = %metadata.project,
        "Received '{}' ({} bytes)",
        document.filename,
        document.size_bytes
    );

    Json(UploadResponse {
        metadata,
        document,
        extracted_data,
    })
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/documents/validate",
    tag = "Documents",
    request_body = ValidationRequest,
    responses(
        (status = 200, body = ValidationResult),
        (status = 422, body = crate::errors::ErrorResponse),
    )
))]
pub async fn validate(AppJson(payload): AppJson<ValidationRequest>) -> Json<ValidationResult> {
    let result = checks::validate(&payload.metadata, payload.extracted_data);

    tracing::info!(valid = result.valid, checks = ?result.checks, "Validated extracted data");

    Json(result)
}
