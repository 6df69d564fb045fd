use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied context for a document, sent as form fields on upload
/// and as JSON on validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadMetadata {
    pub pipeline: String,
    pub project: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DocumentDetails {
    pub filename: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExtractedData {
    pub summary: String,
    pub detected_entities: Vec<String>,
    pub extracted_at: String,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadResponse {
    pub metadata: UploadMetadata,
    pub document: DocumentDetails,
    pub extracted_data: ExtractedData,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationRequest {
    pub metadata: UploadMetadata,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub extracted_data: Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationResult {
    pub valid: bool,
    pub checks: Vec<String>,
    pub validated_at: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub extracted_data: Map<String, Value>,
}
