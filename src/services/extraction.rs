use crate::dto::document::{DocumentDetails, ExtractedData};

/// Stand-in for real entity detection; reported for every document.
pub const DETECTED_ENTITIES: [&str; 3] = ["pipeline", "project", "notes"];

/// Used in `DocumentDetails` when the upload carried no filename.
pub const FALLBACK_FILENAME: &str = "unknown";

/// Describe the uploaded file itself.
///
/// `filename` is the name exactly as the client sent it; an empty or absent
/// name becomes [`FALLBACK_FILENAME`].
pub fn describe(filename: Option<&str>, content_type: Option<&str>, bytes: &[u8]) -> DocumentDetails {
    let filename = match filename {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FALLBACK_FILENAME.to_string(),
    };

    DocumentDetails {
        filename,
        content_type: content_type.map(str::to_string),
        size_bytes: bytes.len() as u64,
    }
}

/// Produce the extraction result for an uploaded document.
///
/// The summary quotes the raw filename, so an unnamed upload reads
/// "from ." rather than "from unknown.".
pub fn extract(filename: Option<&str>, bytes: &[u8]) -> ExtractedData {
    let raw_name = filename.unwrap_or_default();

    ExtractedData {
        summary: format!("Received {} bytes from {raw_name}.", bytes.len()),
        detected_entities: DETECTED_ENTITIES.iter().map(|e| e.to_string()).collect(),
        extracted_at: super::utc_timestamp(),
    }
}
