use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};

use crate::dto::document::UploadMetadata;
use crate::errors::AppError;

/// `axum::Json` whose rejections become [`AppError`] (422 with a JSON body)
/// instead of axum's plain-text responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// An empty text field counts as not sent.
fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// A fully-read `multipart/form-data` upload.
///
/// Extracting this rejects the request with 422 when `document`, `pipeline`
/// or `project` is absent, so handlers only ever see a complete form.
#[derive(Debug)]
pub struct UploadForm {
    pub metadata: UploadMetadata,
    pub file: UploadedFile,
}

#[derive(Debug)]
pub struct UploadedFile {
    /// Filename as sent by the client, if any.
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await?;

        let mut file = None;
        let mut pipeline = None;
        let mut project = None;
        let mut notes = None;

        // Repeated fields: last one wins.
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "document" => {
                    let filename = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    file = Some(UploadedFile {
                        filename,
                        content_type,
                        bytes,
                    });
                }
                "pipeline" => pipeline = non_empty(field.text().await?),
                "project" => project = non_empty(field.text().await?),
                "notes" => notes = non_empty(field.text().await?),
                other => tracing::debug!("Ignoring unknown form field '{other}'"),
            }
        }

        let missing: Vec<String> = [
            ("document", file.is_none()),
            ("pipeline", pipeline.is_none()),
            ("project", project.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then(|| name.to_string()))
        .collect();

        match (file, pipeline, project) {
            (Some(file), Some(pipeline), Some(project)) => Ok(UploadForm {
                metadata: UploadMetadata {
                    pipeline,
                    project,
                    notes,
                },
                file,
            }),
            _ => Err(AppError::missing_fields(missing)),
        }
    }
}
