//! Test helpers: build the router in-process and wrap it in a `TestServer`.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use document_intake::app::build_router;
use document_intake::config::{AppConfig, CorsConfig, ServerConfig, UploadConfig};

pub fn test_config(max_body_bytes: usize) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        upload: UploadConfig { max_body_bytes },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    }
}

pub fn setup_server() -> TestServer {
    setup_server_with(test_config(25 * 1024 * 1024))
}

pub fn setup_server_with(config: AppConfig) -> TestServer {
    TestServer::new(build_router(&config)).expect("Failed to start test server")
}

pub fn file_part(bytes: &[u8], filename: &str, mime: &str) -> Part {
    Part::bytes(bytes::Bytes::copy_from_slice(bytes))
        .file_name(filename)
        .mime_type(mime)
}

/// A complete upload form with the given file contents.
pub fn upload_form(bytes: &[u8], filename: &str) -> MultipartForm {
    MultipartForm::new()
        .add_part("document", file_part(bytes, filename, "text/plain"))
        .add_text("pipeline", "invoices")
        .add_text("project", "q3-close")
}
