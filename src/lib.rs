pub mod app;
pub mod config;
pub mod dto;
pub mod errors;
pub mod extractors;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod routes;
pub mod services;
