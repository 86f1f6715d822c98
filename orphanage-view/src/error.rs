//! View error types

use thiserror::Error;

/// Detail view error type
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("No record loaded")]
    NoRecord,

    #[error("Image index {index} out of range (record has {len} images)")]
    ImageIndexOutOfRange { index: usize, len: usize },

    #[error("Client error: {0}")]
    Client(#[from] orphanage_client::ClientError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Session closed")]
    SessionClosed,
}

pub type ViewResult<T> = Result<T, ViewError>;
