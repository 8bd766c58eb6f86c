//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use fit_core::model::{QuestionError, QuestionId};
use fit_core::ViewportError;

/// Errors emitted while building a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no questions")]
    Empty,
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted while starting or configuring a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
