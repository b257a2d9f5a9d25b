//! Error types for plusnav operations.
//!
//! The converters themselves are total. Errors only come from the edges that
//! read block-attribute documents.

use thiserror::Error;

/// Errors that can occur while loading block attributes.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
