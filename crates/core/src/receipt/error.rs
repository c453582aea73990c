//! Receipt extraction capability errors.

use std::path::PathBuf;

use tabsplit_shared::error::AppError;
use thiserror::Error;

/// Errors surfaced by receipt-extraction implementations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// No image path was provided.
    #[error("At least one image path is required for receipt extraction")]
    NoImages,

    /// A supplied image file does not exist.
    #[error("Image file not found: {0}")]
    ImageNotFound(PathBuf),

    /// The remote model call failed or returned an unusable response.
    #[error("Failed to extract receipt data: {0}")]
    Model(String),
}

impl ExtractionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoImages => "NO_IMAGES",
            Self::ImageNotFound(_) => "IMAGE_NOT_FOUND",
            Self::Model(_) => "EXTRACTION_FAILED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NoImages | Self::ImageNotFound(_) => 400,
            Self::Model(_) => 500,
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Model(_) => Self::ExternalService(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
