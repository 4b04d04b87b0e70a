//! Uploaded document handling
//!
//! - `upload` - multipart file intake, extension checks, temp-file staging
//! - `pdf` - text extraction with lopdf

pub mod pdf;
pub mod upload;

pub use pdf::*;
pub use upload::*;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("No file provided")]
    NoFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("File must be an image")]
    NotImage,

    #[error("File must be a PDF")]
    NotPdf,

    #[error("No image data provided")]
    NoImageData,

    #[error("Invalid base64 image data")]
    InvalidBase64,

    #[error("Invalid multipart body: {0}")]
    Multipart(String),

    #[error("Failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),

    #[error("Failed to process PDF: {0}")]
    Pdf(String),
}

impl DocumentError {
    /// True when the caller sent something unusable (answered with 400).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DocumentError::Staging(_) | DocumentError::Pdf(_))
    }
}
