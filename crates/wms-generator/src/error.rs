//! Error types for the generator crate.

use thiserror::Error;

/// Errors that can occur while generating the VISS WMS output.
///
/// The host framework sees any of these as a single generic processing
/// failure; no partial output is returned.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to read raster file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to store complex value: {0}")]
    Storage(String),

    #[error("VISS upload failed: {0}")]
    Viss(#[from] viss_client::VissError),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
