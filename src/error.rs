use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode canvas as PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;
