use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core qwell library calculations.
    #[error("Calculation error: {0}")]
    Calculation(#[from] qwell::QwellError),

    /// A calculation error for one named well of a batch.
    #[error("Calculation error for well '{name}'")]
    Well {
        name: String,
        #[source]
        source: qwell::QwellError,
    },

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Errors serializing JSON output.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Command-line arguments that do not describe a calculation.
    #[error("Invalid usage: {0}")]
    Usage(String),
}
