use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for splitter initialization and artifact loading.
///
/// `Splitter::split` itself is total and never returns an error; everything
/// here can only surface while building a splitter or loading artifacts.
#[derive(Error, Debug)]
pub enum SplitterError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error in a frequency artifact.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// No frequency table was supplied and no default artifact was found.
    #[error("missing frequency artifact: looked for {}", .0.display())]
    MissingFrequencyArtifact(PathBuf),

    /// An artifact exists but its contents could not be decoded.
    #[error("corrupt artifact {}: {reason}", .path.display())]
    CorruptArtifact { path: PathBuf, reason: String },

    /// A numeric parameter is outside its documented range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
