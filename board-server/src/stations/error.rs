//! Station directory error types.

/// Errors loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Reading the stations file failed
    #[error("failed to read stations file: {0}")]
    Io(#[from] std::io::Error),

    /// The stations file was not valid JSON
    #[error("stations file parse error: {message}")]
    Json { message: String },
}
