use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the upload client and the result decoder.
#[derive(Debug, Error)]
pub enum Error {
    /// The upload request failed: network error, timeout, or a non-2xx
    /// status from the analysis service.
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be read as a ZIP archive, or one of its
    /// entries could not be extracted.
    #[error("invalid result archive: {0}")]
    ArchiveFormat(String),

    /// `score.json` was present but not valid JSON. The decoder recovers
    /// from this (the archive is treated as having no manifest); callers
    /// only ever see it in logs.
    #[error("malformed score manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// The file offered for upload is not a type the service accepts.
    #[error("unsupported input file: {0} (expected .pdf or .docx)")]
    UnsupportedInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a lower-level archive/extraction failure, keeping its chain
    /// in the message.
    pub(crate) fn archive(err: anyhow::Error) -> Self {
        Error::ArchiveFormat(format!("{err:#}"))
    }
}
