//! Upload client for the analysis service.
//!
//! One call: POST the document as a multipart form to
//! `<base-url>/api/v1/upload` and hand the response body back as raw bytes
//! for the decoder. No retries and no backoff; a failed upload surfaces
//! as-is and the user decides whether to try again.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Path suffix appended to the configured base URL.
const UPLOAD_PATH: &str = "/api/v1/upload";

/// Analysis runs can take a while on large documents.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// HTTP client for the analysis service.
pub struct AnalyzeClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalyzeClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Multipart field name the service expects for this document type.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedInput`] for anything that is not a PDF or DOCX.
    /// Checked before any file or network I/O happens.
    pub fn field_name(path: &Path) -> Result<&'static str> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf") => Ok("pdf_file"),
            Some("docx") => Ok("docx_file"),
            _ => Err(Error::UnsupportedInput(path.display().to_string())),
        }
    }

    /// Upload a document and return the result archive bytes.
    pub async fn upload(&self, path: &Path) -> Result<Vec<u8>> {
        let field = Self::field_name(path)?;

        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new().part(field, Part::bytes(data).file_name(file_name));

        let url = format!("{}{}", self.base_url, UPLOAD_PATH);
        debug!(%url, field, "uploading document");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        info!(bytes = body.len(), "received result archive");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_by_extension() {
        assert_eq!(AnalyzeClient::field_name(Path::new("a.pdf")).unwrap(), "pdf_file");
        assert_eq!(AnalyzeClient::field_name(Path::new("A.PDF")).unwrap(), "pdf_file");
        assert_eq!(
            AnalyzeClient::field_name(Path::new("report.docx")).unwrap(),
            "docx_file"
        );
    }

    #[test]
    fn rejects_unsupported_types_before_any_io() {
        let err = AnalyzeClient::field_name(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput(_)));
        assert!(matches!(
            AnalyzeClient::field_name(Path::new("no_extension")),
            Err(Error::UnsupportedInput(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = AnalyzeClient::new("https://example.com/").unwrap();
        assert_eq!(client.base_url, "https://example.com");
    }
}
