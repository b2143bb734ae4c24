//! # docgap
//!
//! Client for a document gap-analysis service.
//!
//! The service takes a PDF or DOCX over a multipart POST and answers with a
//! ZIP archive of result files: gap-analysis spreadsheets, summary
//! documents, JSON sidecars for rendering, and an optional `score.json`
//! manifest. This crate uploads the document, then decodes that archive
//! into a typed result by classifying each entry under a configurable
//! naming [`Convention`].
//!
//! ## Example
//!
//! ```no_run
//! use docgap::{AnalyzeClient, Convention, ResultDecoder};
//!
//! #[tokio::main]
//! async fn main() -> docgap::Result<()> {
//!     let client = AnalyzeClient::new("https://analysis.example.com")?;
//!     let archive = client.upload(std::path::Path::new("report.pdf")).await?;
//!
//!     let decoder = ResultDecoder::new(Convention::PathPrefix);
//!     let result = decoder.decode(archive).await?;
//!     println!("{}", serde_json::to_string_pretty(&result).unwrap());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod io;
pub mod zip;

pub use api::AnalyzeClient;
pub use cli::Cli;
pub use decode::{AnalysisResult, Convention, ResultDecoder};
pub use error::{Error, Result};
pub use io::{MemoryReader, ReadAt};
pub use zip::{ZipExtractor, ZipFileEntry};
