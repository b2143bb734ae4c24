//! Archive result decoder.
//!
//! The analysis service answers an upload with a ZIP archive of result
//! files. [`ResultDecoder`] opens those bytes, classifies each entry under
//! the configured [`Convention`], extracts classified entries into memory,
//! and cross-references the optional `score.json` manifest.
//!
//! Everything is built fresh per [`decode`](ResultDecoder::decode) call:
//! the archive handle lives exactly as long as the call, and no state is
//! shared between decodes. Category order follows archive entry order;
//! unrecognized entries and directory markers are skipped.

mod convention;
mod result;

pub use convention::Convention;
pub use result::{
    AnalysisResult, FolderResults, ManifestScore, NamedResults, ResultFile, ScoreManifest,
    ScoredFile, SummaryDoc,
};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::MemoryReader;
use crate::zip::{ZipExtractor, ZipFileEntry};
use convention::{SPREADSHEET_EXTS, TEXT_EXTS, extension, has_extension, strip_json_suffix};

/// Fixed name of the score manifest entry, matched case-insensitively
/// against the full entry path.
pub const SCORE_MANIFEST_NAME: &str = "score.json";

/// Decodes result archives under one fixed [`Convention`].
pub struct ResultDecoder {
    convention: Convention,
}

impl ResultDecoder {
    pub fn new(convention: Convention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Decode a result archive into its structured form.
    ///
    /// # Errors
    ///
    /// [`Error::ArchiveFormat`] when the bytes are not a readable ZIP
    /// container or an entry cannot be extracted. A present-but-malformed
    /// `score.json` is *not* an error: it is logged and the decode
    /// continues without a manifest.
    pub async fn decode(&self, archive: Vec<u8>) -> Result<AnalysisResult> {
        let reader = Arc::new(MemoryReader::new(archive));
        let extractor = ZipExtractor::new(reader);
        let entries = extractor.list_files().await.map_err(Error::archive)?;
        debug!(
            entries = entries.len(),
            convention = ?self.convention,
            "decoding result archive"
        );

        match self.convention {
            Convention::PathPrefix => self
                .decode_folders(&extractor, &entries)
                .await
                .map(AnalysisResult::Folders),
            Convention::NamePrefix => self
                .decode_named(&extractor, &entries, false)
                .await
                .map(AnalysisResult::Named),
            Convention::NamePrefixFallback => self
                .decode_named(&extractor, &entries, true)
                .await
                .map(AnalysisResult::Named),
        }
    }

    /// Path-prefix convention: entries grouped under `analysis/`,
    /// `summary/` and `excel_data/` folders, scores attached from the
    /// manifest by exact basename match.
    async fn decode_folders(
        &self,
        extractor: &ZipExtractor<MemoryReader>,
        entries: &[ZipFileEntry],
    ) -> Result<FolderResults> {
        let manifest = read_manifest(extractor, entries).await?;

        let mut out = FolderResults {
            total_score: manifest.as_ref().and_then(|m| m.total_score),
            ..FolderResults::default()
        };

        for entry in entries {
            if entry.is_directory {
                continue;
            }
            let lower = entry.file_name.to_ascii_lowercase();

            if lower.starts_with("analysis/") {
                let content = extractor
                    .extract_to_memory(entry)
                    .await
                    .map_err(Error::archive)?;
                let name = entry.basename().to_string();
                let score = manifest.as_ref().and_then(|m| m.score_for(&name));
                out.gap_analyses.push(ScoredFile {
                    name,
                    content,
                    score,
                });
            } else if lower.starts_with("summary/") {
                let content = extractor
                    .extract_to_memory(entry)
                    .await
                    .map_err(Error::archive)?;
                out.summary_files.push(ResultFile {
                    name: entry.basename().to_string(),
                    content,
                });
            } else if lower.starts_with("excel_data/") {
                let text = extractor
                    .extract_to_string(entry)
                    .await
                    .map_err(Error::archive)?;
                match serde_json::from_str(&text) {
                    Ok(value) => {
                        let key = strip_json_suffix(entry.basename()).to_string();
                        out.excel_json_data.insert(key, value);
                    }
                    Err(err) => {
                        warn!(file = %entry.file_name, %err, "skipping unparseable excel sidecar");
                    }
                }
            }
        }

        Ok(out)
    }

    /// Filename-prefix convention, with the optional positional guess.
    async fn decode_named(
        &self,
        extractor: &ZipExtractor<MemoryReader>,
        entries: &[ZipFileEntry],
        positional_fallback: bool,
    ) -> Result<NamedResults> {
        let mut out = NamedResults::default();

        for entry in entries {
            if entry.is_directory {
                continue;
            }
            let lower = entry.basename().to_ascii_lowercase();

            if lower.starts_with("standard_analyses") && has_extension(&lower, SPREADSHEET_EXTS) {
                out.standard_analyses
                    .push(read_file(extractor, entry).await?);
            } else if lower.starts_with("gap_analyses") && has_extension(&lower, SPREADSHEET_EXTS) {
                out.gap_analyses.push(read_file(extractor, entry).await?);
            } else if lower.contains("summary")
                && (lower.ends_with(".pdf") || lower.ends_with(".docx"))
            {
                // Last match wins when several summaries exist.
                out.summary_file = Some(read_summary(extractor, entry).await?);
            }
        }

        let nothing_matched = out.standard_analyses.is_empty()
            && out.gap_analyses.is_empty()
            && out.summary_file.is_none();

        if positional_fallback && nothing_matched {
            self.assign_positionally(extractor, entries, &mut out)
                .await?;
        }

        Ok(out)
    }

    /// Legacy positional guess: in archive order, the first two spreadsheet
    /// entries become standard and gap, the first plain-text entry becomes
    /// the summary. Only runs when name matching produced nothing and the
    /// archive holds at least three content entries.
    async fn assign_positionally(
        &self,
        extractor: &ZipExtractor<MemoryReader>,
        entries: &[ZipFileEntry],
        out: &mut NamedResults,
    ) -> Result<()> {
        let files: Vec<&ZipFileEntry> = entries.iter().filter(|e| !e.is_directory).collect();
        if files.len() < 3 {
            return Ok(());
        }
        warn!(
            entries = files.len(),
            "no entries matched by name, falling back to positional assignment"
        );

        let mut sheets = files
            .iter()
            .filter(|e| has_extension(&e.basename().to_ascii_lowercase(), SPREADSHEET_EXTS));
        if let Some(entry) = sheets.next() {
            out.standard_analyses
                .push(read_file(extractor, entry).await?);
        }
        if let Some(entry) = sheets.next() {
            out.gap_analyses.push(read_file(extractor, entry).await?);
        }

        let summary = files
            .iter()
            .find(|e| has_extension(&e.basename().to_ascii_lowercase(), TEXT_EXTS));
        if let Some(entry) = summary {
            out.summary_file = Some(read_summary(extractor, entry).await?);
        }

        Ok(())
    }
}

async fn read_file(
    extractor: &ZipExtractor<MemoryReader>,
    entry: &ZipFileEntry,
) -> Result<ResultFile> {
    let content = extractor
        .extract_to_memory(entry)
        .await
        .map_err(Error::archive)?;
    Ok(ResultFile {
        name: entry.basename().to_string(),
        content,
    })
}

async fn read_summary(
    extractor: &ZipExtractor<MemoryReader>,
    entry: &ZipFileEntry,
) -> Result<SummaryDoc> {
    let content = extractor
        .extract_to_memory(entry)
        .await
        .map_err(Error::archive)?;
    let doc_type = extension(entry.basename()).unwrap_or_default();
    Ok(SummaryDoc {
        name: entry.basename().to_string(),
        content,
        doc_type,
    })
}

/// Locate and parse `score.json`.
///
/// Absent manifest and malformed JSON both come back as `None`; the
/// malformed case is a recovered [`Error::ManifestParse`], logged here and
/// never surfaced. A manifest entry that cannot be extracted at all is a
/// container problem and fails the decode.
async fn read_manifest(
    extractor: &ZipExtractor<MemoryReader>,
    entries: &[ZipFileEntry],
) -> Result<Option<ScoreManifest>> {
    let entry = entries
        .iter()
        .find(|e| !e.is_directory && e.file_name.eq_ignore_ascii_case(SCORE_MANIFEST_NAME));
    let Some(entry) = entry else {
        return Ok(None);
    };

    let text = extractor
        .extract_to_string(entry)
        .await
        .map_err(Error::archive)?;

    match serde_json::from_str::<ScoreManifest>(&text) {
        Ok(manifest) => Ok(Some(manifest)),
        Err(err) => {
            let err = Error::ManifestParse(err);
            warn!(%err, "ignoring malformed score manifest");
            Ok(None)
        }
    }
}
