//! Decoded result shapes and the score manifest.
//!
//! The JSON field names mirror the service's own wire vocabulary
//! (`gapAnalyses`, `summaryFiles`, ...), so a `--json` dump of a decoded
//! archive reads like the service contract. Raw file contents are skipped
//! during serialization; extraction writes them to disk instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A decoded result file.
#[derive(Debug, Clone, Serialize)]
pub struct ResultFile {
    pub name: String,
    #[serde(skip)]
    pub content: Vec<u8>,
}

/// A gap-analysis file, optionally carrying its manifest score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredFile {
    pub name: String,
    #[serde(skip)]
    pub content: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// The single summary document of a name-prefix archive.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDoc {
    pub name: String,
    #[serde(skip)]
    pub content: Vec<u8>,
    /// Lowercased extension: `pdf` or `docx`
    #[serde(rename = "type")]
    pub doc_type: String,
}

/// Result of decoding a path-prefix archive.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResults {
    pub gap_analyses: Vec<ScoredFile>,
    pub summary_files: Vec<ResultFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    /// Parsed `excel_data/` sidecars, keyed by the spreadsheet they
    /// describe (entry basename with `.json` stripped).
    pub excel_json_data: BTreeMap<String, Value>,
}

/// Result of decoding a name-prefix (or fallback) archive.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedResults {
    pub standard_analyses: Vec<ResultFile>,
    pub gap_analyses: Vec<ResultFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<SummaryDoc>,
}

/// A decoded result archive; the variant matches the convention that was
/// in force for the decode.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Folders(FolderResults),
    Named(NamedResults),
}

/// The `score.json` manifest shipped inside path-prefix archives.
///
/// Both fields are optional on the wire; a manifest carrying only
/// `totalScore` is valid.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreManifest {
    pub gap_analyses: Vec<ManifestScore>,
    pub total_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestScore {
    pub name: String,
    pub score: f64,
}

impl ScoreManifest {
    /// Score for a gap-analysis file, by exact basename match.
    pub fn score_for(&self, name: &str) -> Option<f64> {
        self.gap_analyses
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.score)
    }
}
