use clap::ValueEnum;

/// Entry-naming convention the analysis service uses for its result
/// archives.
///
/// The service has shipped two mutually exclusive layouts over time; which
/// one a deployment speaks is configuration, not something the decoder
/// guesses. Exactly one convention is applied per decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Convention {
    /// Entries grouped by folder: `analysis/`, `summary/`, `excel_data/`,
    /// with an optional `score.json` manifest at the root.
    PathPrefix,
    /// Flat archives matched by basename: `standard_analyses*` and
    /// `gap_analyses*` spreadsheets, a single `*summary*.pdf|.docx`.
    NamePrefix,
    /// [`NamePrefix`](Convention::NamePrefix) plus the legacy positional
    /// guess when nothing matches by name. Compatibility shim for old
    /// server builds, not a contract worth relying on.
    NamePrefixFallback,
}

/// Extensions the service emits for tabular results.
pub(crate) const SPREADSHEET_EXTS: &[&str] = &["xlsx", "xls", "csv"];

/// Plain-text extensions recognized by the positional fallback.
pub(crate) const TEXT_EXTS: &[&str] = &["txt", "text"];

/// Lowercased extension of `name`, without the dot.
pub(crate) fn extension(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    Some(name[dot + 1..].to_ascii_lowercase())
}

pub(crate) fn has_extension(name: &str, exts: &[&str]) -> bool {
    extension(name).is_some_and(|e| exts.contains(&e.as_str()))
}

/// Strip a trailing `.json` (any case) from a side-data entry name, leaving
/// the spreadsheet name it describes.
pub(crate) fn strip_json_suffix(name: &str) -> &str {
    if name.len() > 5 && name[name.len() - 5..].eq_ignore_ascii_case(".json") {
        &name[..name.len() - 5]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension("Report.XLSX").as_deref(), Some("xlsx"));
        assert_eq!(extension("notes.txt").as_deref(), Some("txt"));
    }

    #[test]
    fn extension_edge_cases() {
        assert_eq!(extension("noext"), None);
        assert_eq!(extension(".hidden"), None);
        assert_eq!(extension("trailing."), None);
    }

    #[test]
    fn spreadsheet_detection() {
        assert!(has_extension("Gap_Analyses_2024.xls", SPREADSHEET_EXTS));
        assert!(has_extension("data.CSV", SPREADSHEET_EXTS));
        assert!(!has_extension("summary.pdf", SPREADSHEET_EXTS));
    }

    #[test]
    fn json_suffix_strip() {
        assert_eq!(strip_json_suffix("report.xlsx.json"), "report.xlsx");
        assert_eq!(strip_json_suffix("report.xlsx.JSON"), "report.xlsx");
        assert_eq!(strip_json_suffix("report.xlsx"), "report.xlsx");
        assert_eq!(strip_json_suffix(".json"), ".json");
    }

    #[test]
    fn text_detection() {
        assert!(has_extension("notes.txt", TEXT_EXTS));
        assert!(!has_extension("notes.md.bak", TEXT_EXTS));
    }
}
