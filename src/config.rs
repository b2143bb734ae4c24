//! Environment-variable configuration.

use std::env;

/// Names the analysis service base URL when `-s` is not given.
pub const API_URL_VAR: &str = "DOCGAP_API_URL";

/// Comma-separated category names overriding the listing order.
pub const CATEGORY_SEQUENCE_VAR: &str = "DOCGAP_CATEGORY_SEQUENCE";

/// Resolve the service base URL: CLI flag first, then the environment.
pub fn server_base(cli_value: Option<&str>) -> Option<String> {
    cli_value
        .map(str::to_owned)
        .or_else(|| env::var(API_URL_VAR).ok())
        .filter(|s| !s.is_empty())
}

/// Category display order from the environment, when set and non-empty.
pub fn category_sequence() -> Option<Vec<String>> {
    let raw = env::var(CATEGORY_SEQUENCE_VAR).ok()?;
    let seq = parse_sequence(&raw);
    if seq.is_empty() { None } else { Some(seq) }
}

/// Reorder `(category, items)` pairs so names listed in `sequence` come
/// first, in sequence order. Names the sequence does not mention sort
/// last and keep their default relative order.
pub fn order_categories<T>(categories: &mut [(&'static str, T)], sequence: &[String]) {
    categories.sort_by_key(|(name, _)| {
        sequence
            .iter()
            .position(|s| s == name)
            .unwrap_or(sequence.len())
    });
}

fn parse_sequence(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_splits_and_trims() {
        assert_eq!(
            parse_sequence("gapAnalyses, summaryFiles ,excelJsonData"),
            vec!["gapAnalyses", "summaryFiles", "excelJsonData"]
        );
    }

    #[test]
    fn sequence_drops_empty_items() {
        assert_eq!(parse_sequence(",,  ,"), Vec::<String>::new());
        assert_eq!(parse_sequence("a,,b"), vec!["a", "b"]);
    }

    fn names<T>(categories: &[(&'static str, T)]) -> Vec<&'static str> {
        categories.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn sequence_reorders_known_categories() {
        let mut cats = vec![("gapAnalyses", 0), ("summaryFiles", 1), ("excelJsonData", 2)];
        order_categories(&mut cats, &parse_sequence("excelJsonData, gapAnalyses"));
        assert_eq!(names(&cats), ["excelJsonData", "gapAnalyses", "summaryFiles"]);
    }

    #[test]
    fn unlisted_categories_sort_last_in_default_order() {
        let mut cats = vec![("standardAnalyses", 0), ("gapAnalyses", 1), ("summaryFile", 2)];
        order_categories(&mut cats, &parse_sequence("summaryFile"));
        assert_eq!(names(&cats), ["summaryFile", "standardAnalyses", "gapAnalyses"]);
    }

    #[test]
    fn unknown_sequence_names_are_ignored() {
        let mut cats = vec![("gapAnalyses", 0), ("summaryFiles", 1)];
        order_categories(&mut cats, &parse_sequence("totalScore,summaryFiles"));
        assert_eq!(names(&cats), ["summaryFiles", "gapAnalyses"]);
    }
}
