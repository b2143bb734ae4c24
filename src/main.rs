//! Main entry point for the docgap CLI.
//!
//! Dispatches on the input file: a `.zip` is decoded locally, anything
//! else is uploaded to the analysis service first; either way the decoded
//! result is then listed, dumped as JSON, or extracted to a directory.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::Value;
use std::path::Path;
use tracing::error;

use docgap::decode::AnalysisResult;
use docgap::{AnalyzeClient, Cli, ResultDecoder, config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let decoder = ResultDecoder::new(cli.convention);

    let archive = if cli.is_local_archive() {
        // Local result archive: no network involved
        tokio::fs::read(&cli.file)
            .await
            .with_context(|| format!("reading {}", cli.file))?
    } else {
        // Upload the document and take the response body as the archive
        let base = config::server_base(cli.server.as_deref()).ok_or_else(|| {
            anyhow!(
                "no server configured: pass -s URL or set {}",
                config::API_URL_VAR
            )
        })?;
        let client = AnalyzeClient::new(base)?;
        match client.upload(Path::new(&cli.file)).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(%err, file = %cli.file, "upload failed");
                return Err(err.into());
            }
        }
    };

    let result = match decoder.decode(archive).await {
        Ok(result) => result,
        Err(err) => {
            error!(%err, "decoding result archive failed");
            return Err(err.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(ref dir) = cli.output_dir {
        write_result(&result, Path::new(dir), &cli).await?;
    }

    if cli.output_dir.is_none() || cli.list || cli.verbose {
        list_result(&result, cli.verbose);
    }

    Ok(())
}

/// One decoded item, flattened for listing and extraction.
enum Item<'a> {
    File {
        name: &'a str,
        content: &'a [u8],
        score: Option<f64>,
    },
    /// A parsed excel sidecar; written back out as `<name>.json`
    Json { name: &'a str, value: &'a Value },
}

/// Flatten a result into `(category, items)` pairs, ordered by the
/// category sequence from the environment when one is set.
fn categories(result: &AnalysisResult) -> Vec<(&'static str, Vec<Item<'_>>)> {
    let mut cats: Vec<(&'static str, Vec<Item>)> = match result {
        AnalysisResult::Folders(r) => vec![
            (
                "gapAnalyses",
                r.gap_analyses
                    .iter()
                    .map(|f| Item::File {
                        name: &f.name,
                        content: &f.content,
                        score: f.score,
                    })
                    .collect(),
            ),
            (
                "summaryFiles",
                r.summary_files
                    .iter()
                    .map(|f| Item::File {
                        name: &f.name,
                        content: &f.content,
                        score: None,
                    })
                    .collect(),
            ),
            (
                "excelJsonData",
                r.excel_json_data
                    .iter()
                    .map(|(name, value)| Item::Json { name, value })
                    .collect(),
            ),
        ],
        AnalysisResult::Named(r) => vec![
            (
                "standardAnalyses",
                r.standard_analyses
                    .iter()
                    .map(|f| Item::File {
                        name: &f.name,
                        content: &f.content,
                        score: None,
                    })
                    .collect(),
            ),
            (
                "gapAnalyses",
                r.gap_analyses
                    .iter()
                    .map(|f| Item::File {
                        name: &f.name,
                        content: &f.content,
                        score: None,
                    })
                    .collect(),
            ),
            (
                "summaryFile",
                r.summary_file
                    .iter()
                    .map(|f| Item::File {
                        name: &f.name,
                        content: &f.content,
                        score: None,
                    })
                    .collect(),
            ),
        ],
    };

    if let Some(sequence) = config::category_sequence() {
        config::order_categories(&mut cats, &sequence);
    }

    cats
}

/// List decoded files.
///
/// Simple format is one `category/name` per line; verbose adds a table
/// with sizes and scores, plus the total score when the archive carried
/// one.
fn list_result(result: &AnalysisResult, verbose: bool) {
    if verbose {
        println!("{:>8}  {:>10}  {:<18}  Name", "Score", "Size", "Category");
        println!("{}", "-".repeat(60));
    }

    let mut file_count = 0usize;
    for (category, items) in categories(result) {
        for item in items {
            file_count += 1;
            match item {
                Item::File {
                    name,
                    content,
                    score,
                } => {
                    if verbose {
                        let score = score.map_or_else(|| "-".to_string(), |s| format!("{s}"));
                        println!("{:>8}  {:>10}  {:<18}  {}", score, content.len(), category, name);
                    } else {
                        println!("{category}/{name}");
                    }
                }
                Item::Json { name, value } => {
                    if verbose {
                        let size = value.to_string().len();
                        println!("{:>8}  {:>10}  {:<18}  {}.json", "-", size, category, name);
                    } else {
                        println!("{category}/{name}.json");
                    }
                }
            }
        }
    }

    if verbose {
        println!("{}", "-".repeat(60));
        println!("{file_count} files");
        if let AnalysisResult::Folders(r) = result
            && let Some(total) = r.total_score
        {
            println!("Total score: {total}");
        }
    }
}

/// Write decoded files under `dir`, one subdirectory per category.
async fn write_result(result: &AnalysisResult, dir: &Path, cli: &Cli) -> Result<()> {
    for (category, items) in categories(result) {
        if items.is_empty() {
            continue;
        }
        let cat_dir = dir.join(category);
        tokio::fs::create_dir_all(&cat_dir)
            .await
            .with_context(|| format!("creating {}", cat_dir.display()))?;

        for item in items {
            let (path, data) = match item {
                Item::File { name, content, .. } => (cat_dir.join(name), content.to_vec()),
                Item::Json { name, value } => (
                    cat_dir.join(format!("{name}.json")),
                    serde_json::to_vec_pretty(value)?,
                ),
            };

            if !cli.is_quiet() {
                println!("  writing: {}", path.display());
            }
            tokio::fs::write(&path, data)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    Ok(())
}
