use clap::Parser;

use crate::decode::Convention;

#[derive(Parser, Debug)]
#[command(name = "docgap")]
#[command(version)]
#[command(about = "Upload a document for gap analysis and decode the result archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  docgap report.pdf -s https://analysis.example.com   upload and list results\n  \
  docgap results.zip -v                               decode a saved archive, verbose listing\n  \
  docgap report.docx --json -c name-prefix            dump the decoded result as JSON")]
pub struct Cli {
    /// Document to upload (PDF/DOCX) or a saved result archive (.zip)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Analysis service base URL (default: $DOCGAP_API_URL)
    #[arg(short = 's', long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Entry naming convention the service uses
    #[arg(short = 'c', long = "convention", value_enum, default_value_t = Convention::PathPrefix)]
    pub convention: Convention,

    /// List decoded files (short format)
    #[arg(short = 'l')]
    pub list: bool,

    /// List verbosely (category, size, score)
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print the decoded result as JSON (file contents omitted)
    #[arg(long = "json")]
    pub json: bool,

    /// Write decoded files into DIR, one subdirectory per category
    #[arg(short = 'd', value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    /// A `.zip` input is decoded locally; anything else is uploaded first.
    pub fn is_local_archive(&self) -> bool {
        self.file.to_ascii_lowercase().ends_with(".zip")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.json
    }
}
