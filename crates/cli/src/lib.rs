mod render;
mod schema;
mod types;

use clap::{Parser, Subcommand, ValueEnum};
use sigdoc_core::logging::{self, LogConfig};
use sigdoc_core::{OutputFormat, SignatureDocument};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "sigdoc",
    version,
    about = "Render declared type signatures for API documentation",
    long_about = "sigdoc reads signature documents (JSON member lists whose types are structured \
                  type references) and renders them as canonical source-like signatures, Markdown \
                  with linked type names, or raw fragment streams."
)]
pub struct Cli {
    /// Mirror log output to stderr (log level is taken from RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for rolling log files [default: $SIGDOC_LOG_DIR or ~/.sigdoc/logs]
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "no_log_file")]
    pub log_dir: Option<PathBuf>,

    /// Do not write log files
    #[arg(long, global = true)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every member signature of a document
    #[command(
        long_about = "Renders one signature per member. Markdown output links type names using \
                            the optional render config (explicit links first, then --base-url)."
    )]
    Render {
        /// Path to the signature document (JSON)
        #[arg(value_name = "DOCUMENT")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Render config with link table (JSON)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Base URL for type links; overrides the config value
        #[arg(long)]
        base_url: Option<String>,

        /// Reject malformed documents instead of rendering them by priority order
        #[arg(long)]
        strict: bool,
    },
    /// List the concrete type names a document references
    Types {
        /// Path to the signature document (JSON)
        #[arg(value_name = "DOCUMENT")]
        path: PathBuf,

        /// Reject malformed documents
        #[arg(long)]
        strict: bool,
    },
    /// Show the JSON schema of signature documents
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Markdown,
    Fragments,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Markdown => OutputFormat::Markdown,
            Format::Fragments => OutputFormat::Fragments,
        }
    }
}

impl Cli {
    fn file_log_dir(&self) -> Option<PathBuf> {
        if self.no_log_file {
            return None;
        }
        Some(self.log_dir.clone().unwrap_or_else(logging::default_log_dir))
    }
}

fn load_document(path: &Path, strict: bool) -> sigdoc_core::Result<SignatureDocument> {
    let doc = SignatureDocument::load_from_file(path)?;
    if strict {
        doc.validate()?;
    }
    info!(
        "Loaded {} ({} members) from {}",
        doc.owner,
        doc.members.len(),
        path.display()
    );
    Ok(doc)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = LogConfig::new("cli")
        .with_stderr(cli.verbose)
        .with_log_dir(cli.file_log_dir())
        .init()?;

    match cli.command {
        Commands::Render {
            path,
            format,
            config,
            base_url,
            strict,
        } => render::run(path, format.into(), config, base_url, strict),
        Commands::Types { path, strict } => types::run(path, strict),
        Commands::Schema => schema::run(),
    }
}
