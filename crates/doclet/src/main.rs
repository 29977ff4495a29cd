//! Doclet CLI - host front end for XML documentation generation.
//!
//! The upstream parser/type-resolver runs elsewhere and hands the
//! resolved element model over as JSON; this binary loads it, applies
//! the output options, and runs one generation pass.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use doclet_model::DocModel;
use doclet_xml::{EscapeMode, generate};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "doclet")]
#[command(about = "Generate XML documentation from a parsed source model")]
#[command(version)]
struct Args {
    /// Path to the element model JSON ('-' for stdin)
    model: PathBuf,

    /// Destination directory for the output file
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: String,

    /// Output filename
    #[arg(long, default_value = "javadoc.xml")]
    filename: String,

    /// Keep escape sequences in documentation comments as-is;
    /// `--escape false` folds them into literal characters
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    escape: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doclet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let output_dir = normalize_output_dir(&args.output_dir);
    if !output_dir.is_dir() {
        bail!("Invalid output directory: {}", output_dir.display());
    }

    info!(
        output_dir = %output_dir.display(),
        filename = %args.filename,
        escape = args.escape,
        "starting generation"
    );

    let model = load_model(&args.model)?;
    let escape = if args.escape { EscapeMode::Preserve } else { EscapeMode::Unescape };

    let path = output_dir.join(&args.filename);
    generate(&path, &model, escape)
        .with_context(|| format!("Error generating XML: {}", path.display()))?;

    info!(path = %path.display(), "wrote XML documentation");
    Ok(())
}

/// Trim trailing path separators from the `-d` argument.
fn normalize_output_dir(dir: &str) -> PathBuf {
    PathBuf::from(dir.trim_end_matches('/'))
}

fn load_model(path: &Path) -> Result<DocModel> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("reading model from stdin")?;
        DocModel::from_json(&content).context("parsing model JSON from stdin")
    } else {
        let file = File::open(path)
            .with_context(|| format!("opening model file: {}", path.display()))?;
        DocModel::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing model JSON: {}", path.display()))
    }
}
