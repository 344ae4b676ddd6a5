use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ranked_index::writer;
use ranked_index::{Config, Format, Index};

#[derive(Parser)]
#[command(name = "index")]
#[command(about = "Build a ranked inverted index of the files under a path", long_about = None)]
struct Args {
    /// File the index is written to
    output: PathBuf,

    /// File or directory to index
    input: PathBuf,

    /// Output format (text, json)
    #[arg(long, env = "RANKED_INDEX_FORMAT", default_value = "text")]
    format: Format,

    /// Documents per line in the text format
    #[arg(long, env = "RANKED_INDEX_PER_LINE", default_value_t = ranked_index::config::DEFAULT_PER_LINE)]
    per_line: usize,

    /// Keep terms in their original case
    #[arg(long, env = "RANKED_INDEX_CASE_SENSITIVE")]
    case_sensitive: bool,

    /// Replace the output file if it already exists
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::default()
        .with_format(args.format)
        .with_per_line(args.per_line)
        .with_lowercase(!args.case_sensitive)
        .with_overwrite(args.force);
    config.validate()?;

    // Fail before doing any work if the output would clobber a file.
    writer::check_output(&args.output, config.overwrite)?;

    let mut index = Index::with_config(&config);
    let documents = index
        .index_path(&args.input)
        .with_context(|| format!("failed to index {}", args.input.display()))?;

    writer::write_to_path(&index, &config, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        documents,
        terms = index.term_count(),
        output = %args.output.display(),
        "wrote index"
    );
    Ok(())
}
