//! easystruct CLI - Request extractor generator
//!
//! `easystruct [OPTIONS] [FILES]...` writes `<name>_easystruct.rs` next to
//! every `<name>.rs` that has annotated structs.

use anyhow::Context;
use clap::{ArgAction, Parser};
use easystruct_cli::{GeneratorConfig, Generator, logging};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "easystruct")]
#[command(author, version, about = "Generate request extractors for annotated Rust structs", long_about = None)]
struct Cli {
    /// Rust source files to scan
    files: Vec<PathBuf>,

    /// Path to a TOML generator config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep processing the remaining files after a failure
    #[arg(short, long)]
    keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if cli.keep_going {
        config.keep_going = true;
    }
    config.validate()?;

    let report = Generator::new(config).run(&cli.files);

    let mut errors = report.into_errors();
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0).into()),
        count => {
            for err in errors {
                error!("{:#}", anyhow::Error::new(err));
            }
            anyhow::bail!("{count} files failed to generate");
        }
    }
}
