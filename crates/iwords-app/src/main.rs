use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use iwords_config::Config;
use iwords_config::display::DisplayMode;
use iwords_core::language::LanguageProcessor;
use iwords_lang_latin::LatinProcessor;

pub mod output;

use self::output::Options;

#[derive(Parser)]
#[command(name = "iwords")]
#[command(about = "Turn WORDS engine output into structured Latin definitions")]
struct Cli {
    /// File holding the engine output, stdin when omitted
    input: Option<PathBuf>,

    /// Input is an already isolated report block
    #[arg(long)]
    block: bool,

    /// Output mode: raw or pretty
    #[arg(long)]
    mode: Option<DisplayMode>,

    /// JSON profile used instead of IWORDS_* environment settings
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Print QUERY cleaned up for the engine's input and exit
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Append the engine output to the result
    #[arg(long)]
    diagnostic: bool,

    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.profile.as_deref())?;

    // Initialize logging
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let processor = processor_for(&config.lookup.language)?;
    tracing::debug!("Using {} processor", processor.language_code());

    if let Some(query) = &cli.query {
        println!("{}", prepare_query(processor.as_ref(), query)?);
        return Ok(());
    }

    let input = read_input(cli.input.as_deref())?;
    let options = Options {
        mode: cli.mode.unwrap_or(config.display.mode),
        block: cli.block,
        diagnostic: cli.diagnostic || config.lookup.diagnostic,
        show_possibilities: config.display.show_possibilities,
    };

    let rendered = output::render(processor.as_ref(), &input, &options)?;
    println!("{rendered}");

    Ok(())
}

fn load_config(profile: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = profile else {
        return Ok(Config::new());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    Config::from_json(&json).with_context(|| format!("Invalid profile {}", path.display()))
}

/// Normalise a query into the single line the engine reads
fn prepare_query(processor: &dyn LanguageProcessor, query: &str) -> anyhow::Result<String> {
    let query = processor.normalize(query);
    if query.is_empty() {
        bail!("Query is empty after normalization");
    }
    Ok(query)
}

fn processor_for(language: &str) -> anyhow::Result<Box<dyn LanguageProcessor>> {
    match language {
        "la" => Ok(Box::new(LatinProcessor::new())),
        other => bail!("No language processor for {other:?}"),
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            tracing::info!("Reading engine output from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
