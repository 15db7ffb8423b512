use anyhow::{Context, Result};
use clap::Parser;
use sccconv::subtitle::timed_text;
use sccconv::{Config, ParseReport, SccConverter, SubtitleConverter};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sccconv")]
#[command(version, about = "Convert timed-text subtitles to Scenarist SCC closed captions")]
struct Cli {
    /// Input timed-text file (start --> end blocks)
    input: PathBuf,

    /// Output SCC file (defaults to input name with .scc extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on blocks without a time range instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    force: bool,

    /// Print the parsed caption blocks as JSON instead of writing SCC
    #[arg(long)]
    inspect: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Parsed blocks for `--inspect`. Strict mode fails like a conversion would.
fn inspect_report(content: &str, strict: bool) -> sccconv::Result<ParseReport> {
    if strict {
        let blocks = timed_text::parse_strict(content)?;
        return Ok(ParseReport { blocks, skipped: 0 });
    }
    timed_text::parse_with_report(content)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if !cli.input.exists() {
        anyhow::bail!("Input file not found: {}", cli.input.display());
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    config.strict |= cli.strict;
    config.overwrite |= cli.force;

    let content = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    if cli.inspect {
        let report = inspect_report(&content, config.strict)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let converter = SccConverter {
        strict: config.strict,
    };
    let output = cli
        .output
        .unwrap_or_else(|| derive_output_path(&cli.input, converter.extension()));

    if output.exists() && !config.overwrite {
        anyhow::bail!(
            "Output file already exists: {} (use --force to overwrite)",
            output.display()
        );
    }

    info!("Input:  {}", cli.input.display());
    info!("Output: {}", output.display());

    let internal = converter
        .file_content_to_internal_format(&content)
        .context("Failed to parse timed text")?;
    let scc = converter.internal_format_to_file_content(&internal);

    std::fs::write(&output, scc)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {} caption blocks", internal.len());

    Ok(())
}
