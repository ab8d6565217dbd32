// rearranger: reorder a table's columns to match another table's column order

use anyhow::{Context, Result};
use clap::Parser;
use rearranger::{Database, DatabaseInterface, RearrangeConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rearranger")]
#[command(about = "Rearrange a table's columns into another table's column order", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON database file holding both tables
    #[arg(long)]
    db: PathBuf,

    /// Table whose columns are rearranged
    #[arg(long)]
    source: String,

    /// Table whose column order is copied
    #[arg(long)]
    target: String,

    /// Name of the rearranged table (defaults to source name plus the configured suffix)
    #[arg(long)]
    output: Option<String>,

    /// Overwrite the source table with the rearranged one
    #[arg(long)]
    replace: bool,

    /// Write the database here instead of back to --db
    #[arg(long)]
    out_file: Option<PathBuf>,

    /// Configuration file (JSON or TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<RearrangeConfig> {
    let mut config = match &cli.config {
        Some(path) => RearrangeConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => RearrangeConfig::default(),
    };
    if cli.replace {
        config.replace_source = true;
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    Ok(config)
}

fn run(cli: Cli, config: RearrangeConfig) -> Result<()> {
    let mut db = Database::load_from_file(&cli.db)
        .with_context(|| format!("Failed to load database: {}", cli.db.display()))?;

    let output = config.output_name(&cli.source, cli.output.as_deref());
    let written = db
        .realign(&cli.source, &cli.target, &output)
        .with_context(|| {
            format!(
                "Failed to rearrange '{}' into the column order of '{}'",
                cli.source, cli.target
            )
        })?;

    let out_path = cli.out_file.unwrap_or(cli.db);
    db.save_to_file(&out_path, config.pretty)
        .with_context(|| format!("Failed to save database: {}", out_path.display()))?;

    info!(output = %output, rows = written, path = %out_path.display(), "done");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(cli, config)
}
