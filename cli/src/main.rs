use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ogrh_cli::commands::{self, ConsumeOptions, SegmentOptions};
use ogrh_cli::config::load_config;
use ogrh_cli::logging::init_logging;
use ogrh_types::AppConfig;

#[derive(Parser)]
#[command(version, about = "Recover OG-RaidHelper records from WoWCombatLog.txt")]
struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug diagnostics (dropped and implicitly closed records)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ranking segments and print their import blocks
    Segments(SegmentsArgs),
    /// Summarize consume tracking pulls and export statistics
    Consumes(ConsumesArgs),
}

#[derive(Args)]
struct SegmentsArgs {
    logfile: Option<PathBuf>,
    /// Also write the import blocks to a text file
    #[arg(long)]
    export: bool,
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ConsumesArgs {
    logfile: Option<PathBuf>,
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Export pulls as JSON
    #[arg(long)]
    json: bool,
    /// Export one CSV row per player per pull
    #[arg(long)]
    csv: bool,
    /// Export player and encounter statistics CSVs
    #[arg(long)]
    aggregate: bool,
    /// Leaderboard size
    #[arg(long)]
    top: Option<usize>,
    /// Skip the console summary and leaderboard
    #[arg(long)]
    quiet: bool,
}

fn log_path(logfile: &Option<PathBuf>, config: &AppConfig) -> PathBuf {
    logfile
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.log_path))
}

fn output_dir(output: &Option<PathBuf>, config: &AppConfig) -> PathBuf {
    output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir))
}

impl SegmentsArgs {
    fn options(&self, config: &AppConfig) -> SegmentOptions {
        SegmentOptions {
            output_dir: output_dir(&self.output, config),
            export: self.export,
        }
    }
}

impl ConsumesArgs {
    fn options(&self, config: &AppConfig) -> ConsumeOptions {
        ConsumeOptions {
            output_dir: output_dir(&self.output, config),
            json: self.json,
            csv: self.csv,
            aggregate: self.aggregate,
            top: self.top.unwrap_or(config.top_players),
            quiet: self.quiet,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    let result = match &cli.command {
        Commands::Segments(args) => {
            commands::run_segments(&log_path(&args.logfile, &config), &args.options(&config), &config)
        }
        Commands::Consumes(args) => {
            commands::run_consumes(&log_path(&args.logfile, &config), &args.options(&config), &config)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
