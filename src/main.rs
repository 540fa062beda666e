use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use coexist::analysis::classify::ExclusivitySimulator;
use coexist::config::{self, Config};
use coexist::console::Console;
use coexist::input::load_dataset;
use coexist::occurrence::store::KeywordOccurrenceStore;
use coexist::output::{self, AnalysisReport};

/// Coexist: can these keywords plausibly occur together?
///
/// Marks a keyword pair impossible if any two of their recorded occurrences
/// are too far apart in space and time.
#[derive(Parser)]
#[command(name = "coexist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter parameters and keyword occurrences at the prompt
    Interactive {
        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Classify every keyword pair in a JSON dataset
    Analyze {
        /// Dataset file: {"alpha"?, "delta"?, "keywords": {"A": [[x, y, z, t], ...]}}
        #[arg(long, short)]
        input: PathBuf,

        #[command(flatten)]
        params: ParamArgs,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print the result as JSON instead of the colored listing
        #[arg(long)]
        json: bool,
    },

    /// Check a single keyword pair from a JSON dataset
    Check {
        /// First keyword
        first: String,

        /// Second keyword
        second: String,

        /// Dataset file
        #[arg(long, short)]
        input: PathBuf,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(clap::Args)]
struct ParamArgs {
    /// Temporal distance weight (overrides dataset and COEXIST_ALPHA)
    #[arg(long)]
    alpha: Option<f64>,

    /// Distance threshold (overrides dataset and COEXIST_DELTA)
    #[arg(long)]
    delta: Option<f64>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coexist=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Interactive { report } => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            let session = console.run(config.alpha, config.delta)?;
            info!(
                alpha = session.alpha,
                delta = session.delta,
                keywords = session.store.len(),
                "Interactive session complete"
            );

            let report_path = report.or(config.report_path);
            run_analysis(
                session.alpha,
                session.delta,
                session.store,
                report_path.as_deref(),
                false,
            )?;
        }

        Commands::Analyze {
            input,
            params,
            report,
            json,
        } => {
            let dataset = load_dataset(&input)?;
            let (alpha, delta) = resolve_params(&params, dataset.alpha, dataset.delta, &config)?;
            let report_path = report.or(config.report_path);
            run_analysis(alpha, delta, dataset.store, report_path.as_deref(), json)?;
        }

        Commands::Check {
            first,
            second,
            input,
            params,
        } => {
            let dataset = load_dataset(&input)?;
            let (alpha, delta) = resolve_params(&params, dataset.alpha, dataset.delta, &config)?;

            for keyword in [&first, &second] {
                if !dataset.store.contains(keyword) {
                    warn!(keyword = %keyword, "Keyword not in dataset");
                    println!(
                        "{} '{}' has no recorded occurrences; treating the pair as possible.",
                        "Warning:".yellow(),
                        keyword
                    );
                }
            }

            let sim = ExclusivitySimulator::new(alpha, delta).with_store(dataset.store);
            if sim.is_impossible_combination(&first, &second) {
                println!("{} <--> {}: {}", first, second, "impossible".red().bold());
            } else {
                println!("{} & {}: {}", first, second, "possible".green());
            }
        }
    }

    Ok(())
}

/// Pick alpha/delta by precedence: flag > dataset file > environment/default.
fn resolve_params(
    params: &ParamArgs,
    dataset_alpha: Option<f64>,
    dataset_delta: Option<f64>,
    config: &Config,
) -> Result<(f64, f64)> {
    let alpha = params.alpha.or(dataset_alpha).unwrap_or(config.alpha);
    let delta = params.delta.or(dataset_delta).unwrap_or(config.delta);
    config::validate_param("alpha", alpha)?;
    config::validate_param("delta", delta)?;
    Ok((alpha, delta))
}

fn run_analysis(
    alpha: f64,
    delta: f64,
    store: KeywordOccurrenceStore,
    report_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let sim = ExclusivitySimulator::new(alpha, delta).with_store(store);
    let classification = sim.infer_all_possibilities();
    let report = AnalysisReport::new(alpha, delta, sim.store(), classification);

    if json {
        println!("{}", report.to_json()?);
    } else {
        output::terminal::display_keyword_summary(&report);
        output::terminal::display_classification(&report);
    }

    if let Some(path) = report_path {
        output::markdown::write_report(&report, path)?;
        if !json {
            println!("\nReport written to {}", path.display());
        }
    }

    Ok(())
}
