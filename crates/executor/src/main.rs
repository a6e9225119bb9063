pub mod config;
pub mod csv_source;
pub mod edge_list;
pub mod error;
pub mod pipeline;
pub mod random_source;
pub mod types;
pub mod writer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use apsp_core::FloydWarshallSolver;
use csv_source::CsvSource;
use edge_list::EdgeListSource;
use error::Error;
use pipeline::{Pipeline, RunOutcome};
use random_source::RandomSource;
use types::OutputFormat;
use writer::ResultWriter;

/// Exit status reported when the input graph contains a negative cycle.
const NEGATIVE_CYCLE_EXIT_CODE: u8 = 2;

/// All-pairs shortest paths with negative cycle detection.
#[derive(Debug, Parser)]
#[command(name = "apsp", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format (overrides the configuration file).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the per-pair path listing from the report.
    #[arg(long, global = true)]
    no_paths: bool,

    /// Abort the solve after this many milliseconds.
    #[arg(long, global = true)]
    deadline_ms: Option<u64>,

    #[command(subcommand)]
    source: SourceCommand,
}

#[derive(Debug, Subcommand)]
enum SourceCommand {
    /// Read a plain edge list: vertex count, then `u v w` lines (1-indexed).
    Edges { input: PathBuf, output: PathBuf },

    /// Read a CSV file with a `from,to,weight` header (1-indexed).
    Csv {
        input: PathBuf,
        output: PathBuf,

        /// Vertex count; defaults to the largest id in the file.
        #[arg(long)]
        vertices: Option<usize>,
    },

    /// Generate a random graph from the `[generator]` settings.
    Random {
        output: PathBuf,

        #[arg(long)]
        vertices: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Controlled via RUST_LOG, e.g. RUST_LOG=apsp=debug,apsp_core=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("apsp=info,apsp_core=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(RunOutcome::Solved { .. }) => ExitCode::SUCCESS,
        Ok(RunOutcome::NegativeCycle { .. }) => ExitCode::from(NEGATIVE_CYCLE_EXIT_CODE),
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<RunOutcome, Error> {
    let mut config = config::load_config(cli.config.as_deref())?;

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_paths {
        config.output.show_paths = false;
    }
    if let Some(deadline_ms) = cli.deadline_ms {
        config.solver.deadline_ms = deadline_ms;
    }

    let solver = match config.solver.deadline_ms {
        0 => FloydWarshallSolver::new(),
        ms => FloydWarshallSolver::with_deadline(Duration::from_millis(ms)),
    };
    let writer = ResultWriter::new(config.output.format, config.output.show_paths);
    let pipeline = Pipeline::new(solver, writer);

    match cli.source {
        SourceCommand::Edges { input, output } => {
            info!("Starting edge list pipeline...");
            pipeline.run(&EdgeListSource::new(input), &output).await
        }
        SourceCommand::Csv {
            input,
            output,
            vertices,
        } => {
            info!("Starting CSV pipeline...");
            pipeline.run(&CsvSource::new(input, vertices), &output).await
        }
        SourceCommand::Random {
            output,
            vertices,
            seed,
        } => {
            info!("Starting random graph pipeline...");
            let mut settings = config.generator.clone();
            if let Some(vertices) = vertices {
                settings.vertices = vertices;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            pipeline.run(&RandomSource::new(settings), &output).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_edges_subcommand_with_global_flags() {
        let cli = Cli::try_parse_from([
            "apsp", "edges", "in.txt", "out.txt", "--format", "json", "--no-paths",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_paths);
        assert!(matches!(cli.source, SourceCommand::Edges { .. }));
    }

    #[test]
    fn parses_random_subcommand_overrides() {
        let cli = Cli::try_parse_from(["apsp", "random", "out.txt", "--vertices", "4", "--seed", "9"])
            .unwrap();

        match cli.source {
            SourceCommand::Random { vertices, seed, .. } => {
                assert_eq!(vertices, Some(4));
                assert_eq!(seed, Some(9));
            }
            other => panic!("Expected random subcommand, got {:?}", other),
        }
    }

    #[test]
    fn missing_output_is_rejected() {
        assert!(Cli::try_parse_from(["apsp", "edges", "in.txt"]).is_err());
    }
}
