//! Command-line surface
//!
//! Reads an adjacency-list file, solves it, and writes scores to the primary
//! stream and the ranking to the diagnostic stream.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::output;
use crate::pagerank::solver::PageRankSolver;
use crate::types::{DanglingPolicy, PageRankConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scores on stdout, ranking on stderr
    #[default]
    Text,
    /// Single JSON report on stdout
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "rapid-pagerank",
    version,
    about = "PageRank of an adjacency-list graph"
)]
pub struct Cli {
    /// Adjacency-list file, one `<vertex>:<n1>,<n2>,...` row per line
    pub input: PathBuf,

    /// Damping factor in [0, 1]
    #[arg(allow_negative_numbers = true)]
    pub alpha: f64,

    /// Stop once every per-vertex change is below this value
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Give up after this many iterations
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Treatment of vertices with no outgoing edges (ignore | redistribute)
    #[arg(long, value_name = "POLICY")]
    pub dangling: Option<DanglingPolicy>,

    /// JSON file with solver settings; flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge the optional config file with command-line overrides.
    pub fn build_config(&self) -> Result<PageRankConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PageRankConfig::default(),
        };

        config.damping = self.alpha;
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(cap) = self.max_iterations {
            config.max_iterations = Some(cap);
        }
        if let Some(policy) = self.dangling {
            config.dangling = policy;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read a JSON [`PageRankConfig`]. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<PageRankConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Run the full pipeline, writing to the given streams.
pub fn run<O: Write, E: Write>(cli: &Cli, stdout: &mut O, stderr: &mut E) -> Result<()> {
    let config = cli.build_config()?;
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read input file {}", cli.input.display()))?;
    debug!(path = %cli.input.display(), bytes = text.len(), "read input");

    let mut solver = PageRankSolver::from_text(&text, config)
        .with_context(|| format!("cannot build graph from {}", cli.input.display()))?;
    info!(
        vertices = solver.num_nodes(),
        edges = solver.out_graph().num_edges(),
        "solving"
    );
    let result = solver.compute_page_rank();

    match cli.format {
        OutputFormat::Text => {
            output::write_scores(stdout, &result.scores)?;
            output::write_ranking(stderr, &result.ranking())?;
        }
        OutputFormat::Json => output::write_json(stdout, &result)?,
    }
    stdout.flush()?;
    stderr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_args() {
        let cli = Cli::try_parse_from(["rapid-pagerank", "graph.txt", "0.85"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("graph.txt"));
        assert_eq!(cli.alpha, 0.85);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_missing_alpha_is_rejected() {
        assert!(Cli::try_parse_from(["rapid-pagerank", "graph.txt"]).is_err());
    }

    #[test]
    fn test_unparseable_alpha_is_rejected() {
        assert!(Cli::try_parse_from(["rapid-pagerank", "graph.txt", "high"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "rapid-pagerank",
            "graph.txt",
            "0.5",
            "--tolerance",
            "1e-6",
            "--max-iterations",
            "50",
            "--dangling",
            "redistribute",
            "-vv",
        ])
        .unwrap();
        let config = cli.build_config().unwrap();

        assert_eq!(config.damping, 0.5);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, Some(50));
        assert_eq!(config.dangling, DanglingPolicy::Redistribute);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_out_of_range_alpha_fails_validation() {
        let cli = Cli::try_parse_from(["rapid-pagerank", "graph.txt", "-0.5"]).unwrap();
        assert!(cli.build_config().is_err());
    }
}
