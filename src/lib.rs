//! PageRank over textual adjacency lists
//!
//! The pipeline is: parse text into a forward [`CsrGraph`], transpose it,
//! run damped power iteration with [`PageRankSolver`], then order vertices
//! by descending score.
//!
//! ```rust
//! use rapid_pagerank::{PageRankConfig, PageRankSolver};
//!
//! let mut solver = PageRankSolver::from_text("0:1\n1:0\n", PageRankConfig::new()).unwrap();
//! let result = solver.compute_page_rank();
//! assert!((result.scores[0] - 0.5).abs() < 1e-9);
//! ```

pub mod cli;
pub mod errors;
pub mod graph;
pub mod output;
pub mod pagerank;
pub mod types;

pub use errors::{ConfigError, PageRankError, ParseError, Result};
pub use graph::csr::CsrGraph;
pub use graph::parser::parse_graph;
pub use pagerank::ranking::rank_order;
pub use pagerank::solver::PageRankSolver;
pub use pagerank::PageRankResult;
pub use types::{DanglingPolicy, PageRankConfig};

/// Parse `text` and solve it with the given damping factor and defaults
/// for everything else.
pub fn page_rank(text: &str, damping: f64) -> Result<PageRankResult> {
    let config = PageRankConfig::new().with_damping(damping);
    let mut solver = PageRankSolver::from_text(text, config)?;
    Ok(solver.compute_page_rank())
}
