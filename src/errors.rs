//! Error types
//!
//! Parsing and configuration failures are reported separately so callers can
//! tell malformed input from a bad solver setup. [`PageRankError`] wraps both
//! for the top-level API.

use thiserror::Error;

/// A malformed adjacency-list row.
///
/// Line numbers are 1-based and count every line of the input, including
/// skipped blank ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input contains no adjacency rows")]
    Empty,

    #[error("line {line}: missing ':' between vertex id and neighbour list")]
    MissingColon { line: usize },

    #[error("line {line}: invalid vertex id {token:?}")]
    InvalidVertexId { line: usize, token: String },

    #[error("line {line}: invalid neighbour id {token:?}")]
    InvalidNeighbor { line: usize, token: String },

    #[error("line {line}: vertex {id} does not follow vertex {previous}; rows must be strictly ascending")]
    RowOutOfOrder { line: usize, id: u32, previous: u32 },

    #[error("line {line}: neighbour {neighbor} is outside the vertex range 0..{vertex_count}")]
    NeighborOutOfRange {
        line: usize,
        neighbor: u32,
        vertex_count: usize,
    },
}

/// An invalid [`PageRankConfig`](crate::types::PageRankConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("damping factor must be within [0, 1], got {0}")]
    DampingOutOfRange(f64),

    #[error("convergence tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),

    #[error("max_iterations must be at least 1")]
    ZeroIterations,
}

/// Top-level error returned by the public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageRankError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("graph has no vertices")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, PageRankError>;
