//! PageRank algorithms
//!
//! This module provides the damped power-iteration solver and the
//! descending-score ranking built on its output.

pub mod ranking;
pub mod solver;

use serde::Serialize;

/// Result of a PageRank computation
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-node absolute change in the final iteration
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node indices ordered by descending score, ties in index order
    pub fn ranking(&self) -> Vec<u32> {
        ranking::rank_order(&self.scores)
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut order = self.ranking();
        order.truncate(n);
        order
            .into_iter()
            .map(|node| (node, self.scores[node as usize]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}
