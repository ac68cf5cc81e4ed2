//! Damped power-iteration solver
//!
//! Each iteration computes, for every vertex `i`,
//!
//! ```text
//! new[i] = (1 - alpha) / N + alpha * sum(old[j] / out_degree(j) for j in in(i))
//! ```
//!
//! reading only from the previous vector and writing into a second buffer.
//! Iteration stops once every per-vertex change is below the tolerance.
//! Scores are not renormalized; with [`DanglingPolicy::Ignore`] mass held by
//! sinks simply leaves the system.

use rayon::prelude::*;
use tracing::{info, trace, warn};

use super::PageRankResult;
use crate::errors::{PageRankError, Result};
use crate::graph::csr::CsrGraph;
use crate::graph::parser::parse_graph;
use crate::types::{DanglingPolicy, PageRankConfig};

/// Vertex count at which the per-iteration update switches to rayon
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Owns both adjacency structures and the evolving score vector.
#[derive(Debug, Clone)]
pub struct PageRankSolver {
    out_graph: CsrGraph,
    in_graph: CsrGraph,
    config: PageRankConfig,
    scores: Vec<f64>,
    next: Vec<f64>,
    dangling_nodes: Vec<u32>,
}

impl PageRankSolver {
    /// Take ownership of a forward graph and prepare to solve it.
    ///
    /// Fails if the config is invalid or the graph has no vertices.
    pub fn new(out_graph: CsrGraph, config: PageRankConfig) -> Result<Self> {
        config.validate()?;
        let n = out_graph.num_nodes;
        if n == 0 {
            return Err(PageRankError::EmptyGraph);
        }

        let in_graph = out_graph.transpose();
        let dangling_nodes = out_graph.dangling_nodes();

        Ok(Self {
            out_graph,
            in_graph,
            config,
            scores: vec![1.0 / n as f64; n],
            next: vec![0.0; n],
            dangling_nodes,
        })
    }

    /// Parse adjacency-list text and build a solver over it
    pub fn from_text(text: &str, config: PageRankConfig) -> Result<Self> {
        let graph = parse_graph(text)?;
        Self::new(graph, config)
    }

    /// Iterate until convergence (or the configured cap) and return the scores.
    ///
    /// Calling this again resumes from the current vector, so a converged
    /// solver stays at its fixed point.
    pub fn compute_page_rank(&mut self) -> PageRankResult {
        let n = self.out_graph.num_nodes;
        let damping = self.config.damping;
        let tolerance = self.config.tolerance;
        let teleport = (1.0 - damping) / n as f64;

        let mut iterations = 0;
        let mut delta;

        loop {
            iterations += 1;

            let dangling_share = match self.config.dangling {
                DanglingPolicy::Ignore => 0.0,
                DanglingPolicy::Redistribute => {
                    let mass: f64 = self
                        .dangling_nodes
                        .iter()
                        .map(|&d| self.scores[d as usize])
                        .sum();
                    damping * mass / n as f64
                }
            };
            let base = teleport + dangling_share;

            let old = &self.scores;
            let in_graph = &self.in_graph;
            let out_graph = &self.out_graph;
            let update = |(node, slot): (usize, &mut f64)| {
                *slot = base + damping * inbound(in_graph, out_graph, old, node as u32);
            };
            if n >= PARALLEL_THRESHOLD {
                self.next.par_iter_mut().enumerate().for_each(update);
            } else {
                self.next.iter_mut().enumerate().for_each(update);
            }

            delta = max_abs_change(&self.scores, &self.next);
            std::mem::swap(&mut self.scores, &mut self.next);
            trace!(iteration = iterations, delta, "pagerank iteration");

            if delta < tolerance {
                break;
            }
            if self.config.max_iterations.is_some_and(|cap| iterations >= cap) {
                warn!(
                    iterations,
                    delta, tolerance, "iteration cap reached before convergence"
                );
                break;
            }
        }

        let converged = delta < tolerance;
        if converged {
            info!(vertices = n, iterations, delta, "pagerank converged");
        }
        PageRankResult::new(self.scores.clone(), iterations, delta, converged)
    }

    /// Current score vector
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Forward (out-edge) graph
    pub fn out_graph(&self) -> &CsrGraph {
        &self.out_graph
    }

    /// Reverse (in-edge) graph
    pub fn in_graph(&self) -> &CsrGraph {
        &self.in_graph
    }

    /// Settings the solver was built with
    pub fn config(&self) -> &PageRankConfig {
        &self.config
    }

    /// Number of vertices
    pub fn num_nodes(&self) -> usize {
        self.out_graph.num_nodes
    }
}

/// Sum of `old[j] / out_degree(j)` over the in-neighbours of `node`.
///
/// Every in-neighbour has at least one out-edge (the one pointing here), so
/// the divisor is never zero.
fn inbound(in_graph: &CsrGraph, out_graph: &CsrGraph, old: &[f64], node: u32) -> f64 {
    in_graph
        .neighbors(node)
        .map(|j| old[j as usize] / out_graph.degree(j) as f64)
        .sum()
}

fn max_abs_change(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(text: &str, config: PageRankConfig) -> PageRankResult {
        PageRankSolver::from_text(text, config).unwrap().compute_page_rank()
    }

    fn complete_graph_text(n: u32) -> String {
        (0..n)
            .map(|i| {
                let targets: Vec<String> =
                    (0..n).filter(|&j| j != i).map(|j| j.to_string()).collect();
                format!("{i}:{}\n", targets.join(","))
            })
            .collect()
    }

    #[test]
    fn test_mutual_pair_is_uniform() {
        let result = solve("0:1\n1:0\n", PageRankConfig::new().with_damping(0.85));

        assert!(result.converged);
        assert!((result.scores[0] - 0.5).abs() < 1e-9);
        assert!((result.scores[1] - 0.5).abs() < 1e-9);
        assert_eq!(result.ranking(), vec![0, 1]);
    }

    #[test]
    fn test_sink_receives_more_than_source() {
        let result = solve("0:\n1:0\n", PageRankConfig::new().with_damping(0.85));

        assert!(result.converged);
        // s1 = 0.15 / 2, s0 = s1 + 0.85 * s1
        assert!((result.scores[1] - 0.075).abs() < 1e-9);
        assert!((result.scores[0] - 0.13875).abs() < 1e-9);
        assert!(result.scores[0] > result.scores[1]);
        assert_eq!(result.ranking(), vec![0, 1]);
    }

    #[test]
    fn test_ignore_policy_leaks_mass() {
        let result = solve("0:\n1:0\n", PageRankConfig::new());
        assert!(result.total_mass() < 1.0);
    }

    #[test]
    fn test_redistribute_policy_conserves_mass() {
        let cfg = PageRankConfig::new().with_dangling(DanglingPolicy::Redistribute);
        let result = solve("0:\n1:0\n", cfg);

        assert!(result.converged);
        assert!((result.total_mass() - 1.0).abs() < 1e-9);
        assert!(result.scores[0] > result.scores[1]);
    }

    #[test]
    fn test_zero_damping_gives_exact_uniform() {
        let result = solve("0:1,2\n1:2\n2:\n", PageRankConfig::new().with_damping(0.0));

        assert!(result.converged);
        for &score in &result.scores {
            assert_eq!(score, 1.0 / 3.0);
        }
    }

    #[test]
    fn test_complete_graph_equal_scores() {
        let text = complete_graph_text(5);
        for damping in [0.1, 0.5, 0.85, 0.99] {
            let result = solve(&text, PageRankConfig::new().with_damping(damping));
            assert!(result.converged);
            for &score in &result.scores {
                assert!((score - result.scores[0]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_hub_ranks_first() {
        // Spokes all point at the hub, hub points back at spoke 1.
        let result = solve("0:1\n1:0\n2:0\n3:0\n", PageRankConfig::new());

        assert_eq!(result.ranking()[0], 0);
        assert_eq!(result.top_n(1)[0].0, 0);
    }

    #[test]
    fn test_rerun_is_stable() {
        let mut solver =
            PageRankSolver::from_text("0:1,2\n1:2\n2:0\n3:0,2\n", PageRankConfig::new()).unwrap();
        let first = solver.compute_page_rank();
        let second = solver.compute_page_rank();

        assert!(second.converged);
        for (a, b) in first.scores.iter().zip(&second.scores) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_iteration_cap_returns_partial() {
        let cfg = PageRankConfig::new().with_max_iterations(1);
        let result = solve("0:\n1:0\n", cfg);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 2);
    }

    #[test]
    fn test_convergence_respects_tolerance() {
        let cfg = PageRankConfig::new().with_tolerance(1e-4);
        let loose = solve("0:1,2\n1:2\n2:0\n", cfg);
        let tight = solve("0:1,2\n1:2\n2:0\n", PageRankConfig::new());

        assert!(loose.delta < 1e-4);
        assert!(tight.delta < 1e-10);
        assert!(loose.iterations <= tight.iterations);
    }

    #[test]
    fn test_parallel_path_matches_sequential_semantics() {
        let n = PARALLEL_THRESHOLD as u32 + 10;
        // Ring with a chord from every vertex to 0.
        let text: String = (0..n)
            .map(|i| format!("{i}:{},0\n", (i + 1) % n))
            .collect();
        let result = solve(&text, PageRankConfig::new());

        assert!(result.converged);
        assert_eq!(result.ranking()[0], 0);
        assert!((result.total_mass() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_solver_owns_transpose() {
        let solver = PageRankSolver::from_text("0:1,2\n1:2\n2:\n", PageRankConfig::new()).unwrap();

        assert_eq!(solver.in_graph().to_adjacency(), vec![vec![], vec![0], vec![0, 1]]);
        assert_eq!(solver.num_nodes(), 3);
        assert_eq!(solver.scores(), &[1.0 / 3.0; 3]);
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = PageRankSolver::new(CsrGraph::default(), PageRankConfig::new()).unwrap_err();
        assert_eq!(err, PageRankError::EmptyGraph);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = PageRankSolver::from_text("0:0\n", PageRankConfig::new().with_damping(2.0))
            .unwrap_err();
        assert!(matches!(err, PageRankError::Config(_)));
    }
}
