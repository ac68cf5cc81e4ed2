//! Core configuration types

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Convergence tolerance used when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// How score held by vertices with no outgoing edges is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Sinks forward nothing. Total mass shrinks whenever sinks exist.
    #[default]
    Ignore,
    /// A sink's mass is spread uniformly over all vertices each iteration.
    Redistribute,
}

impl std::str::FromStr for DanglingPolicy {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "ignore" | "leak" => Ok(DanglingPolicy::Ignore),
            "redistribute" | "uniform" => Ok(DanglingPolicy::Redistribute),
            other => Err(format!("unknown dangling policy: {other}")),
        }
    }
}

/// Solver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (alpha), probability of following an outgoing link
    pub damping: f64,
    /// Per-vertex absolute change below which the vector is considered stable
    pub tolerance: f64,
    /// Iteration cap; `None` runs until convergence
    pub max_iterations: Option<usize>,
    /// Treatment of sink vertices
    pub dangling: DanglingPolicy,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: None,
            dangling: DanglingPolicy::Ignore,
        }
    }
}

impl PageRankConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Cap the number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the dangling-node policy
    pub fn with_dangling(mut self, dangling: DanglingPolicy) -> Self {
        self.dangling = dangling;
        self
    }

    /// Check that the settings describe a solvable problem.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
