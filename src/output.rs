//! Result formatting
//!
//! Plain-text output prints one score per line in the `%.10e` layout
//! (`1.0000000000e-01`) and the ranking as one index per line. The JSON
//! report bundles scores, ranking and convergence info in one document.

use std::io::{self, Write};

use serde::Serialize;

use crate::pagerank::PageRankResult;

/// Digits after the decimal point in score output
pub const SCORE_PRECISION: usize = 10;

/// Format `value` in scientific notation with a signed, two-digit exponent.
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let raw = format!("{value:.prec$e}", prec = SCORE_PRECISION);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => raw,
    }
}

/// Write one formatted score per line, in vertex order.
pub fn write_scores<W: Write>(out: &mut W, scores: &[f64]) -> io::Result<()> {
    for &score in scores {
        writeln!(out, "{}", format_scientific(score))?;
    }
    Ok(())
}

/// Write one vertex index per line, highest score first.
pub fn write_ranking<W: Write>(out: &mut W, ranking: &[u32]) -> io::Result<()> {
    for node in ranking {
        writeln!(out, "{node}")?;
    }
    Ok(())
}

/// Serializable summary of a run
#[derive(Debug, Clone, Serialize)]
pub struct RankReport<'a> {
    pub vertices: usize,
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
    pub scores: &'a [f64],
    pub ranking: Vec<u32>,
}

impl<'a> RankReport<'a> {
    pub fn new(result: &'a PageRankResult) -> Self {
        Self {
            vertices: result.scores.len(),
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
            scores: &result.scores,
            ranking: result.ranking(),
        }
    }
}

/// Write the JSON report followed by a newline.
pub fn write_json<W: Write>(out: &mut W, result: &PageRankResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &RankReport::new(result))?;
    writeln!(out)
}
