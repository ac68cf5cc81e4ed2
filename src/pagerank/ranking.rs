//! Descending-score ordering of vertices

use std::cmp::Ordering;

/// Return vertex indices sorted by descending score.
///
/// The sort is stable, so equal scores keep ascending index order. Ordering
/// uses [`f64::total_cmp`]; a positive NaN therefore ranks ahead of every
/// finite score instead of panicking.
pub fn rank_order(scores: &[f64]) -> Vec<u32> {
    let mut order: Vec<u32> = (0..scores.len() as u32).collect();
    order.sort_by(|&a, &b| descending(scores[a as usize], scores[b as usize]));
    order
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
