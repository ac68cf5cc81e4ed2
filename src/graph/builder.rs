//! Adjacency overlay used while reading rows
//!
//! Every vertex id in `0..N` starts out with an empty out-list. Parsed rows
//! are then laid over those defaults, so a vertex without a row becomes a
//! sink rather than acquiring a fabricated edge.

use rustc_hash::FxHashMap;

/// A mutable graph builder keyed by vertex id
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Explicit rows: vertex id -> ordered out-neighbours
    rows: FxHashMap<u32, Vec<u32>>,
    /// Largest vertex id seen as a row source or target, if any
    max_id: Option<u32>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated row capacity
    pub fn with_capacity(row_capacity: usize) -> Self {
        Self {
            rows: FxHashMap::with_capacity_and_hasher(row_capacity, Default::default()),
            max_id: None,
        }
    }

    /// Set the out-neighbours of `vertex`, replacing any previous row
    pub fn set_row(&mut self, vertex: u32, neighbors: Vec<u32>) {
        let row_max = neighbors.iter().copied().fold(vertex, u32::max);
        self.bump(row_max);
        self.rows.insert(vertex, neighbors);
    }

    /// Append a single edge, creating the source row if needed
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.bump(from.max(to));
        self.rows.entry(from).or_default().push(to);
    }

    fn bump(&mut self, id: u32) {
        self.max_id = Some(self.max_id.map_or(id, |m| m.max(id)));
    }

    /// Number of vertices implied by the ids seen so far (`max_id + 1`)
    pub fn node_count(&self) -> usize {
        self.max_id.map_or(0, |m| m as usize + 1)
    }

    /// Number of edges across all rows, duplicates included
    pub fn edge_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Out-neighbours of `vertex`; empty for vertices with no row
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        self.rows.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if the builder has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rows_default_to_empty() {
        let mut builder = GraphBuilder::new();
        builder.set_row(0, vec![2]);
        builder.set_row(2, vec![0, 1]);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.neighbors(1), &[] as &[u32]);
        assert_eq!(builder.neighbors(2), &[0, 1]);
        assert_eq!(builder.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_preserves_order_and_duplicates() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(1, 0);
        builder.add_edge(1, 0);
        builder.add_edge(1, 1);

        assert_eq!(builder.neighbors(1), &[0, 0, 1]);
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_targets_extend_vertex_count() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 4);

        assert_eq!(builder.node_count(), 5);
        assert!(builder.neighbors(4).is_empty());
    }

    #[test]
    fn test_empty_builder() {
        let builder = GraphBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.node_count(), 0);
    }
}
