//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR keeps every adjacency list in one contiguous buffer, which is what the
//! power iteration walks on every pass. The same type stores both the
//! forward graph and its transpose.

use super::builder::GraphBuilder;

/// A directed, unweighted graph in Compressed Sparse Row format
///
/// Neighbour order is preserved exactly as inserted, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Out-degree for each node
    pub out_degree: Vec<u32>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format, one row per id in `0..N`
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(builder.edge_count());
        let mut out_degree = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes as u32 {
            let edges = builder.neighbors(node);
            out_degree.push(edges.len() as u32);
            col_idx.extend_from_slice(edges);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            out_degree,
        }
    }

    /// Build directly from per-node adjacency lists
    ///
    /// Every target must be smaller than `adjacency.len()`.
    pub fn from_adjacency(adjacency: &[Vec<u32>]) -> Self {
        let mut builder = GraphBuilder::with_capacity(adjacency.len());
        for (node, edges) in adjacency.iter().enumerate() {
            builder.set_row(node as u32, edges.clone());
        }
        Self::from_builder(&builder)
    }

    /// Produce the transpose: an edge `u -> v` here becomes `v -> u`.
    ///
    /// Runs in O(V + E) with a counting pass. Each in-list comes out in
    /// ascending source order, repeated once per parallel edge.
    pub fn transpose(&self) -> Self {
        let n = self.num_nodes;
        let mut in_degree = vec![0u32; n];
        for &target in &self.col_idx {
            in_degree[target as usize] += 1;
        }

        let mut row_ptr = Vec::with_capacity(n + 1);
        row_ptr.push(0);
        for &deg in &in_degree {
            let last = row_ptr[row_ptr.len() - 1];
            row_ptr.push(last + deg as usize);
        }

        let mut cursor = row_ptr[..n].to_vec();
        let mut col_idx = vec![0u32; self.col_idx.len()];
        for source in 0..n as u32 {
            for target in self.neighbors(source) {
                let slot = &mut cursor[target as usize];
                col_idx[*slot] = source;
                *slot += 1;
            }
        }

        Self {
            num_nodes: n,
            row_ptr,
            col_idx,
            out_degree: in_degree,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.neighbor_slice(node).iter().copied()
    }

    /// Neighbors of a node as a slice
    pub fn neighbor_slice(&self, node: u32) -> &[u32] {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        &self.col_idx[start..end]
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }

    /// Copy out the adjacency lists, one `Vec` per node
    pub fn to_adjacency(&self) -> Vec<Vec<u32>> {
        (0..self.num_nodes as u32)
            .map(|n| self.neighbor_slice(n).to_vec())
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
        }
    }
}
