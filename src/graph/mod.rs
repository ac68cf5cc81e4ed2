//! Graph construction and representation
//!
//! This module turns adjacency-list text into CSR graphs and derives
//! the reverse graph the PageRank update reads from.

pub mod builder;
pub mod csr;
pub mod parser;
