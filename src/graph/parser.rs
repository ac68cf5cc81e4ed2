//! Adjacency-list text parser
//!
//! Input is one row per line in the form `<vertex>:<n1>,<n2>,...`. Rows must
//! be sorted by strictly ascending vertex id, and the id on the last row
//! fixes the vertex count. Vertices between rows that have no line of their
//! own become sinks.
//!
//! ```text
//! 0:1,2
//! 1:2
//! 2:0
//! ```

use tracing::debug;

use super::builder::GraphBuilder;
use super::csr::CsrGraph;
use crate::errors::ParseError;

/// Parse `text` into a forward graph.
///
/// Blank lines are skipped and `\r\n` endings are accepted. No partial graph
/// is ever returned: the first malformed row aborts parsing.
pub fn parse_graph(text: &str) -> Result<CsrGraph, ParseError> {
    let mut rows = Vec::new();
    let mut previous: Option<u32> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let (id, neighbors) = parse_row(raw, line)?;
        if let Some(prev) = previous {
            if id <= prev {
                return Err(ParseError::RowOutOfOrder {
                    line,
                    id,
                    previous: prev,
                });
            }
        }
        previous = Some(id);
        rows.push((line, id, neighbors));
    }

    let last = previous.ok_or(ParseError::Empty)?;
    let vertex_count = last as usize + 1;

    let mut builder = GraphBuilder::with_capacity(rows.len());
    for (line, id, neighbors) in rows {
        if let Some(&neighbor) = neighbors.iter().find(|&&n| n as usize >= vertex_count) {
            return Err(ParseError::NeighborOutOfRange {
                line,
                neighbor,
                vertex_count,
            });
        }
        builder.set_row(id, neighbors);
    }

    let graph = CsrGraph::from_builder(&builder);
    debug!(
        vertices = graph.num_nodes,
        edges = graph.num_edges(),
        "parsed adjacency list"
    );
    Ok(graph)
}

fn parse_row(raw: &str, line: usize) -> Result<(u32, Vec<u32>), ParseError> {
    let (id_part, list_part) = raw
        .split_once(':')
        .ok_or(ParseError::MissingColon { line })?;

    let id_token = id_part.trim();
    let id = id_token
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidVertexId {
            line,
            token: id_token.to_string(),
        })?;

    let list = list_part.trim();
    if list.is_empty() {
        return Ok((id, Vec::new()));
    }

    let neighbors = list
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidNeighbor {
                    line,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((id, neighbors))
}
