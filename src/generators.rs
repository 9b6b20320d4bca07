//! Builders for the standard small graphs used by tests and demos.
//!
//! Every builder fails only when `vertex_count` is outside the supported
//! range.  Directed variants orient edges from lower to higher index,
//! except for the closing edge of a cycle and for complete graphs, which
//! get both directions.

use crate::{Directedness, Graph, GraphError};

/// Every pair of distinct vertices is joined.
pub fn complete_graph(vertex_count: usize, directedness: Directedness) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(vertex_count, directedness)?;
    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_edge(u, v)?;
            }
        }
    }
    Ok(graph)
}

/// `0 - 1 - ... - (n-1) - 0`.  With fewer than two vertices there is no
/// edge to add.
pub fn cycle_graph(vertex_count: usize, directedness: Directedness) -> Result<Graph, GraphError> {
    let edges = (0..vertex_count)
        .map(|u| (u, (u + 1) % vertex_count))
        .filter(|&(u, v)| u != v);
    Graph::from_edges(vertex_count, directedness, edges)
}

/// `0 - 1 - ... - (n-1)`.
pub fn path_graph(vertex_count: usize, directedness: Directedness) -> Result<Graph, GraphError> {
    Graph::from_edges(
        vertex_count,
        directedness,
        (1..vertex_count).map(|v| (v - 1, v)),
    )
}

/// Vertex 0 joined to every other vertex.
pub fn star_graph(vertex_count: usize, directedness: Directedness) -> Result<Graph, GraphError> {
    Graph::from_edges(vertex_count, directedness, (1..vertex_count).map(|v| (0, v)))
}
