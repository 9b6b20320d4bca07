//! Component counting and the bridge test used by Fleury's algorithm.
//!
//! Both functions take a bare [`AdjacencyMatrix`] rather than a graph so
//! they can run on the partially consumed working copies of the tour
//! builders.  Connectivity is always undirected here: an entry in either
//! direction joins two vertices.

use pathfinding::prelude::connected_components;

use crate::{AdjacencyMatrix, Directedness};

/// Counts the connected components of the vertices that have at least one
/// incident edge.  Isolated vertices do not form components of their own.
pub fn count_components(matrix: &AdjacencyMatrix) -> usize {
    let starts: Vec<usize> = (0..matrix.size())
        .filter(|&v| matrix.has_incident_edge(v))
        .collect();
    if starts.is_empty() {
        return 0;
    }
    connected_components(&starts, |&v| {
        matrix.undirected_neighbors(v).collect::<Vec<_>>()
    })
    .len()
}

/// Returns true if consuming one copy of the edge from `u` to `v` would
/// increase [`count_components`].  Returns false when no such edge remains.
///
/// Each call copies the matrix and counts components twice, so it costs
/// O(V + E).
pub fn is_bridge(matrix: &AdjacencyMatrix, u: usize, v: usize, directedness: Directedness) -> bool {
    if !matrix.has_edge(u, v) {
        return false;
    }
    let before = count_components(matrix);
    let mut without = matrix.clone();
    without.remove_edge(u, v, directedness);
    count_components(&without) > before
}
