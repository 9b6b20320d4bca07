//! The canonical graph model shared by every analysis in this crate.
//!
//! A [`Graph`] is a vertex count, a [`Directedness`] flag and a 0/1
//! adjacency matrix.  Undirected graphs keep the matrix symmetric, storing
//! each edge as two mirrored entries.  No algorithm mutates a `Graph`; tour
//! builders work on a [`Graph::working_copy`] instead.

use std::ops::Range;

use crate::{AdjacencyMatrix, Directedness, GraphError, MAX_VERTICES};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Graph {
    directedness: Directedness,
    adjacency: AdjacencyMatrix,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize, directedness: Directedness) -> Result<Self, GraphError> {
        check_vertex_count(vertex_count)?;
        Ok(Self {
            directedness,
            adjacency: AdjacencyMatrix::with_size(vertex_count),
        })
    }

    /// Creates a graph from the rows of its adjacency matrix.
    ///
    /// The rows must form a square matrix of 0/1 entries with an all-zero
    /// diagonal, and must be symmetric when the graph is undirected.
    pub fn from_matrix<R>(
        directedness: Directedness,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, GraphError>
    where
        R: AsRef<[u32]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let vertex_count = rows.len();
        check_vertex_count(vertex_count)?;
        for (row, entries) in rows.iter().enumerate() {
            let found = entries.as_ref().len();
            if found != vertex_count {
                return Err(GraphError::RaggedMatrix {
                    row,
                    expected: vertex_count,
                    found,
                });
            }
        }
        let adjacency = AdjacencyMatrix::from_rows(rows).ok_or(GraphError::RaggedMatrix {
            row: 0,
            expected: vertex_count,
            found: 0,
        })?;
        for row in 0..vertex_count {
            for col in 0..vertex_count {
                let value = adjacency.get(row, col);
                if value > 1 {
                    return Err(GraphError::InvalidEntry { row, col, value });
                }
                if row == col && value != 0 {
                    return Err(GraphError::SelfLoop(row));
                }
                if !directedness.is_directed() && value != adjacency.get(col, row) {
                    return Err(GraphError::AsymmetricMatrix { row, col });
                }
            }
        }
        Ok(Self {
            directedness,
            adjacency,
        })
    }

    /// Creates a graph from a list of edges.  Undirected edges are mirrored.
    pub fn from_edges(
        vertex_count: usize,
        directedness: Directedness,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count, directedness)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.size()
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// Returns the canonical adjacency matrix.
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Returns an owned copy of the adjacency matrix for algorithms that
    /// consume edges.
    pub fn working_copy(&self) -> AdjacencyMatrix {
        self.adjacency.clone()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.has_edge(u, v)
    }

    /// Returns the number of edges, counting a mirrored undirected pair once.
    pub fn edge_count(&self) -> usize {
        let total = self.adjacency.total() as usize;
        if self.is_directed() { total } else { total / 2 }
    }

    /// Adds the edge from `u` to `v` (and its mirror, if undirected).
    /// Returns true if the edge was not already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_valid_edge(u, v)?;
        let added = !self.adjacency.has_edge(u, v);
        self.adjacency.set(u, v, 1);
        if !self.is_directed() {
            self.adjacency.set(v, u, 1);
        }
        Ok(added)
    }

    /// Removes the edge from `u` to `v` (and its mirror, if undirected).
    /// Returns true if the edge was present.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_valid_edge(u, v)?;
        let removed = self.adjacency.has_edge(u, v);
        self.adjacency.set(u, v, 0);
        if !self.is_directed() {
            self.adjacency.set(v, u, 0);
        }
        Ok(removed)
    }

    /// Resets the graph to `vertex_count` vertices and no edges.
    pub fn resize(&mut self, vertex_count: usize) -> Result<(), GraphError> {
        check_vertex_count(vertex_count)?;
        self.adjacency = AdjacencyMatrix::with_size(vertex_count);
        Ok(())
    }

    pub fn check_valid_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_valid_edge(&self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_valid_vertex(u)?;
        self.check_valid_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        Ok(())
    }
}

fn check_vertex_count(vertex_count: usize) -> Result<(), GraphError> {
    if (1..=MAX_VERTICES).contains(&vertex_count) {
        Ok(())
    } else {
        Err(GraphError::VertexCountOutOfRange(vertex_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new(5, Directedness::Undirected).unwrap();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adjacency().is_empty());
    }

    #[test]
    fn test_vertex_count_bounds() {
        assert_eq!(
            Graph::new(0, Directedness::Directed),
            Err(GraphError::VertexCountOutOfRange(0))
        );
        assert_eq!(
            Graph::new(MAX_VERTICES + 1, Directedness::Directed),
            Err(GraphError::VertexCountOutOfRange(MAX_VERTICES + 1))
        );
        assert!(Graph::new(MAX_VERTICES, Directedness::Directed).is_ok());
    }

    #[test]
    fn test_undirected_edges_are_mirrored() {
        let mut graph = Graph::new(3, Directedness::Undirected).unwrap();
        assert_eq!(graph.add_edge(0, 2), Ok(true));
        assert!(graph.has_edge(2, 0));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.add_edge(2, 0), Ok(false));
        assert_eq!(graph.remove_edge(2, 0), Ok(true));
        assert!(!graph.has_edge(0, 2));
    }

    #[test]
    fn test_directed_edges_are_not_mirrored() {
        let graph = Graph::from_edges(3, Directedness::Directed, [(0, 1), (1, 0), (1, 2)]).unwrap();
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_rejects_bad_vertices() {
        let mut graph = Graph::new(3, Directedness::Directed).unwrap();
        assert_eq!(graph.add_edge(1, 1), Err(GraphError::SelfLoop(1)));
        assert_eq!(
            graph.add_edge(0, 3),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_from_matrix_validation() {
        assert_eq!(
            Graph::from_matrix(Directedness::Undirected, [[0, 1], [0, 0]]),
            Err(GraphError::AsymmetricMatrix { row: 0, col: 1 })
        );
        assert!(Graph::from_matrix(Directedness::Directed, [[0, 1], [0, 0]]).is_ok());
        assert_eq!(
            Graph::from_matrix(Directedness::Directed, [[1, 0], [0, 0]]),
            Err(GraphError::SelfLoop(0))
        );
        assert_eq!(
            Graph::from_matrix(Directedness::Directed, [[0, 2], [0, 0]]),
            Err(GraphError::InvalidEntry {
                row: 0,
                col: 1,
                value: 2
            })
        );
        assert_eq!(
            Graph::from_matrix(Directedness::Directed, vec![vec![0, 1], vec![0]]),
            Err(GraphError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_working_copy_is_independent() {
        let graph = Graph::from_edges(2, Directedness::Undirected, [(0, 1)]).unwrap();
        let mut copy = graph.working_copy();
        copy.remove_edge(0, 1, graph.directedness());
        assert!(copy.is_empty());
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn test_resize_clears_edges() {
        let mut graph = Graph::from_edges(3, Directedness::Undirected, [(0, 1), (1, 2)]).unwrap();
        graph.resize(4).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.resize(13).is_err());
        assert_eq!(graph.vertex_count(), 4);
    }
}
