use crate::Graph;

/// In- and out-degree of a vertex of a directed graph.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct InOutDegree {
    pub in_degree: usize,
    pub out_degree: usize,
}

impl InOutDegree {
    /// Returns `out_degree - in_degree`.
    pub fn balance(&self) -> isize {
        self.out_degree as isize - self.in_degree as isize
    }

    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }
}

/// Returns the number of neighbors of `vertex` in an undirected graph.
pub fn degree(graph: &Graph, vertex: usize) -> usize {
    graph.adjacency().successors(vertex).count()
}

/// Returns the in- and out-degree of `vertex` in a directed graph.
pub fn in_out_degree(graph: &Graph, vertex: usize) -> InOutDegree {
    let adjacency = graph.adjacency();
    InOutDegree {
        in_degree: adjacency.predecessors(vertex).count(),
        out_degree: adjacency.successors(vertex).count(),
    }
}

pub fn degrees(graph: &Graph) -> Vec<usize> {
    graph.vertices().map(|v| degree(graph, v)).collect()
}

pub fn in_out_degrees(graph: &Graph) -> Vec<InOutDegree> {
    graph.vertices().map(|v| in_out_degree(graph, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Directedness;

    #[test]
    fn test_undirected_degrees() {
        let graph =
            Graph::from_edges(4, Directedness::Undirected, [(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(degrees(&graph), vec![3, 1, 1, 1]);
    }

    #[test]
    fn test_directed_degrees() {
        let graph =
            Graph::from_edges(3, Directedness::Directed, [(0, 1), (0, 2), (2, 1)]).unwrap();
        assert_eq!(
            in_out_degrees(&graph),
            vec![
                InOutDegree {
                    in_degree: 0,
                    out_degree: 2
                },
                InOutDegree {
                    in_degree: 2,
                    out_degree: 0
                },
                InOutDegree {
                    in_degree: 1,
                    out_degree: 1
                },
            ]
        );
        assert_eq!(in_out_degree(&graph, 0).balance(), 2);
        assert_eq!(in_out_degree(&graph, 1).balance(), -2);
        assert!(in_out_degree(&graph, 2).is_balanced());
    }
}
