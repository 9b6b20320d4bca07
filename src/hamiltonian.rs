//! Backtracking search for Hamiltonian cycles and paths.
//!
//! The search places vertices one position at a time, trying candidates in
//! ascending index order, and stops at the first complete arrangement.  Its
//! worst case is factorial in the vertex count, which stays tractable only
//! because graphs have at most [`MAX_VERTICES`](crate::MAX_VERTICES)
//! vertices.

use bitvec::vec::BitVec;

use crate::{Graph, tracing_support::info_span};

/// Which kind of Hamiltonian walk to look for.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum HamiltonianKind {
    /// Visits every vertex once and returns to the start.
    Cycle,
    /// Visits every vertex once.
    Path,
}

impl HamiltonianKind {
    /// Smallest vertex count for which this kind of walk can exist.
    pub fn min_vertices(&self) -> usize {
        match self {
            HamiltonianKind::Cycle => 3,
            HamiltonianKind::Path => 2,
        }
    }
}

struct HamiltonianSearch<'g> {
    graph: &'g Graph,
    kind: HamiltonianKind,
    path: Vec<usize>,
    visited: BitVec,
}

impl<'g> HamiltonianSearch<'g> {
    fn new(graph: &'g Graph, kind: HamiltonianKind) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            kind,
            path: Vec::with_capacity(n + 1),
            visited: BitVec::repeat(false, n),
        }
    }

    /// Runs the search, leaving the accepted arrangement in `self.path`.
    fn run(&mut self) -> bool {
        self.graph.vertex_count() >= self.kind.min_vertices() && self.extend()
    }

    fn is_complete(&self) -> bool {
        match self.kind {
            HamiltonianKind::Cycle => {
                let (first, last) = (self.path[0], self.path[self.path.len() - 1]);
                self.graph.has_edge(last, first)
            }
            HamiltonianKind::Path => true,
        }
    }

    fn extend(&mut self) -> bool {
        if self.path.len() == self.graph.vertex_count() {
            return self.is_complete();
        }
        for v in self.graph.vertices() {
            if self.visited[v] {
                continue;
            }
            if let Some(&last) = self.path.last() {
                if !self.graph.has_edge(last, v) {
                    continue;
                }
            }
            self.path.push(v);
            self.visited.set(v, true);
            if self.extend() {
                return true;
            }
            self.visited.set(v, false);
            self.path.pop();
        }
        false
    }

    fn into_sequence(mut self) -> Vec<usize> {
        if self.kind == HamiltonianKind::Cycle {
            self.path.push(self.path[0]);
        }
        self.path
    }
}

/// Finds the first Hamiltonian walk of the given kind in search order.
///
/// A cycle is returned closed, with its start vertex repeated at the end, so
/// it has `vertex_count + 1` entries; a path has `vertex_count` entries.
pub fn find_hamiltonian(graph: &Graph, kind: HamiltonianKind) -> Option<Vec<usize>> {
    let _span = info_span!("hamiltonian_search", kind = ?kind, vertices = graph.vertex_count())
        .entered();
    let mut search = HamiltonianSearch::new(graph, kind);
    search.run().then(|| search.into_sequence())
}

pub fn find_hamiltonian_cycle(graph: &Graph) -> Option<Vec<usize>> {
    find_hamiltonian(graph, HamiltonianKind::Cycle)
}

pub fn find_hamiltonian_path(graph: &Graph) -> Option<Vec<usize>> {
    find_hamiltonian(graph, HamiltonianKind::Path)
}

/// Returns true if the graph has a Hamiltonian cycle.  Always false for
/// fewer than three vertices.
pub fn has_hamiltonian_cycle(graph: &Graph) -> bool {
    let _span = info_span!("has_hamiltonian_cycle").entered();
    HamiltonianSearch::new(graph, HamiltonianKind::Cycle).run()
}

/// Returns true if the graph has a Hamiltonian path.  Always false for fewer
/// than two vertices.
pub fn has_hamiltonian_path(graph: &Graph) -> bool {
    let _span = info_span!("has_hamiltonian_path").entered();
    HamiltonianSearch::new(graph, HamiltonianKind::Path).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Directedness,
        generators::{complete_graph, cycle_graph, path_graph, star_graph},
    };

    #[test]
    fn test_small_graphs_have_no_hamiltonian_walks() {
        let single = Graph::new(1, Directedness::Undirected).unwrap();
        assert!(!has_hamiltonian_path(&single));
        assert!(!has_hamiltonian_cycle(&single));

        let pair = Graph::from_edges(2, Directedness::Undirected, [(0, 1)]).unwrap();
        assert!(!has_hamiltonian_cycle(&pair));
        assert_eq!(find_hamiltonian_path(&pair), Some(vec![0, 1]));
    }

    #[test]
    fn test_complete_graph_cycle() {
        let graph = complete_graph(4, Directedness::Undirected).unwrap();
        assert!(has_hamiltonian_cycle(&graph));
        assert_eq!(find_hamiltonian_cycle(&graph), Some(vec![0, 1, 2, 3, 0]));
    }

    #[test]
    fn test_star_has_neither() {
        let graph = star_graph(4, Directedness::Undirected).unwrap();
        assert!(!has_hamiltonian_cycle(&graph));
        assert!(!has_hamiltonian_path(&graph));
        assert_eq!(find_hamiltonian_path(&graph), None);
    }

    #[test]
    fn test_path_graph_has_path_but_no_cycle() {
        let graph = path_graph(5, Directedness::Undirected).unwrap();
        assert!(!has_hamiltonian_cycle(&graph));
        assert_eq!(find_hamiltonian_path(&graph), Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_search_backtracks_past_dead_ends() {
        // 0-1, 0-2, 1-3, 2-3, 3-4: the only path must start at 1 or 2 and
        // end at 4, e.g. 1-0-2-3-4.
        let graph = Graph::from_edges(
            5,
            Directedness::Undirected,
            [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)],
        )
        .unwrap();
        assert_eq!(find_hamiltonian_path(&graph), Some(vec![1, 0, 2, 3, 4]));
        assert!(!has_hamiltonian_cycle(&graph));
    }

    #[test]
    fn test_directed_cycle_respects_orientation() {
        let forward = cycle_graph(4, Directedness::Directed).unwrap();
        assert_eq!(find_hamiltonian_cycle(&forward), Some(vec![0, 1, 2, 3, 0]));

        let mut broken = forward.clone();
        broken.remove_edge(3, 0).unwrap();
        broken.add_edge(0, 3).unwrap();
        assert!(!has_hamiltonian_cycle(&broken));
        assert_eq!(find_hamiltonian_path(&broken), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_find_hamiltonian_dispatch() {
        let graph = complete_graph(3, Directedness::Undirected).unwrap();
        assert_eq!(
            find_hamiltonian(&graph, HamiltonianKind::Cycle),
            Some(vec![0, 1, 2, 0])
        );
        assert_eq!(
            find_hamiltonian(&graph, HamiltonianKind::Path),
            Some(vec![0, 1, 2])
        );
    }

    #[test]
    #[cfg(feature = "slow_tests")]
    fn test_largest_graph_without_cycle() {
        use crate::tracing_support::{dump_method_timings, reset_method_timings};

        reset_method_timings();
        // A complete graph on 11 vertices plus a pendant vertex has a
        // Hamiltonian path but no cycle, so the cycle search is exhaustive.
        let mut graph = complete_graph(12, Directedness::Undirected).unwrap();
        for v in 0..10 {
            graph.remove_edge(v, 11).unwrap();
        }
        assert!(has_hamiltonian_path(&graph));
        assert!(!has_hamiltonian_cycle(&graph));
        dump_method_timings();
    }
}
