//! Random graph generators and result checkers for property tests.

use bitvec::vec::BitVec;
use quickcheck::{Arbitrary, Gen};

use crate::{
    Directedness, Graph,
    generators::cycle_graph,
    hamiltonian::HamiltonianKind,
    tracing_support::{TimingScope, info_span, init_tracing, set_timing_scope},
};

/// Largest vertex count the generators produce.  Keeps the Hamiltonian
/// search cheap enough to run hundreds of times.
const MAX_ARB_VERTICES: usize = 8;

fn below(g: &mut Gen, bound: usize) -> usize {
    usize::arbitrary(g) % bound
}

/// A random graph with at most eight vertices.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = 1 + below(g, MAX_ARB_VERTICES);
        let num_edges = below(g, 2 * vertex_count + 1);
        let mut graph = Graph::new(vertex_count, Directedness::arbitrary(g))
            .expect("vertex count is in range");
        for _ in 0..num_edges {
            let u = below(g, vertex_count);
            let v = below(g, vertex_count);
            if u != v {
                graph.add_edge(u, v).expect("edge ends are valid");
            }
        }
        ArbGraph { graph }
    }
}

/// A connected Eulerian graph: a cycle through every vertex plus a few
/// extra cycles that share no edge with each other or with the base cycle.
#[derive(Debug, Clone)]
pub struct ArbEulerianGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbEulerianGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let directedness = Directedness::arbitrary(g);
        let min_cycle = if directedness.is_directed() { 2 } else { 3 };
        let vertex_count = min_cycle + below(g, MAX_ARB_VERTICES - min_cycle + 1);
        let mut graph = cycle_graph(vertex_count, directedness).expect("vertex count is in range");

        for _ in 0..below(g, 4) {
            let len = min_cycle + below(g, vertex_count - min_cycle + 1);
            let mut order: Vec<usize> = (0..vertex_count).collect();
            for i in (1..order.len()).rev() {
                order.swap(i, below(g, i + 1));
            }
            let edges: Vec<(usize, usize)> = (0..len)
                .map(|i| (order[i], order[(i + 1) % len]))
                .collect();
            if edges.iter().all(|&(u, v)| !graph.has_edge(u, v)) {
                for (u, v) in edges {
                    graph.add_edge(u, v).expect("edge ends are valid");
                }
            }
        }
        ArbEulerianGraph { graph }
    }
}

/// A connected semi-Eulerian graph: an [`ArbEulerianGraph`] with one edge
/// removed.
#[derive(Debug, Clone)]
pub struct ArbSemiEulerianGraph {
    pub graph: Graph,
    /// The removed edge.  A trail has to run between its ends, from its
    /// target to its source when the graph is directed.
    pub removed: (usize, usize),
}

impl Arbitrary for ArbSemiEulerianGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let ArbEulerianGraph { mut graph } = ArbEulerianGraph::arbitrary(g);
        let (u, v, _) = graph
            .adjacency()
            .iter()
            .next()
            .expect("an Eulerian graph built on a cycle has edges");
        graph.remove_edge(u, v).expect("edge ends are valid");
        ArbSemiEulerianGraph {
            graph,
            removed: (u, v),
        }
    }
}

/// Checks that `walk` is a walk in `graph` that never uses an edge twice,
/// and returns the number of edges it uses.
pub fn check_walk(graph: &Graph, walk: &[usize]) -> usize {
    let _scope = set_timing_scope(TimingScope::Verification);
    init_tracing();
    let _span = info_span!("check_walk", len = walk.len()).entered();

    let mut remaining = graph.working_copy();
    for pair in walk.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        assert!(
            remaining.remove_edge(u, v, graph.directedness()),
            "walk {walk:?} uses {u} -> {v}, which is not an unused edge"
        );
    }
    walk.len().saturating_sub(1)
}

/// Checks that `sequence` is a Hamiltonian cycle or path of `graph`.
pub fn check_hamiltonian(graph: &Graph, sequence: &[usize], kind: HamiltonianKind) {
    let _scope = set_timing_scope(TimingScope::Verification);
    init_tracing();
    let _span = info_span!("check_hamiltonian").entered();

    let n = graph.vertex_count();
    let vertices = match kind {
        HamiltonianKind::Cycle => {
            assert_eq!(sequence.len(), n + 1, "cycle {sequence:?} has the wrong length");
            assert_eq!(sequence.first(), sequence.last(), "cycle {sequence:?} is not closed");
            &sequence[..n]
        }
        HamiltonianKind::Path => {
            assert_eq!(sequence.len(), n, "path {sequence:?} has the wrong length");
            sequence
        }
    };
    let mut seen: BitVec = BitVec::repeat(false, n);
    for &v in vertices {
        assert!(v < n, "{sequence:?} contains an invalid vertex {v}");
        assert!(!seen[v], "{sequence:?} visits {v} twice");
        seen.set(v, true);
    }
    for pair in sequence.windows(2) {
        assert!(
            graph.has_edge(pair[0], pair[1]),
            "{sequence:?} steps along a missing edge {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::eulerian::{EulerianClass, classify};

    #[quickcheck]
    fn prop_arb_graph_is_in_range(arb: ArbGraph) -> bool {
        (1..=MAX_ARB_VERTICES).contains(&arb.graph.vertex_count())
    }

    #[quickcheck]
    fn prop_arb_eulerian_graph_is_eulerian(arb: ArbEulerianGraph) -> bool {
        classify(&arb.graph) == EulerianClass::Eulerian && arb.graph.edge_count() > 0
    }

    #[quickcheck]
    fn prop_arb_semi_eulerian_graph_is_semi_eulerian(arb: ArbSemiEulerianGraph) -> bool {
        let (u, v) = arb.removed;
        classify(&arb.graph) == EulerianClass::SemiEulerian && !arb.graph.has_edge(u, v)
    }

    #[test]
    fn test_check_walk_counts_edges() {
        let graph = cycle_graph(4, Directedness::Undirected).unwrap();
        assert_eq!(check_walk(&graph, &[0, 1, 2, 3, 0]), 4);
        assert_eq!(check_walk(&graph, &[2]), 0);
        assert_eq!(check_walk(&graph, &[]), 0);
    }

    #[test]
    #[should_panic(expected = "not an unused edge")]
    fn test_check_walk_rejects_reuse() {
        let graph = cycle_graph(4, Directedness::Undirected).unwrap();
        check_walk(&graph, &[0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "visits 0 twice")]
    fn test_check_hamiltonian_rejects_repeats() {
        let graph = cycle_graph(4, Directedness::Undirected).unwrap();
        check_hamiltonian(&graph, &[0, 1, 0, 1], HamiltonianKind::Path);
    }
}
