//! Degree-based classification of graphs as Eulerian, semi-Eulerian, or
//! neither.
//!
//! The classifier looks only at degrees.  It never checks that the edges
//! form a single connected component, so a graph made of two disjoint
//! cycles classifies as Eulerian even though no single circuit covers it.

use std::fmt::Display;

use crate::{
    Graph,
    degree::{degrees, in_out_degrees},
    tracing_support::info_span,
};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EulerianClass {
    /// Every edge can be covered by a closed circuit.
    Eulerian,
    /// Every edge can be covered by an open trail.
    SemiEulerian,
    Neither,
}

impl EulerianClass {
    pub fn is_eulerian(&self) -> bool {
        matches!(self, EulerianClass::Eulerian)
    }

    pub fn is_semi_eulerian(&self) -> bool {
        matches!(self, EulerianClass::SemiEulerian)
    }
}

impl Display for EulerianClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EulerianClass::Eulerian => "Eulerian",
            EulerianClass::SemiEulerian => "semi-Eulerian",
            EulerianClass::Neither => "neither Eulerian nor semi-Eulerian",
        })
    }
}

pub fn classify(graph: &Graph) -> EulerianClass {
    let _span = info_span!("classify_eulerian", directed = graph.is_directed()).entered();
    if graph.is_directed() {
        classify_directed(graph)
    } else {
        classify_undirected(graph)
    }
}

fn classify_undirected(graph: &Graph) -> EulerianClass {
    let odd = degrees(graph).iter().filter(|&&d| d % 2 == 1).count();
    if odd == 0 && graph.edge_count() > 0 {
        EulerianClass::Eulerian
    } else if odd == 2 {
        EulerianClass::SemiEulerian
    } else {
        EulerianClass::Neither
    }
}

fn classify_directed(graph: &Graph) -> EulerianClass {
    let mut sources = 0;
    let mut sinks = 0;
    let mut unbalanced = 0;
    for degree in in_out_degrees(graph) {
        match degree.balance() {
            0 => {}
            1 => sources += 1,
            -1 => sinks += 1,
            _ => unbalanced += 1,
        }
    }
    match (sources, sinks, unbalanced) {
        (0, 0, 0) => EulerianClass::Eulerian,
        (1, 1, 0) => EulerianClass::SemiEulerian,
        _ => EulerianClass::Neither,
    }
}

/// Returns true if every vertex is balanced (directed) or the graph has an
/// edge and every degree is even (undirected).
pub fn is_eulerian(graph: &Graph) -> bool {
    classify(graph).is_eulerian()
}

pub fn is_semi_eulerian(graph: &Graph) -> bool {
    classify(graph).is_semi_eulerian()
}

/// Returns the vertex an Eulerian trail has to start from: the first vertex
/// of odd degree, or for a directed graph the first vertex with more
/// outgoing than incoming edges.  Returns `None` if there is no such vertex.
pub fn trail_start(graph: &Graph) -> Option<usize> {
    if graph.is_directed() {
        in_out_degrees(graph)
            .iter()
            .position(|d| d.out_degree > d.in_degree)
    } else {
        degrees(graph).iter().position(|&d| d % 2 == 1)
    }
}
