//! Hierholzer's stack-based construction of an Eulerian circuit.
//!
//! Starting from the first vertex with an edge, the builder follows unused
//! edges (always the lowest-numbered successor) until it gets stuck, then
//! backs up, emitting vertices as it pops them.  The emitted vertices,
//! reversed, form the circuit.  The traced variant also follows the partial
//! walk the stack represents and reports each time that walk closes into a
//! cycle.

use std::fmt::Display;

use crate::{
    AdjacencyMatrix, Graph,
    eulerian::is_eulerian,
    trace::{MAX_RECORDED_STEPS, StepRecorder, Trace},
    tracing_support::info_span,
};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum HierholzerStepKind {
    Start { vertex: usize },
    /// The edge from `from` to `to` was consumed and `to` pushed.
    EdgeAdded { from: usize, to: usize },
    /// Popping `at` closed the partial walk into a cycle.
    CycleClosed { at: usize },
}

/// One frame of a Hierholzer trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HierholzerStep {
    pub kind: HierholzerStepKind,
    /// Edges not yet consumed when the step was taken.
    pub remaining: AdjacencyMatrix,
    /// The walk currently being extended.  Empty right after a cycle closes.
    pub partial_walk: Vec<usize>,
    /// Every cycle closed so far, oldest first.
    pub closed_cycles: Vec<Vec<usize>>,
}

impl Display for HierholzerStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            HierholzerStepKind::Start { vertex } => {
                write!(f, "Start the algorithm from vertex {vertex}.")
            }
            HierholzerStepKind::EdgeAdded { from, to } => write!(
                f,
                "Add the edge {from} -> {to} and keep extending the partial cycle."
            ),
            HierholzerStepKind::CycleClosed { at } => {
                write!(f, "Close a partial cycle ending at vertex {at}. ")?;
                if self.closed_cycles.len() > 1 {
                    f.write_str("It will be spliced into the earlier cycles.")
                } else {
                    f.write_str("This is the first cycle found.")
                }
            }
        }
    }
}

/// Returns an Eulerian circuit of `graph`, or an empty sequence if the
/// graph is not Eulerian.
///
/// The circuit starts and ends at the first vertex with an edge.  The
/// classifier does not check connectivity, so for a graph whose edges form
/// several components the circuit covers only the component of that
/// vertex.
pub fn hierholzer_circuit(graph: &Graph) -> Vec<usize> {
    build(graph, StepRecorder::disabled()).sequence
}

/// Like [`hierholzer_circuit`], also recording up to
/// [`MAX_RECORDED_STEPS`] steps.
pub fn hierholzer_trace(graph: &Graph) -> Trace<HierholzerStep> {
    hierholzer_trace_with_cap(graph, MAX_RECORDED_STEPS)
}

pub fn hierholzer_trace_with_cap(graph: &Graph, cap: usize) -> Trace<HierholzerStep> {
    build(graph, StepRecorder::new(cap))
}

fn build(graph: &Graph, mut recorder: StepRecorder<HierholzerStep>) -> Trace<HierholzerStep> {
    if !is_eulerian(graph) {
        return Trace::default();
    }
    let directedness = graph.directedness();
    let mut remaining = graph.working_copy();
    let start = remaining.first_vertex_with_edges().unwrap_or(0);
    let _span = info_span!("hierholzer", vertices = graph.vertex_count(), start).entered();

    let mut partial_walk = vec![start];
    let mut closed_cycles: Vec<Vec<usize>> = Vec::new();
    recorder.record(|| HierholzerStep {
        kind: HierholzerStepKind::Start { vertex: start },
        remaining: remaining.clone(),
        partial_walk: partial_walk.clone(),
        closed_cycles: Vec::new(),
    });

    let mut stack = vec![start];
    let mut popped = Vec::with_capacity(graph.edge_count() + 1);
    while let Some(&u) = stack.last() {
        if let Some(v) = remaining.first_successor(u) {
            remaining.remove_edge(u, v, directedness);
            stack.push(v);
            partial_walk.push(v);
            recorder.record(|| HierholzerStep {
                kind: HierholzerStepKind::EdgeAdded { from: u, to: v },
                remaining: remaining.clone(),
                partial_walk: partial_walk.clone(),
                closed_cycles: closed_cycles.clone(),
            });
            continue;
        }

        stack.pop();
        popped.push(u);
        let earlier = partial_walk[..partial_walk.len().saturating_sub(1)]
            .iter()
            .position(|&w| w == u);
        let closes = earlier.is_some() || (u == start && popped.len() > 1);
        let cycle_start = earlier.unwrap_or(0);
        // A closed cycle has to contain at least one edge.
        if closes && partial_walk.len() >= cycle_start + 2 {
            closed_cycles.push(partial_walk.split_off(cycle_start));
            recorder.record(|| HierholzerStep {
                kind: HierholzerStepKind::CycleClosed { at: u },
                remaining: remaining.clone(),
                partial_walk: Vec::new(),
                closed_cycles: closed_cycles.clone(),
            });
            partial_walk.clear();
            partial_walk.push(u);
        } else {
            partial_walk.pop();
        }
    }

    popped.reverse();
    recorder.finish(popped)
}
