//! Fleury's edge-by-edge construction of Eulerian circuits and trails.
//!
//! At every vertex the builder takes the first unused edge, by target
//! index, that is not a bridge of the remaining edges, and crosses a bridge
//! only when nothing else is left.  Each choice runs the bridge test, so a
//! tour costs O(E * (V + E)).
//!
//! The bridge test ignores vertices with no remaining edges, so an edge
//! into a vertex of remaining degree one never counts as a bridge.  On some
//! graphs this sends the builder into a dead end before every edge is used,
//! in which case it stops and returns the walk so far.

use std::fmt::Display;

use crate::{
    AdjacencyMatrix, Directedness, Graph,
    connectivity::is_bridge,
    eulerian::{is_eulerian, is_semi_eulerian, trail_start},
    trace::{MAX_RECORDED_STEPS, StepRecorder, Trace},
    tracing_support::info_span,
};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FleuryStepKind {
    Start,
    /// The builder is about to consume the edge from `from` to `to`.
    /// `bridge` is set when no non-bridge edge was available.
    EdgeChosen { from: usize, to: usize, bridge: bool },
    Finished,
}

/// One frame of a Fleury trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleuryStep {
    pub kind: FleuryStepKind,
    /// Unused edges.  For a chosen edge this is the state before the edge
    /// is removed.
    pub remaining: AdjacencyMatrix,
    pub trail: Vec<usize>,
    pub current: usize,
}

impl FleuryStep {
    pub fn chosen_edge(&self) -> Option<(usize, usize)> {
        match self.kind {
            FleuryStepKind::EdgeChosen { from, to, .. } => Some((from, to)),
            _ => None,
        }
    }

    pub fn is_bridge(&self) -> bool {
        matches!(self.kind, FleuryStepKind::EdgeChosen { bridge: true, .. })
    }
}

impl Display for FleuryStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FleuryStepKind::Start => {
                write!(f, "Start the algorithm from vertex {}.", self.current)
            }
            FleuryStepKind::EdgeChosen {
                from,
                to,
                bridge: true,
            } => write!(
                f,
                "Choose the edge {from} -> {to}. It is a bridge, but it is the only option left at vertex {from}."
            ),
            FleuryStepKind::EdgeChosen { from, to, .. } => write!(
                f,
                "Choose the edge {from} -> {to}. It is not a bridge, so removing it leaves the remaining edges connected."
            ),
            FleuryStepKind::Finished if !self.remaining.is_empty() => write!(
                f,
                "Stop at vertex {}: it has no unused edges, but other edges remain.",
                self.current
            ),
            FleuryStepKind::Finished => match self.trail.first() {
                Some(&start) if self.trail.len() > 1 && start == self.current => write!(
                    f,
                    "Finish: every edge has been used and the circuit is back at vertex {start}."
                ),
                _ => write!(
                    f,
                    "Finish: every edge has been used and the trail ends at vertex {}.",
                    self.current
                ),
            },
        }
    }
}

/// Picks the edge to leave `from` by: the first non-bridge, else the first
/// edge.  The flag is true for a forced bridge.
fn choose_edge(
    remaining: &AdjacencyMatrix,
    from: usize,
    directedness: Directedness,
) -> Option<(usize, bool)> {
    let mut fallback = None;
    for to in remaining.successors(from) {
        if !is_bridge(remaining, from, to, directedness) {
            return Some((to, false));
        }
        fallback.get_or_insert(to);
    }
    fallback.map(|to| (to, true))
}

fn build(graph: &Graph, start: usize, mut recorder: StepRecorder<FleuryStep>) -> Trace<FleuryStep> {
    let _span = info_span!("fleury", vertices = graph.vertex_count(), start).entered();
    let directedness = graph.directedness();
    let mut remaining = graph.working_copy();
    let mut trail = Vec::with_capacity(graph.edge_count() + 1);
    trail.push(start);
    recorder.record(|| FleuryStep {
        kind: FleuryStepKind::Start,
        remaining: remaining.clone(),
        trail: trail.clone(),
        current: start,
    });

    let mut current = start;
    while !remaining.is_empty() {
        let Some((next, bridge)) = choose_edge(&remaining, current, directedness) else {
            break;
        };
        recorder.record(|| FleuryStep {
            kind: FleuryStepKind::EdgeChosen {
                from: current,
                to: next,
                bridge,
            },
            remaining: remaining.clone(),
            trail: trail.clone(),
            current,
        });
        remaining.remove_edge(current, next, directedness);
        current = next;
        trail.push(current);
    }

    recorder.record(|| FleuryStep {
        kind: FleuryStepKind::Finished,
        remaining: remaining.clone(),
        trail: trail.clone(),
        current,
    });
    recorder.finish(trail)
}

fn circuit(graph: &Graph, recorder: StepRecorder<FleuryStep>) -> Trace<FleuryStep> {
    if !is_eulerian(graph) {
        return Trace::default();
    }
    let start = graph.adjacency().first_vertex_with_edges().unwrap_or(0);
    build(graph, start, recorder)
}

fn trail(graph: &Graph, recorder: StepRecorder<FleuryStep>) -> Trace<FleuryStep> {
    if !is_semi_eulerian(graph) {
        return Trace::default();
    }
    let start = trail_start(graph).unwrap_or(0);
    build(graph, start, recorder)
}

/// Returns an Eulerian circuit starting at the first vertex with an edge,
/// or an empty sequence if the graph is not Eulerian.
pub fn fleury_circuit(graph: &Graph) -> Vec<usize> {
    circuit(graph, StepRecorder::disabled()).sequence
}

/// Returns an Eulerian trail starting at [`trail_start`], or an empty
/// sequence if the graph is not semi-Eulerian.
pub fn fleury_trail(graph: &Graph) -> Vec<usize> {
    trail(graph, StepRecorder::disabled()).sequence
}

pub fn fleury_circuit_trace(graph: &Graph) -> Trace<FleuryStep> {
    fleury_circuit_trace_with_cap(graph, MAX_RECORDED_STEPS)
}

pub fn fleury_circuit_trace_with_cap(graph: &Graph, cap: usize) -> Trace<FleuryStep> {
    circuit(graph, StepRecorder::new(cap))
}

pub fn fleury_trail_trace(graph: &Graph) -> Trace<FleuryStep> {
    fleury_trail_trace_with_cap(graph, MAX_RECORDED_STEPS)
}

pub fn fleury_trail_trace_with_cap(graph: &Graph, cap: usize) -> Trace<FleuryStep> {
    trail(graph, StepRecorder::new(cap))
}
