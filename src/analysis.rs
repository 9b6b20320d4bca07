//! Everything a report on one graph needs, computed in one call.

use std::fmt::Display;

use crate::{
    Graph,
    degree::{InOutDegree, degrees, in_out_degrees},
    eulerian::{EulerianClass, classify},
    fleury::{FleuryStep, fleury_circuit_trace_with_cap, fleury_trail_trace_with_cap},
    hamiltonian::{find_hamiltonian_cycle, find_hamiltonian_path},
    hierholzer::{HierholzerStep, hierholzer_trace_with_cap},
    trace::{MAX_RECORDED_STEPS, Trace},
    tracing_support::info_span,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DegreeTable {
    Undirected(Vec<usize>),
    Directed(Vec<InOutDegree>),
}

impl DegreeTable {
    pub fn of(graph: &Graph) -> Self {
        if graph.is_directed() {
            DegreeTable::Directed(in_out_degrees(graph))
        } else {
            DegreeTable::Undirected(degrees(graph))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphAnalysis {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub degrees: DegreeTable,
    pub hamiltonian_cycle: Option<Vec<usize>>,
    pub hamiltonian_path: Option<Vec<usize>>,
    pub eulerian: EulerianClass,
    /// Present when the graph is Eulerian.
    pub hierholzer: Option<Trace<HierholzerStep>>,
    /// A circuit when the graph is Eulerian, a trail when it is
    /// semi-Eulerian.
    pub fleury: Option<Trace<FleuryStep>>,
}

impl GraphAnalysis {
    pub fn of(graph: &Graph) -> Self {
        Self::with_step_cap(graph, MAX_RECORDED_STEPS)
    }

    /// Analyzes `graph`, keeping at most `cap` steps of each trace.
    pub fn with_step_cap(graph: &Graph, cap: usize) -> Self {
        let _span = info_span!("analyze", vertices = graph.vertex_count()).entered();
        let eulerian = classify(graph);
        let (hierholzer, fleury) = match eulerian {
            EulerianClass::Eulerian => (
                Some(hierholzer_trace_with_cap(graph, cap)),
                Some(fleury_circuit_trace_with_cap(graph, cap)),
            ),
            EulerianClass::SemiEulerian => (None, Some(fleury_trail_trace_with_cap(graph, cap))),
            EulerianClass::Neither => (None, None),
        };
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            directed: graph.is_directed(),
            degrees: DegreeTable::of(graph),
            hamiltonian_cycle: find_hamiltonian_cycle(graph),
            hamiltonian_path: find_hamiltonian_path(graph),
            eulerian,
            hierholzer,
            fleury,
        }
    }

    pub fn has_hamiltonian_cycle(&self) -> bool {
        self.hamiltonian_cycle.is_some()
    }

    pub fn has_hamiltonian_path(&self) -> bool {
        self.hamiltonian_path.is_some()
    }

    pub fn is_eulerian(&self) -> bool {
        self.eulerian.is_eulerian()
    }

    pub fn is_semi_eulerian(&self) -> bool {
        self.eulerian.is_semi_eulerian()
    }
}

struct Sequence<'a>(&'a [usize]);

impl Display for Sequence<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

fn write_witness(
    f: &mut std::fmt::Formatter<'_>,
    label: &str,
    witness: Option<&[usize]>,
) -> std::fmt::Result {
    match witness {
        Some(sequence) => writeln!(f, "{label}: {}", Sequence(sequence)),
        None => writeln!(f, "{label}: none"),
    }
}

fn write_trace<S>(
    f: &mut std::fmt::Formatter<'_>,
    label: &str,
    trace: &Trace<S>,
) -> std::fmt::Result {
    write!(f, "{label}: {} ({} steps", Sequence(&trace.sequence), trace.total_steps)?;
    if trace.is_truncated() {
        write!(f, ", {} recorded", trace.steps.len())?;
    }
    writeln!(f, ")")
}

impl Display for GraphAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} graph with {} vertices and {} edges",
            if self.directed { "Directed" } else { "Undirected" },
            self.vertex_count,
            self.edge_count
        )?;
        match &self.degrees {
            DegreeTable::Undirected(degrees) => {
                f.write_str("Degrees:")?;
                for (v, d) in degrees.iter().enumerate() {
                    write!(f, " {v}:{d}")?;
                }
            }
            DegreeTable::Directed(degrees) => {
                f.write_str("Degrees (in/out):")?;
                for (v, d) in degrees.iter().enumerate() {
                    write!(f, " {v}:{}/{}", d.in_degree, d.out_degree)?;
                }
            }
        }
        writeln!(f)?;
        write_witness(f, "Hamiltonian cycle", self.hamiltonian_cycle.as_deref())?;
        write_witness(f, "Hamiltonian path", self.hamiltonian_path.as_deref())?;
        writeln!(f, "Eulerian class: {}", self.eulerian)?;
        if let Some(trace) = &self.hierholzer {
            write_trace(f, "Hierholzer circuit", trace)?;
        }
        if let Some(trace) = &self.fleury {
            let label = if self.is_eulerian() {
                "Fleury circuit"
            } else {
                "Fleury trail"
            };
            write_trace(f, label, trace)?;
        }
        Ok(())
    }
}
