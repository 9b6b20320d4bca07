use std::collections::HashSet;

use graph_tours::{
    connectivity::{count_components, is_bridge},
    degree::{degrees, in_out_degrees},
    eulerian::trail_start,
    fleury::{fleury_circuit_trace_with_cap, fleury_trail_trace},
    hierholzer::hierholzer_trace_with_cap,
    prelude::*,
    testing::{ArbEulerianGraph, ArbGraph, ArbSemiEulerianGraph, check_hamiltonian, check_walk},
};
use pathfinding::prelude::bfs_reach;
use quickcheck_macros::quickcheck;

fn reachable(matrix: &AdjacencyMatrix, start: usize) -> HashSet<usize> {
    bfs_reach(start, |&v| matrix.undirected_neighbors(v).collect::<Vec<_>>()).collect()
}

#[quickcheck]
fn prop_hamiltonian_cycle_witness_is_valid(arb: ArbGraph) -> bool {
    let graph = arb.graph;
    let witness = find_hamiltonian_cycle(&graph);
    if let Some(cycle) = &witness {
        check_hamiltonian(&graph, cycle, HamiltonianKind::Cycle);
    }
    if graph.vertex_count() < 3 && has_hamiltonian_cycle(&graph) {
        return false;
    }
    witness.is_some() == has_hamiltonian_cycle(&graph)
}

#[quickcheck]
fn prop_hamiltonian_path_witness_is_valid(arb: ArbGraph) -> bool {
    let graph = arb.graph;
    let witness = find_hamiltonian_path(&graph);
    if let Some(path) = &witness {
        check_hamiltonian(&graph, path, HamiltonianKind::Path);
    }
    if graph.vertex_count() < 2 && has_hamiltonian_path(&graph) {
        return false;
    }
    // A Hamiltonian cycle minus its closing edge is a Hamiltonian path.
    if has_hamiltonian_cycle(&graph) && witness.is_none() {
        return false;
    }
    witness.is_some() == has_hamiltonian_path(&graph)
}

#[quickcheck]
fn prop_classification_matches_degrees(arb: ArbGraph) -> bool {
    let graph = arb.graph;
    let class = classify(&graph);
    if is_eulerian(&graph) && is_semi_eulerian(&graph) {
        return false;
    }
    if graph.is_directed() {
        let balances: Vec<isize> = in_out_degrees(&graph).iter().map(|d| d.balance()).collect();
        let eulerian = balances.iter().all(|&b| b == 0);
        let mut sorted = balances.clone();
        sorted.retain(|&b| b != 0);
        sorted.sort();
        let semi = sorted == [-1, 1];
        match class {
            EulerianClass::Eulerian => eulerian,
            EulerianClass::SemiEulerian => semi,
            EulerianClass::Neither => !eulerian && !semi,
        }
    } else {
        let odd = degrees(&graph).iter().filter(|&&d| d % 2 == 1).count();
        match class {
            EulerianClass::Eulerian => odd == 0 && graph.edge_count() > 0,
            EulerianClass::SemiEulerian => odd == 2,
            EulerianClass::Neither => odd != 2 && (odd != 0 || graph.edge_count() == 0),
        }
    }
}

#[quickcheck]
fn prop_hierholzer_uses_every_edge(arb: ArbEulerianGraph) -> bool {
    let graph = arb.graph;
    let circuit = hierholzer_circuit(&graph);
    circuit.len() == graph.edge_count() + 1
        && circuit.first() == circuit.last()
        && check_walk(&graph, &circuit) == graph.edge_count()
}

// Fleury can strand itself (see the `fleury` module), so only the shape of
// its output is checked here, not that every edge is used.
#[quickcheck]
fn prop_fleury_circuit_is_a_closed_walk(arb: ArbEulerianGraph) -> bool {
    let graph = arb.graph;
    let circuit = fleury_circuit(&graph);
    check_walk(&graph, &circuit);
    circuit.first().copied() == graph.adjacency().first_vertex_with_edges()
        && circuit.first() == circuit.last()
}

#[quickcheck]
fn prop_fleury_trail_runs_between_odd_vertices(arb: ArbSemiEulerianGraph) -> bool {
    let graph = arb.graph;
    let (u, v) = arb.removed;
    let trail = fleury_trail(&graph);
    check_walk(&graph, &trail);
    let start = trail_start(&graph);
    let expected = if graph.is_directed() {
        (v, u)
    } else {
        (u.min(v), u.max(v))
    };
    start == Some(expected.0)
        && trail.first() == Some(&expected.0)
        && trail.last() == Some(&expected.1)
}

#[quickcheck]
fn prop_traces_agree_with_silent_builders(arb: ArbEulerianGraph, cap: u8) -> bool {
    let graph = arb.graph;
    let cap = cap as usize;
    let hierholzer = hierholzer_trace_with_cap(&graph, cap);
    let fleury = fleury_circuit_trace_with_cap(&graph, cap);
    hierholzer.sequence == hierholzer_circuit(&graph)
        && hierholzer.steps.len() == cap.min(hierholzer.total_steps)
        && fleury.sequence == fleury_circuit(&graph)
        && fleury.steps.len() == cap.min(fleury.total_steps)
        && fleury.total_steps == fleury.sequence.len() + 1
}

#[quickcheck]
fn prop_hierholzer_adds_each_edge_once(arb: ArbEulerianGraph) -> bool {
    let graph = arb.graph;
    let trace = hierholzer_trace_with_cap(&graph, usize::MAX);
    let added = trace
        .steps
        .iter()
        .filter(|s| matches!(s.kind, HierholzerStepKind::EdgeAdded { .. }))
        .count();
    let closed = trace
        .steps
        .iter()
        .filter(|s| matches!(s.kind, HierholzerStepKind::CycleClosed { .. }))
        .count();
    trace.steps.len() == trace.total_steps
        && matches!(trace.steps[0].kind, HierholzerStepKind::Start { .. })
        && added == graph.edge_count()
        && closed >= 1
        && trace.total_steps == 1 + added + closed
}

#[quickcheck]
fn prop_fleury_snapshots_hold_the_chosen_edge(arb: ArbSemiEulerianGraph) -> bool {
    let trace = fleury_trail_trace(&arb.graph);
    trace.steps.iter().all(|step| match step.chosen_edge() {
        Some((from, to)) => step.remaining.has_edge(from, to) && step.current == from,
        None => true,
    })
}

#[quickcheck]
fn prop_removing_a_non_bridge_keeps_vertices_connected(arb: ArbGraph) -> bool {
    let graph = arb.graph;
    let matrix = graph.working_copy();
    for (u, v, _) in matrix.iter() {
        if is_bridge(&matrix, u, v, graph.directedness()) {
            continue;
        }
        let mut without = matrix.clone();
        without.remove_edge(u, v, graph.directedness());
        if count_components(&without) > count_components(&matrix) {
            return false;
        }
        let before = reachable(&matrix, u);
        let after = reachable(&without, u);
        if without.has_incident_edge(u)
            && before
                .iter()
                .filter(|w| without.has_incident_edge(**w))
                .any(|w| !after.contains(w))
        {
            return false;
        }
    }
    true
}

#[quickcheck]
fn prop_analysis_leaves_graph_unchanged(arb: ArbGraph) -> bool {
    let graph = arb.graph;
    let copy = graph.clone();
    let first = GraphAnalysis::of(&graph);
    let second = GraphAnalysis::of(&graph);
    first == second && graph == copy
}
