pub use crate::analysis::GraphAnalysis;
pub use crate::eulerian::{EulerianClass, classify, is_eulerian, is_semi_eulerian};
pub use crate::fleury::{
    FleuryStep, FleuryStepKind, fleury_circuit, fleury_circuit_trace, fleury_trail,
    fleury_trail_trace,
};
pub use crate::graph_file::GraphDocument;
pub use crate::hamiltonian::{
    HamiltonianKind, find_hamiltonian_cycle, find_hamiltonian_path, has_hamiltonian_cycle,
    has_hamiltonian_path,
};
pub use crate::hierholzer::{HierholzerStep, HierholzerStepKind, hierholzer_circuit, hierholzer_trace};
pub use crate::layout::{Layout, VertexPosition};
pub use crate::trace::{MAX_RECORDED_STEPS, Trace};
pub use crate::{AdjacencyMatrix, Directedness, Graph, GraphError, GraphFileError, MAX_VERTICES};
