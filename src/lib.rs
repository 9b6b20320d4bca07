pub mod adjacency_matrix;
pub mod analysis;
pub mod connectivity;
pub mod degree;
pub mod directedness;
pub mod eulerian;
pub mod fleury;
pub mod generators;
pub mod graph;
pub mod graph_file;
pub mod hamiltonian;
pub mod hierholzer;
pub mod layout;
pub mod prelude;
pub mod testing;
pub mod trace;
pub mod tracing_support;

mod error;

pub use adjacency_matrix::AdjacencyMatrix;
pub use directedness::Directedness;
pub use error::{GraphError, GraphFileError};
pub use graph::Graph;

/// Largest number of vertices a graph may have.  Every algorithm relies on
/// this bound, the Hamiltonian search most of all.
pub const MAX_VERTICES: usize = 12;
