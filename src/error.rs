use crate::MAX_VERTICES;

/// Errors raised while building or validating a graph.
///
/// The analysis algorithms themselves never fail; they report infeasible
/// queries through empty results instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex count {0} is out of range (must be between 1 and {max})", max = MAX_VERTICES)]
    VertexCountOutOfRange(usize),
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    #[error("Self-loop at vertex {0} is not allowed")]
    SelfLoop(usize),
    #[error("Adjacency entry ({row}, {col}) must be 0 or 1, found {value}")]
    InvalidEntry { row: usize, col: usize, value: u32 },
    #[error("Adjacency matrix row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Undirected adjacency matrix is not symmetric at ({row}, {col})")]
    AsymmetricMatrix { row: usize, col: usize },
    #[error("Vertices {first} and {second} share the position ({x}, {y})")]
    DuplicatePosition {
        first: usize,
        second: usize,
        x: i32,
        y: i32,
    },
    #[error("Expected {expected} vertex positions, found {found}")]
    PositionCountMismatch { expected: usize, found: usize },
}

/// Errors raised while reading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum GraphFileError {
    #[error("Unexpected end of file while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("Invalid {what}: {token:?}")]
    InvalidNumber { what: &'static str, token: String },
    #[error("Unknown graph kind {0} (expected 0 for undirected or 1 for directed)")]
    UnknownKind(u32),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
