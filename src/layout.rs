use crate::{Graph, GraphError};

/// Drawing coordinates of one vertex.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VertexPosition {
    pub x: i32,
    pub y: i32,
}

impl VertexPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for VertexPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Vertex positions used only for rendering.  None of the analyses read
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Layout {
    positions: Vec<VertexPosition>,
}

impl Layout {
    /// Creates a layout with every vertex at the origin.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            positions: vec![VertexPosition::default(); vertex_count],
        }
    }

    pub fn from_positions(positions: impl IntoIterator<Item = impl Into<VertexPosition>>) -> Self {
        Self {
            positions: positions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<VertexPosition> {
        self.positions.get(vertex).copied()
    }

    /// Moves `vertex` to `position`.  Returns false if the vertex does not
    /// exist.
    pub fn set(&mut self, vertex: usize, position: VertexPosition) -> bool {
        match self.positions.get_mut(vertex) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    pub fn positions(&self) -> &[VertexPosition] {
        &self.positions
    }

    /// Returns the smallest x and smallest y over all positions, or `None`
    /// for an empty layout.
    pub fn bounds(&self) -> Option<VertexPosition> {
        let min_x = self.positions.iter().map(|p| p.x).min()?;
        let min_y = self.positions.iter().map(|p| p.y).min()?;
        Some(VertexPosition::new(min_x, min_y))
    }

    /// Checks that no two vertices share a position, reporting the first
    /// offending pair.
    pub fn check_unique(&self) -> Result<(), GraphError> {
        for (first, a) in self.positions.iter().enumerate() {
            if let Some(offset) = self.positions[first + 1..].iter().position(|b| b == a) {
                return Err(GraphError::DuplicatePosition {
                    first,
                    second: first + 1 + offset,
                    x: a.x,
                    y: a.y,
                });
            }
        }
        Ok(())
    }

    /// Checks that the layout has exactly one position per vertex of `graph`.
    pub fn check_matches(&self, graph: &Graph) -> Result<(), GraphError> {
        if self.len() == graph.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::PositionCountMismatch {
                expected: graph.vertex_count(),
                found: self.len(),
            })
        }
    }
}
