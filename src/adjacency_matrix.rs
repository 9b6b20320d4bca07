use std::fmt::Debug;

use crate::Directedness;

/// A dense square matrix of edge multiplicities.
///
/// The canonical graph only ever holds 0/1 entries, but the tour builders
/// work on copies of this matrix where an entry counts the unused copies of
/// an edge and is decremented as edges are consumed.  Entries are stored
/// row-major.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct AdjacencyMatrix {
    size: usize,
    entries: Vec<u32>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero matrix with `size` rows and columns.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            entries: vec![0; size * size],
        }
    }

    /// Builds a matrix from its rows.  Returns `None` if the rows do not form
    /// a square matrix.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Option<Self>
    where
        R: AsRef<[u32]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let size = rows.len();
        let mut matrix = Self::with_size(size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            matrix.entries[i * size..(i + 1) * size].copy_from_slice(row);
        }
        Some(matrix)
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Gets the multiplicity stored at `row` and `col`.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.entries[self.index(row, col)]
    }

    /// Overwrites the multiplicity stored at `row` and `col`.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let index = self.index(row, col);
        self.entries[index] = value;
    }

    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        self.get(row, col) > 0
    }

    pub fn row(&self, row: usize) -> &[u32] {
        &self.entries[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.size).map(|row| self.row(row))
    }

    /// Iterates, in ascending order, over the columns with a positive entry
    /// in the given row.
    pub fn successors(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(col, &value)| (value > 0).then_some(col))
    }

    /// Iterates, in ascending order, over the rows with a positive entry in
    /// the given column.
    pub fn predecessors(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&row| self.has_edge(row, col))
    }

    pub fn first_successor(&self, row: usize) -> Option<usize> {
        self.successors(row).next()
    }

    /// Iterates over the vertices joined to `vertex` by an entry in either
    /// direction, ignoring the stored orientation.
    pub fn undirected_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size)
            .filter(move |&other| self.has_edge(vertex, other) || self.has_edge(other, vertex))
    }

    /// Returns true if any entry in either direction touches `vertex`.
    pub fn has_incident_edge(&self, vertex: usize) -> bool {
        self.undirected_neighbors(vertex).next().is_some()
    }

    /// Returns the first row, by index, that holds a positive entry.
    pub fn first_vertex_with_edges(&self) -> Option<usize> {
        (0..self.size).find(|&row| self.row(row).iter().any(|&value| value > 0))
    }

    /// Returns the sum of all entries.  For an undirected matrix this counts
    /// each remaining edge twice.
    pub fn total(&self) -> u32 {
        self.entries.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|&value| value == 0)
    }

    /// Consumes one copy of the edge from `u` to `v`, along with its mirror
    /// entry when the edge is undirected.  Returns false, leaving the matrix
    /// untouched, if no copy of the edge remains.
    pub fn remove_edge(&mut self, u: usize, v: usize, directedness: Directedness) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }
        let index = self.index(u, v);
        self.entries[index] -= 1;
        if !directedness.is_directed() {
            let mirror = self.index(v, u);
            self.entries[mirror] = self.entries[mirror].saturating_sub(1);
        }
        true
    }

    /// Iterates over all positive entries as `(row, col, multiplicity)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value > 0)
            .map(|(index, &value)| (index / self.size, index % self.size, value))
    }
}

impl Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("size", &self.size)
            .field("rows", &self.rows().collect::<Vec<_>>())
            .finish()
    }
}
