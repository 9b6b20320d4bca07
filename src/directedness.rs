use quickcheck::Arbitrary;

/// Whether the edges of a graph are directed.
///
/// An undirected edge is stored as two mirrored entries of the adjacency
/// matrix, and every operation that consumes an edge consumes both entries.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(&self) -> bool {
        matches!(self, Directedness::Directed)
    }

    /// The numeric tag used by the graph file format.
    pub fn file_tag(&self) -> u8 {
        match self {
            Directedness::Undirected => 0,
            Directedness::Directed => 1,
        }
    }

    pub fn from_file_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Directedness::Undirected),
            1 => Some(Directedness::Directed),
            _ => None,
        }
    }
}

impl Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}
