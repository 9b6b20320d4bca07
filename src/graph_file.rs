//! Reading and writing graphs in the plain text format of the editor.
//!
//! A file holds, separated by whitespace:
//!
//! ```text
//! 3        vertex count
//! 0        0 = undirected, 1 = directed
//! 0 1 1    one row of the adjacency matrix per vertex
//! 1 0 1
//! 1 1 0
//! 0 0      one "x y" position per vertex
//! 4 0
//! 2 3
//! ```
//!
//! Line breaks carry no meaning when reading; anything after the last
//! position is ignored.

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use crate::{
    Directedness, Graph, GraphFileError,
    layout::{Layout, VertexPosition},
};

/// A graph together with the positions its vertices are drawn at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphDocument {
    pub graph: Graph,
    pub layout: Layout,
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T, GraphFileError> {
        let token = self.0.next().ok_or(GraphFileError::UnexpectedEof(what))?;
        token.parse().map_err(|_| GraphFileError::InvalidNumber {
            what,
            token: token.to_string(),
        })
    }
}

impl GraphDocument {
    /// Pairs a graph with a layout that has every vertex at the origin.
    pub fn new(graph: Graph) -> Self {
        let layout = Layout::new(graph.vertex_count());
        Self { graph, layout }
    }

    pub fn parse(text: &str) -> Result<Self, GraphFileError> {
        let mut tokens = Tokens(text.split_whitespace());
        let vertex_count: usize = tokens.next("vertex count")?;
        // Validate before reading a matrix of that size.
        Graph::new(vertex_count, Directedness::default())?;
        let tag: u32 = tokens.next("graph kind")?;
        let directedness =
            Directedness::from_file_tag(tag).ok_or(GraphFileError::UnknownKind(tag))?;

        let mut rows = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            let row = (0..vertex_count)
                .map(|_| tokens.next::<u32>("adjacency entry"))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        let graph = Graph::from_matrix(directedness, rows)?;

        let positions = (0..vertex_count)
            .map(|_| -> Result<VertexPosition, GraphFileError> {
                let x = tokens.next("x coordinate")?;
                let y = tokens.next("y coordinate")?;
                Ok(VertexPosition::new(x, y))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            graph,
            layout: Layout::from_positions(positions),
        })
    }

    pub fn read_from(mut reader: impl Read) -> Result<Self, GraphFileError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn write_to(&self, mut writer: impl Write) -> Result<(), GraphFileError> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphFileError> {
        Self::read_from(File::open(path)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GraphFileError> {
        self.write_to(BufWriter::new(File::create(path)?))
    }
}

impl Display for GraphDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.graph.vertex_count())?;
        writeln!(f, "{}", self.graph.directedness().file_tag())?;
        for row in self.graph.adjacency().rows() {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        for position in self.layout.positions() {
            writeln!(f, "{} {}", position.x, position.y)?;
        }
        Ok(())
    }
}
