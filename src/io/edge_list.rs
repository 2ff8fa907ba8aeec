//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by `m` non-comment-lines
//! `u v [w]` representing an edge `WeightedEdge(u, v, w)`. A missing weight defaults to `1`.
//! Nodes are 0-indexed unless the reader is configured to be one-indexed.

use std::io::Lines;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with any of these identifiers are skipped when reading
    comment_identifiers: Vec<String>,
    /// Subtract `1` from every node id
    one_indexed: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifiers: vec!["c".to_string(), "#".to_string()],
            one_indexed: false,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the comment identifiers
    pub fn comment_identifiers<S: Into<String>>(
        mut self,
        identifiers: impl IntoIterator<Item = S>,
    ) -> EdgeListReader {
        self.comment_identifiers = identifiers.into_iter().map(|c| c.into()).collect();
        self
    }

    /// Interpret node ids as `1..=n` instead of `0..n`
    pub fn one_indexed(mut self, one_indexed: bool) -> EdgeListReader {
        self.one_indexed = one_indexed;
        self
    }
}

const MAX_EDGE_PREALLOC: usize = 1 << 16;

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader, self)?;
        let n = edges_reader.number_of_nodes();
        let m = edges_reader.number_of_edges();

        // the header is untrusted; a wrong count is caught after reading
        let mut edges = Vec::with_capacity((m as usize).min(MAX_EDGE_PREALLOC));
        while let Some(edge) = edges_reader.parse_edge_line()? {
            edges.push(edge);
        }

        raise_error_unless!(
            edges.len() == m as usize,
            ErrorKind::InvalidData,
            format!("Header announced {m} edges but found {}.", edges.len())
        );

        Ok(G::from_edges(n, edges))
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line-based parser behind [`EdgeListReader`]
struct EdgeListEdgesReader<'a, R> {
    lines: Lines<R>,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    settings: &'a EdgeListReader,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new reader and tries to parse the first non-comment-line as the header
    fn try_new(reader: R, settings: &'a EdgeListReader) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            settings,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split_whitespace();
        edge_list_reader.number_of_nodes = parse_next_value!(parts, "Number of nodes");
        edge_list_reader.number_of_edges = parse_next_value!(parts, "Number of edges");

        Ok(edge_list_reader)
    }

    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-empty non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty()
                        || self
                            .settings
                            .comment_identifiers
                            .iter()
                            .any(|c| trimmed.starts_with(c.as_str()))
                    {
                        continue;
                    }
                    return Ok(Some(trimmed.to_string()));
                }
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<WeightedEdge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");
        let weight: Weight = match parts.next() {
            Some(w) => w.parse().map_err(|_| {
                io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse Weight in line `{line}`.")
                )
            })?,
            None => DEFAULT_WEIGHT,
        };

        let (lb, ub) = if self.settings.one_indexed {
            (1, self.number_of_nodes)
        } else {
            (0, self.number_of_nodes.saturating_sub(1))
        };

        raise_error_unless!(
            self.number_of_nodes > 0 && (lb..=ub).contains(&from) && (lb..=ub).contains(&dest),
            ErrorKind::InvalidData,
            format!("Edge `{line}` has an endpoint outside of {lb}..={ub}.")
        );

        Ok(Some(WeightedEdge(from - lb, dest - lb, weight)))
    }
}
