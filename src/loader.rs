//! Graph file loader
//!
//! Format: the first line holds the node count, every following line holds
//! zero or more whitespace-separated `from to` pairs.
//!
//! ```text
//! 4
//! 0 1 1 2
//! 2 0
//! 2 3
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use surfrank_algorithms::{AlgoError, Graph};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading a graph file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing node count header")]
    MissingHeader,

    #[error("Invalid node count: {0:?}")]
    InvalidHeader(String),

    #[error("Line {line}: expected an even number of values")]
    OddTokenCount { line: usize },

    #[error("Line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: {source}")]
    Edge { line: usize, source: AlgoError },

    #[error(transparent)]
    Graph(#[from] AlgoError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Read a graph from a file on disk
pub fn load_graph<P: AsRef<Path>>(path: P) -> LoadResult<Graph> {
    let path = path.as_ref();
    debug!("Loading graph from {:?}", path);
    let file = File::open(path)?;
    parse_graph(BufReader::new(file))
}

/// Parse a graph from any buffered reader. Line numbers in errors are 1-based.
pub fn parse_graph<R: BufRead>(reader: R) -> LoadResult<Graph> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(LoadError::MissingHeader)??;
    let header = header.trim();
    let size: usize = header
        .parse()
        .map_err(|_| LoadError::InvalidHeader(header.to_string()))?;
    let mut graph = Graph::new(size)?;

    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() % 2 != 0 {
            return Err(LoadError::OddTokenCount { line: line_no });
        }

        for pair in tokens.chunks_exact(2) {
            let from = parse_index(pair[0], line_no)?;
            let to = parse_index(pair[1], line_no)?;
            graph
                .add_edge(from, to)
                .map_err(|source| LoadError::Edge { line: line_no, source })?;
        }
    }

    info!(
        "Loaded graph with {} nodes and {} edges",
        graph.size(),
        graph.edge_count()
    );
    Ok(graph)
}

fn parse_index(token: &str, line: usize) -> LoadResult<usize> {
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> LoadResult<Graph> {
        parse_graph(Cursor::new(text))
    }

    #[test]
    fn test_parse_pairs_across_lines() {
        let graph = parse("4\n0 1 1 2\n\n2 0\n2 3").unwrap();

        assert_eq!(graph.size(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.successors(2), &[0, 3]);
        assert_eq!(graph.predecessors(2), &[1]);
    }

    #[test]
    fn test_header_only() {
        let graph = parse(" 3 \n").unwrap();
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(parse(""), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn test_invalid_header() {
        assert!(matches!(parse("-2\n"), Err(LoadError::InvalidHeader(h)) if h == "-2"));
        assert!(matches!(parse("abc\n0 1\n"), Err(LoadError::InvalidHeader(_))));
    }

    #[test]
    fn test_zero_nodes() {
        assert!(matches!(
            parse("0\n"),
            Err(LoadError::Graph(AlgoError::InvalidGraph(_)))
        ));
    }

    #[test]
    fn test_oversized_node_count() {
        assert!(matches!(
            parse("18446744073709551615\n"),
            Err(LoadError::Graph(AlgoError::InvalidGraph(_)))
        ));
    }

    #[test]
    fn test_odd_token_count() {
        assert!(matches!(
            parse("3\n0 1\n1 2 0\n"),
            Err(LoadError::OddTokenCount { line: 3 })
        ));
    }

    #[test]
    fn test_invalid_number() {
        match parse("3\n0 x\n") {
            Err(LoadError::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_edge_out_of_range() {
        match parse("2\n0 1\n1 2\n") {
            Err(LoadError::Edge { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, AlgoError::IndexOutOfRange { index: 2, size: 2 });
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
