use std::path::PathBuf;

use apsp_core::Graph;
use common::types::{Vertex, Weight, from_external};
use tracing::debug;

use super::error::Error;
use super::types::GraphSource;

/// Reads a graph from the plain edge-list text format:
///
/// ```text
/// 3          <- vertex count
/// 1 2 5      <- u v w, 1-indexed
/// 2 3 3
/// ```
///
/// Blank lines are ignored anywhere in the file.
pub struct EdgeListSource {
    path: PathBuf,
}

impl EdgeListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EdgeListSource { path: path.into() }
    }
}

#[async_trait::async_trait]
impl GraphSource for EdgeListSource {
    fn describe(&self) -> String {
        format!("edge list {}", self.path.display())
    }

    async fn load(&self) -> Result<Graph, Error> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_edge_list(&text)
    }
}

/// Parses edge-list text into a graph. Later duplicates of an edge replace earlier ones.
pub fn parse_edge_list(text: &str) -> Result<Graph, Error> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(Error::Parse {
        line: 1,
        message: "missing vertex count".to_string(),
    })?;
    let n: usize = header.parse().map_err(|e| Error::Parse {
        line: header_line,
        message: format!("invalid vertex count '{}': {}", header, e),
    })?;
    let mut graph = Graph::new(n).map_err(|source| Error::InvalidEdge {
        line: header_line,
        source,
    })?;

    let mut edges = 0usize;
    for (line, content) in lines {
        let (u, v, w) = parse_edge_line(line, content)?;
        graph
            .add_edge(u, v, w)
            .map_err(|source| Error::InvalidEdge { line, source })?;
        edges += 1;
    }

    debug!(vertices = n, edges, "Parsed edge list");
    Ok(graph)
}

fn parse_edge_line(line: usize, content: &str) -> Result<(Vertex, Vertex, Weight), Error> {
    let parts: Vec<&str> = content.split_whitespace().collect();
    let [u, v, w] = parts[..] else {
        return Err(Error::Parse {
            line,
            message: format!("expected 'u v w', found {} fields", parts.len()),
        });
    };

    let u = parse_vertex(line, u)?;
    let v = parse_vertex(line, v)?;
    let w: Weight = w.parse().map_err(|e| Error::Parse {
        line,
        message: format!("invalid weight '{}': {}", w, e),
    })?;

    Ok((u, v, w))
}

fn parse_vertex(line: usize, token: &str) -> Result<Vertex, Error> {
    let id: usize = token.parse().map_err(|e| Error::Parse {
        line,
        message: format!("invalid vertex id '{}': {}", token, e),
    })?;

    from_external(id).ok_or(Error::Parse {
        line,
        message: "vertex ids start at 1".to_string(),
    })
}
