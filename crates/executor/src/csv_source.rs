use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

use super::error::Error;
use super::types::GraphSource;
use apsp_core::Graph;
use common::types::{Edge, from_external};

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_vertex: usize,

    #[serde(rename = "to")]
    pub to_vertex: usize,

    #[serde(rename = "weight")]
    pub weight: f64,
}

/// Loads a graph from a CSV file with a `from,to,weight` header (1-indexed ids).
///
/// Without an explicit vertex count, the graph is sized to the largest id seen.
pub struct CsvSource {
    path: PathBuf,
    vertex_count: Option<usize>,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, vertex_count: Option<usize>) -> Self {
        CsvSource {
            path: path.into(),
            vertex_count,
        }
    }

    fn parse_csv_to_graph(&self, data: &[u8]) -> Result<Graph, Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data);

        // (line, edge) pairs, line counted with the header as line 1.
        let mut edges: Vec<(usize, Edge)> = Vec::new();
        for (idx, result) in rdr.deserialize().enumerate() {
            let record: CsvRecord = result?;
            let line = idx + 2;
            let from = from_external(record.from_vertex).ok_or(Error::Parse {
                line,
                message: "vertex ids start at 1".to_string(),
            })?;
            let to = from_external(record.to_vertex).ok_or(Error::Parse {
                line,
                message: "vertex ids start at 1".to_string(),
            })?;
            edges.push((line, (from, to, record.weight)));
        }

        let num_vertices = self.vertex_count.unwrap_or_else(|| {
            edges
                .iter()
                .flat_map(|&(_, (u, v, _))| [u, v])
                .max()
                .map_or(0, |max_id| max_id + 1)
        });

        let mut graph = Graph::new(num_vertices)?;
        for &(line, (u, v, w)) in &edges {
            graph
                .add_edge(u, v, w)
                .map_err(|source| Error::InvalidEdge { line, source })?;
        }

        debug!(vertices = num_vertices, edges = edges.len(), "Parsed CSV edges");
        Ok(graph)
    }
}

#[async_trait::async_trait]
impl GraphSource for CsvSource {
    fn describe(&self) -> String {
        format!("csv {}", self.path.display())
    }

    async fn load(&self) -> Result<Graph, Error> {
        let data = tokio::fs::read(&self.path).await?;
        self.parse_csv_to_graph(&data)
    }
}
