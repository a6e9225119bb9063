use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::error::Error;
use super::types::OutputFormat;
use apsp_core::{ComputationResult, NegativeCycle, ShortestPaths};
use common::types::{Weight, to_external};

/// Renders a computation result as a report and writes it to disk.
///
/// Vertices are printed 1-indexed. In the predecessor matrix `0` means "none".
#[derive(Debug, Clone, Copy)]
pub struct ResultWriter {
    format: OutputFormat,
    show_paths: bool,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Report {
    Solved {
        vertex_count: usize,
        distances: Vec<Vec<Option<Weight>>>,
        predecessors: Vec<Vec<Option<usize>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        paths: Option<Vec<PathReport>>,
    },
    NegativeCycle {
        vertices: Vec<usize>,
    },
}

#[derive(Serialize)]
struct PathReport {
    from: usize,
    to: usize,
    distance: Option<Weight>,
    vertices: Option<Vec<usize>>,
}

impl ResultWriter {
    pub fn new(format: OutputFormat, show_paths: bool) -> Self {
        Self { format, show_paths }
    }

    /// Writes the rendered report to `path`, replacing any existing file.
    pub async fn write_to(&self, path: &Path, result: &ComputationResult) -> Result<(), Error> {
        let report = self.render(result)?;
        tokio::fs::write(path, report).await?;
        debug!(path = %path.display(), "Report written");
        Ok(())
    }

    pub fn render(&self, result: &ComputationResult) -> Result<String, Error> {
        match self.format {
            OutputFormat::Text => self.render_text(result),
            OutputFormat::Json => self.render_json(result),
        }
    }

    fn render_text(&self, result: &ComputationResult) -> Result<String, Error> {
        let paths = match result {
            ComputationResult::Solved(paths) => paths,
            ComputationResult::NegativeCycle(cycle) => return Ok(render_cycle_text(cycle)),
        };
        let n = paths.vertex_count();
        let mut out = String::new();

        out.push_str("Shortest distance matrix (T):\n");
        for row in paths.distances().rows() {
            let cells: Vec<String> = row.iter().map(|&w| format_weight(w)).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }

        out.push_str("\nPredecessor matrix (P):\n");
        for row in paths.predecessors().rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|p| p.map_or(0, to_external).to_string())
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }

        if self.show_paths {
            out.push_str("\nShortest paths:\n");
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let (from, to) = (to_external(i), to_external(j));
                    match (paths.path(i, j)?, paths.distance(i, j)?) {
                        (Some(path), Some(distance)) => {
                            let hops: Vec<String> =
                                path.iter().map(|&v| to_external(v).to_string()).collect();
                            out.push_str(&format!(
                                "Path from {} to {}: {}, distance: {}\n",
                                from,
                                to,
                                hops.join(" -> "),
                                format_weight(distance)
                            ));
                        }
                        _ => {
                            out.push_str(&format!(
                                "Path from {} to {}: does not exist\n",
                                from, to
                            ));
                        }
                    }
                }
            }
        }

        Ok(out)
    }

    fn render_json(&self, result: &ComputationResult) -> Result<String, Error> {
        let report = match result {
            ComputationResult::Solved(paths) => self.solved_report(paths)?,
            ComputationResult::NegativeCycle(cycle) => Report::NegativeCycle {
                vertices: cycle.vertices().iter().map(|&v| to_external(v)).collect(),
            },
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn solved_report(&self, paths: &ShortestPaths) -> Result<Report, Error> {
        let n = paths.vertex_count();
        let distances: Vec<Vec<Option<Weight>>> = paths
            .distances()
            .rows()
            .map(|row| row.iter().map(|&w| w.is_finite().then_some(w)).collect())
            .collect();
        let predecessors: Vec<Vec<Option<usize>>> = paths
            .predecessors()
            .rows()
            .map(|row| row.iter().map(|p| p.map(to_external)).collect())
            .collect();

        let path_reports = if self.show_paths {
            let mut reports = Vec::with_capacity(n * n.saturating_sub(1));
            for i in 0..n {
                for j in (0..n).filter(|&j| j != i) {
                    reports.push(PathReport {
                        from: to_external(i),
                        to: to_external(j),
                        distance: paths.distance(i, j)?,
                        vertices: paths
                            .path(i, j)?
                            .map(|path| path.into_iter().map(to_external).collect()),
                    });
                }
            }
            Some(reports)
        } else {
            None
        };

        Ok(Report::Solved {
            vertex_count: n,
            distances,
            predecessors,
            paths: path_reports,
        })
    }
}

fn render_cycle_text(cycle: &NegativeCycle) -> String {
    let vertices: Vec<String> = cycle
        .vertices()
        .iter()
        .map(|&v| to_external(v).to_string())
        .collect();
    format!(
        "Negative cycle detected through vertex {}.\n\
         Vertices on negative cycles: {}\n\
         Shortest distances are undefined for this graph.\n",
        to_external(cycle.vertex()),
        vertices.join(" ")
    )
}

/// `inf` for unreachable cells. Integral weights print without a fractional part.
fn format_weight(w: Weight) -> String {
    if w == f64::INFINITY {
        "inf".to_string()
    } else {
        // `+ 0.0` folds `-0.0` into `0.0`.
        format!("{}", w + 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsp_core::traits::AllPairsSolver;
    use apsp_core::{FloydWarshallSolver, Graph};
    use tempfile::tempdir;

    fn solve(n: usize, edges: &[(usize, usize, f64)]) -> ComputationResult {
        let graph = Graph::from_edges(n, edges).unwrap();
        FloydWarshallSolver::new().solve(&graph).unwrap()
    }

    fn three_vertex_result() -> ComputationResult {
        solve(3, &[(0, 1, 5.0), (1, 2, 3.0), (0, 2, 10.0)])
    }

    #[test]
    fn text_report_lists_matrices_and_paths() {
        let report = ResultWriter::new(OutputFormat::Text, true)
            .render(&three_vertex_result())
            .unwrap();

        let expected = "\
Shortest distance matrix (T):
0 5 8
inf 0 3
inf inf 0

Predecessor matrix (P):
0 1 2
0 0 2
0 0 0

Shortest paths:
Path from 1 to 2: 1 -> 2, distance: 5
Path from 1 to 3: 1 -> 2 -> 3, distance: 8
Path from 2 to 1: does not exist
Path from 2 to 3: 2 -> 3, distance: 3
Path from 3 to 1: does not exist
Path from 3 to 2: does not exist
";
        assert_eq!(report, expected);
    }

    #[test]
    fn text_report_can_omit_paths() {
        let report = ResultWriter::new(OutputFormat::Text, false)
            .render(&three_vertex_result())
            .unwrap();

        assert!(report.contains("Predecessor matrix (P):"));
        assert!(!report.contains("Shortest paths:"));
    }

    #[test]
    fn fractional_weights_keep_their_decimals() {
        let report = ResultWriter::new(OutputFormat::Text, false)
            .render(&solve(2, &[(0, 1, 2.5), (1, 0, -0.5)]))
            .unwrap();

        assert!(report.contains("0 2.5\n-0.5 0\n"), "report was:\n{}", report);
    }

    #[test]
    fn text_report_for_negative_cycle_has_no_matrices() {
        let report = ResultWriter::new(OutputFormat::Text, true)
            .render(&solve(2, &[(0, 1, -1.0), (1, 0, -1.0)]))
            .unwrap();

        assert!(report.starts_with("Negative cycle detected through vertex 1."));
        assert!(report.contains("Vertices on negative cycles: 1 2"));
        assert!(!report.contains("matrix"));
    }

    #[test]
    fn json_report_uses_nulls_for_missing_values() {
        let report = ResultWriter::new(OutputFormat::Json, true)
            .render(&three_vertex_result())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["status"], "solved");
        assert_eq!(value["vertex_count"], 3);
        assert_eq!(value["distances"][0][2], 8.0);
        assert!(value["distances"][1][0].is_null());
        assert_eq!(value["predecessors"][0][2], 2);
        assert!(value["predecessors"][0][0].is_null());
        assert_eq!(value["paths"].as_array().unwrap().len(), 6);
        assert_eq!(value["paths"][1]["vertices"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn json_report_omits_paths_when_disabled() {
        let report = ResultWriter::new(OutputFormat::Json, false)
            .render(&three_vertex_result())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert!(value.get("paths").is_none());
    }

    #[test]
    fn json_report_for_negative_cycle() {
        let report = ResultWriter::new(OutputFormat::Json, true)
            .render(&solve(3, &[(1, 2, -1.0), (2, 1, -1.0)]))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["status"], "negative_cycle");
        assert_eq!(value["vertices"], serde_json::json!([2, 3]));
    }

    #[tokio::test]
    async fn write_to_creates_report_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.txt");

        ResultWriter::new(OutputFormat::Text, true)
            .write_to(&path, &three_vertex_result())
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Shortest distance matrix (T):"));
    }
}
