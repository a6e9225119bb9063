use apsp_core::Graph;
use serde::{Deserialize, Serialize};

use super::error::Error;

/// A trait defining the contract for any source that produces the graph fed
/// into the solver pipeline.
///
/// This trait decouples the pipeline from the specific input (edge-list text,
/// CSV file, or a generated graph).
#[async_trait::async_trait]
pub trait GraphSource: Send + Sync {
    /// Human-readable description used in log lines.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Graph, Error>;
}

/// Rendering used by the result writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
