use config::{Config as ConfigLoader, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::types::OutputFormat;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SolverConfig {
    /// Milliseconds allowed for one solve; `0` disables the deadline.
    pub deadline_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_paths: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub vertices: usize,
    pub edge_probability: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub undirected: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub solver: SolverConfig,
    pub output: OutputConfig,
    pub generator: GeneratorConfig,
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    ConfigLoader::builder()
        .set_default("solver.deadline_ms", 0)?
        .set_default("output.format", "text")?
        .set_default("output.show_paths", true)?
        .set_default("generator.vertices", 8)?
        .set_default("generator.edge_probability", 0.35)?
        .set_default("generator.min_weight", -2.0)?
        .set_default("generator.max_weight", 10.0)?
        .set_default("generator.undirected", false)
}

/// Loads configuration from built-in defaults, a TOML file and environment variables.
///
/// With an explicit `path` the file must exist. Otherwise
/// `crates/executor/Config.toml` under the current directory is used when present.
/// Variables such as `APSP_SOLVER__DEADLINE_MS=500` override both.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let builder = with_defaults().map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let builder = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found at path: {}",
                    path.display()
                )));
            }
            builder.add_source(File::from(path).required(true))
        }
        None => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            let default_path: PathBuf = base_path
                .join("crates")
                .join("executor")
                .join("Config.toml");
            builder.add_source(File::from(default_path.as_path()).required(false))
        }
    };

    let settings = builder
        .add_source(
            Environment::with_prefix("APSP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    settings
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))
}
