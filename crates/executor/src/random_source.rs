use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::GeneratorConfig;
use super::error::Error;
use super::types::GraphSource;
use apsp_core::Graph;

/// Produces synthetic dense graphs for smoke runs and benchmarking.
///
/// Every ordered pair `(u, v)` with `u != v` receives an edge with probability
/// `edge_probability`, weighted by an integer drawn from
/// `[min_weight, max_weight]`. In undirected mode each unordered pair is drawn
/// once and inserted in both directions. A fixed `seed` makes the output reproducible.
pub struct RandomSource {
    pub settings: GeneratorConfig,
}

impl RandomSource {
    pub fn new(settings: GeneratorConfig) -> Self {
        RandomSource { settings }
    }

    fn validate(&self) -> Result<(), Error> {
        let s = &self.settings;
        if !(0.0..=1.0).contains(&s.edge_probability) {
            return Err(Error::InvalidGenerator(format!(
                "edge_probability must be within [0, 1], got {}",
                s.edge_probability
            )));
        }
        if !s.min_weight.is_finite() || !s.max_weight.is_finite() || s.min_weight > s.max_weight
        {
            return Err(Error::InvalidGenerator(format!(
                "weight range [{}, {}] is empty or not finite",
                s.min_weight, s.max_weight
            )));
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<Graph, Error> {
        self.validate()?;
        let s = &self.settings;

        let mut rng: SmallRng = match s.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut graph = Graph::new(s.vertices)?;
        let weight_range = s.min_weight..=s.max_weight;

        for u in 0..s.vertices {
            for v in 0..s.vertices {
                if u == v || (s.undirected && v < u) {
                    continue;
                }
                if !rng.random_bool(s.edge_probability) {
                    continue;
                }

                // `+ 0.0` folds a rounded `-0.0` into `0.0`.
                let w = rng.random_range(weight_range.clone()).round() + 0.0;
                if s.undirected {
                    graph.add_undirected_edge(u, v, w)?;
                } else {
                    graph.add_edge(u, v, w)?;
                }
            }
        }

        debug!(
            vertices = s.vertices,
            edges = graph.edge_count(),
            "Generated random graph"
        );
        Ok(graph)
    }
}

#[async_trait]
impl GraphSource for RandomSource {
    fn describe(&self) -> String {
        format!(
            "random graph ({} vertices, p = {})",
            self.settings.vertices, self.settings.edge_probability
        )
    }

    async fn load(&self) -> Result<Graph, Error> {
        self.generate()
    }
}
