/*!
# Configuration

JSON configuration for the viewer and the benchmark harness. Every field is optional; missing
fields take the defaults below, so `{}` is a valid configuration.

```json
{
  "visualizer": { "speed_ms": 250, "array": [5, 3, 8, 1], "target": 8 },
  "benchmark": { "size": 5000, "sort_by": "comparisons", "seed": 42 }
}
```
*/

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    AlgoscopeError, AlgoscopeResult, Node, NumNodes, Weight,
    bench::{BenchmarkHarness, SortKey},
    gens::{DEFAULT_MAX_OUT_DEGREE, DEFAULT_RING_NODES, DEFAULT_TARGET, DEFAULT_WEIGHTS, demo_array},
    runner::MAX_DELAY_MS,
};

/// Settings of the stepwise viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Delay between two steps in milliseconds; 0 disables the delay
    pub speed_ms: u64,
    /// Array used by sorting algorithms (searching uses its sorted copy)
    pub array: Vec<f64>,
    pub target: f64,
    /// Number of nodes of the ring demo graph
    pub ring_nodes: NumNodes,
    pub min_weight: Weight,
    pub max_weight: Weight,
    pub start: Node,
    /// Seed for the graph weights; random if absent
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            speed_ms: 1000,
            array: demo_array(),
            target: DEFAULT_TARGET as f64,
            ring_nodes: DEFAULT_RING_NODES,
            min_weight: *DEFAULT_WEIGHTS.start(),
            max_weight: *DEFAULT_WEIGHTS.end(),
            start: 0,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    pub fn validate(&self) -> AlgoscopeResult<()> {
        if self.speed_ms > MAX_DELAY_MS {
            return Err(AlgoscopeError::config(format!(
                "speed_ms must be in 0..={MAX_DELAY_MS}, got {}",
                self.speed_ms
            )));
        }
        if self.array.is_empty() {
            return Err(AlgoscopeError::config("array must not be empty"));
        }
        if self.array.iter().any(|x| !x.is_finite()) || !self.target.is_finite() {
            return Err(AlgoscopeError::config("array and target must be finite numbers"));
        }
        if self.ring_nodes == 0 {
            return Err(AlgoscopeError::config("ring_nodes must be > 0"));
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(AlgoscopeError::config(
                "weights must satisfy 0 < min_weight <= max_weight",
            ));
        }
        if self.start >= self.ring_nodes {
            return Err(AlgoscopeError::config(format!(
                "start node {} is not in 0..{}",
                self.start, self.ring_nodes
            )));
        }
        Ok(())
    }
}

/// Settings of the benchmark harness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Length of the generated array
    pub size: usize,
    pub target: i64,
    /// Values are drawn uniformly from `min_value..max_value`
    pub min_value: i64,
    pub max_value: i64,
    /// Graph algorithms run on `min(size, graph_node_cap)` nodes
    pub graph_node_cap: NumNodes,
    /// Every node gets `1..=max_out_degree` random out-neighbors
    pub max_out_degree: NumNodes,
    pub sort_by: SortKey,
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            target: 50,
            min_value: 0,
            max_value: 100,
            graph_node_cap: 1000,
            max_out_degree: DEFAULT_MAX_OUT_DEGREE,
            sort_by: SortKey::Time,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> AlgoscopeResult<()> {
        if self.size == 0 {
            return Err(AlgoscopeError::config("size must be > 0"));
        }
        if self.min_value >= self.max_value {
            return Err(AlgoscopeError::config("min_value must be < max_value"));
        }
        if self.graph_node_cap == 0 {
            return Err(AlgoscopeError::config("graph_node_cap must be > 0"));
        }
        if self.max_out_degree == 0 {
            return Err(AlgoscopeError::config("max_out_degree must be > 0"));
        }
        Ok(())
    }

    /// Creates a harness with these settings
    pub fn harness(&self) -> BenchmarkHarness {
        let harness = BenchmarkHarness::new()
            .size(self.size)
            .target(self.target)
            .values(self.min_value..self.max_value)
            .graph_node_cap(self.graph_node_cap)
            .max_out_degree(self.max_out_degree)
            .sort_by(self.sort_by);

        match self.seed {
            Some(seed) => harness.seed(seed),
            None => harness,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub visualizer: VisualizerConfig,
    pub benchmark: BenchmarkConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AlgoscopeResult<Self> {
        let config: Config = serde_json::from_reader(r)
            .map_err(|e| AlgoscopeError::config(format!("parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> AlgoscopeResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Parses and validates a configuration from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> AlgoscopeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AlgoscopeError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> AlgoscopeResult<()> {
        self.visualizer.validate()?;
        self.benchmark.validate()
    }

    pub fn to_json(&self) -> AlgoscopeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.visualizer.speed_ms, 1000);
        assert_eq!(config.visualizer.array.len(), 14);
        assert_eq!(config.visualizer.target, 15.0);
        assert_eq!(config.benchmark.size, 1000);
        assert_eq!(config.benchmark.target, 50);
        assert_eq!(config.benchmark.sort_by, SortKey::Time);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_json_str(
            r#"{ "visualizer": { "speed_ms": 0 }, "benchmark": { "sort_by": "theoretical", "seed": 3 } }"#,
        )
        .unwrap();

        assert_eq!(config.visualizer.speed_ms, 0);
        assert_eq!(config.visualizer.ring_nodes, 8);
        assert_eq!(config.benchmark.sort_by, SortKey::Theoretical);
        assert_eq!(config.benchmark.seed, Some(3));
        assert_eq!(config.benchmark.max_value, 100);
    }

    #[test]
    fn validate_rejects_bad_values() {
        for json in [
            r#"{ "visualizer": { "speed_ms": 2001 } }"#,
            r#"{ "visualizer": { "array": [] } }"#,
            r#"{ "visualizer": { "min_weight": 0 } }"#,
            r#"{ "visualizer": { "min_weight": 5, "max_weight": 4 } }"#,
            r#"{ "visualizer": { "start": 8 } }"#,
            r#"{ "benchmark": { "size": 0 } }"#,
            r#"{ "benchmark": { "min_value": 10, "max_value": 10 } }"#,
            r#"{ "benchmark": { "max_out_degree": 0 } }"#,
        ] {
            let err = Config::from_json_str(json).unwrap_err();
            assert!(matches!(err, AlgoscopeError::Config(_)), "{json}: {err}");
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Config::from_json_str("{ visualizer: }").unwrap_err();
        assert!(err.to_string().starts_with("config error: parse config JSON"));

        let err = Config::from_json_file("/nonexistent/algoscope.json").unwrap_err();
        assert!(err.to_string().contains("open config JSON"));
    }

    #[test]
    fn json_roundtrip() {
        let mut config = Config::default();
        config.benchmark.sort_by = SortKey::Comparisons;
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }
}
