/// Backend result snapshot: externally computed algorithm output (paths plus
/// a scalar summary per mode), fetched once at startup and then immutable.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("path references unknown backend node id {0}")]
    UnknownNodeId(u32),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShortestPathResult {
    pub path: Vec<u32>,
    pub cost: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaxFlowResult {
    pub paths: Vec<Vec<u32>>,
    pub max_flow: i64,
}

/// One augmenting path of the min-cost-flow result.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowPath {
    pub nodes: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MinCostFlowResult {
    pub paths: Vec<FlowPath>,
    pub total_cost: i64,
}

/// Per-mode results, each optional: the backend may not have produced a
/// section, and the whole document may be absent before load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendSnapshot {
    #[serde(default)]
    pub dijkstra: Option<ShortestPathResult>,
    #[serde(default)]
    pub dinic: Option<MaxFlowResult>,
    #[serde(default)]
    pub mcmf: Option<MinCostFlowResult>,
}

/// Read and parse the backend document. Called once at startup; a failure
/// leaves the snapshot absent for the rest of the session.
pub fn load_snapshot(path: &Path) -> Result<BackendSnapshot, BackendError> {
    let text = std::fs::read_to_string(path).map_err(|source| BackendError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| BackendError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Fixed table mapping backend numeric node ids to display names.
#[derive(Debug, Clone, Default)]
pub struct NodeNames {
    names: HashMap<u32, String>,
}

impl NodeNames {
    pub fn new(entries: &[(u32, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|&(id, name)| (id, name.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Translate a backend id path into display names. Fails on the first
    /// unknown id.
    pub fn resolve_path(&self, ids: &[u32]) -> Result<Vec<String>, BackendError> {
        ids.iter()
            .map(|&id| {
                self.names
                    .get(&id)
                    .cloned()
                    .ok_or(BackendError::UnknownNodeId(id))
            })
            .collect()
    }
}
