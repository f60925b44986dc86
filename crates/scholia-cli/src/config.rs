//! Configuration loading for Scholia.
//! Reads scholia.toml from the current directory or the path in the
//! SCHOLIA_CONFIG env var; SCHOLIA_GRAPH_* env vars override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use scholia_common::{Result, ScholiaError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

fn default_uri() -> String { "bolt://localhost:7687".to_string() }
fn default_user() -> String { "neo4j".to_string() }

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
}

fn default_corpus_path() -> PathBuf { PathBuf::from("data/corpus.json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { corpus_path: default_corpus_path() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = std::env::var("SCHOLIA_CONFIG").unwrap_or_else(|_| "scholia.toml".to_string());
        let mut config = Self::load_from(Path::new(&path))?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| ScholiaError::Config(format!("{}: {e}", path.display())))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(uri) = std::env::var("SCHOLIA_GRAPH_URI") {
            self.graph.uri = uri;
        }
        if let Ok(user) = std::env::var("SCHOLIA_GRAPH_USER") {
            self.graph.user = user;
        }
        if let Ok(password) = std::env::var("SCHOLIA_GRAPH_PASSWORD") {
            self.graph.password = password;
        }
    }
}
