use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file backing the record store. Empty keeps records in memory.
    #[serde(default)]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn is_enabled(&self) -> bool {
        !self.path.trim().is_empty()
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

fn default_max_connections() -> u32 {
    5
}
