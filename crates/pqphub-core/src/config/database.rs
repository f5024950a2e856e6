//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Location of the JSON document holding all collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the JSON document file. Created on first use.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "data/db.json".to_string()
}
