//! Subject catalog configuration.

use serde::{Deserialize, Serialize};

/// Subject catalog behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Insert the starter subject set when the catalog is empty at startup.
    #[serde(default = "default_seed")]
    pub seed_on_startup: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: default_seed(),
        }
    }
}

fn default_seed() -> bool {
    true
}
