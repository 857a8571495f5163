use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub environment: Option<String>,
    pub seed_file: Option<String>,
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct EnvironmentConfig {
    pub base_url: Option<String>,
}
