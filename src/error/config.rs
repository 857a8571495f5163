use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Unknown environment '{name}'. Define [environments.{name}] or pass --base-url.")]
    UnknownEnvironment { name: String },
    #[error("Environment '{name}' has no base_url.")]
    MissingBaseUrl { name: String },
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' must use http or https.")]
    UnsupportedBaseUrlScheme { url: String },
    #[error("Failed to read seed file '{path}': {source}")]
    ReadSeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse seed file '{path}': {source}")]
    ParseSeedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Seed file '{path}' contains no users.")]
    EmptySeedFile { path: PathBuf },
}
