use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Config filenames probed in the working directory, in priority order.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["apicheck.toml", "apicheck.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }
}

/// Loads the config named by `--config`, else the first default file found
/// in the working directory. No file at all is not an error.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let chosen = match path {
        Some(path) => PathBuf::from(path),
        None => match find_default_config(Path::new(".")) {
            Some(found) => found,
            None => return Ok(None),
        },
    };
    load_config_file(&chosen).map(Some)
}

pub(crate) fn find_default_config(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Parses one config file; the format follows the extension.
///
/// # Errors
///
/// Returns an error when the extension is not `.toml` or `.json`, the file
/// cannot be read, or the content does not parse.
pub fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    parse_config(path).map_err(AppError::config)
}

fn parse_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let format = ConfigFormat::of(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        }),
        ConfigFormat::Json => {
            serde_json::from_str(&content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}
