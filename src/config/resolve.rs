use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::args::CheckArgs;
use crate::error::ConfigError;

use super::types::ConfigFile;

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SEED_FILE: &str = "users.json";

/// Where the suite runs and what it seeds with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub environment: String,
    pub base_url: String,
    pub seed_file: PathBuf,
}

/// Resolves the environment, base URL and seed file.
///
/// CLI values win over the config file; the `local` environment falls back
/// to [`DEFAULT_LOCAL_BASE_URL`] when the config does not define it.
///
/// # Errors
///
/// Returns an error when the environment is unknown, has no base URL, or the
/// base URL is not an absolute http(s) URL.
pub fn resolve_target(
    args: &CheckArgs,
    config: Option<&ConfigFile>,
) -> Result<ResolvedTarget, ConfigError> {
    let environment = args
        .env
        .clone()
        .or_else(|| config.and_then(|config| config.environment.clone()))
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());

    let raw_base_url = match args.base_url.as_deref() {
        Some(url) => url.to_owned(),
        None => environment_base_url(&environment, config)?,
    };
    let base_url = normalize_base_url(&raw_base_url)?;

    let seed_file = args
        .seed_file
        .clone()
        .or_else(|| config.and_then(|config| config.seed_file.clone()))
        .unwrap_or_else(|| DEFAULT_SEED_FILE.to_owned());

    debug!(environment = %environment, base_url = %base_url, "resolved target");
    Ok(ResolvedTarget {
        environment,
        base_url,
        seed_file: PathBuf::from(seed_file),
    })
}

fn environment_base_url(
    environment: &str,
    config: Option<&ConfigFile>,
) -> Result<String, ConfigError> {
    let configured = config.and_then(|config| config.environments.get(environment));
    match configured {
        Some(entry) => entry
            .base_url
            .clone()
            .ok_or_else(|| ConfigError::MissingBaseUrl {
                name: environment.to_owned(),
            }),
        None if environment == DEFAULT_ENVIRONMENT => Ok(DEFAULT_LOCAL_BASE_URL.to_owned()),
        None => Err(ConfigError::UnknownEnvironment {
            name: environment.to_owned(),
        }),
    }
}

/// Checks that `raw` is an absolute http(s) URL and strips one trailing `/`.
///
/// # Errors
///
/// Returns an error when `raw` does not parse or uses another scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
        url: trimmed.to_owned(),
        source: err,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedBaseUrlScheme {
            url: trimmed.to_owned(),
        });
    }
    Ok(trimmed.strip_suffix('/').unwrap_or(trimmed).to_owned())
}
