//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! and extracts the typed [`Settings`] the indexer runs with.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::source::ValidationPolicy;

pub const DEFAULT_API_VERSION: &str = "2019-05-06";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Merge `config.toml`, `config.<env>.toml` and `APP_*` variables, with
    /// the files looked up under `dir`. Nested keys use `__` in variable
    /// names, e.g. `APP_SEARCH__INDEX_NAME`.
    pub fn load_from(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));
        Ok(Self { figment })
    }

    /// Layer explicit overrides (typically CLI flags) on top of everything else.
    #[must_use]
    pub fn with_override<T: Serialize>(self, key: &str, value: T) -> Self {
        Self { figment: self.figment.merge(Serialized::default(key, value)) }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub source: SourceSettings,
    #[serde(default)]
    pub validation: ValidationPolicy,
}

#[derive(Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub service_name: String,
    pub admin_api_key: String,
    pub index_name: String,
    /// Full base URL; replaces `https://<service_name>.search.windows.net`.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// The admin key never reaches logs.
impl std::fmt::Debug for SearchSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSettings")
            .field("service_name", &self.service_name)
            .field("index_name", &self.index_name)
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    pub index_file: String,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SearchSettings {
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => endpoint.trim_end_matches('/').to_string(),
            _ => format!("https://{}.search.windows.net", self.service_name),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), Error> {
        let search = &self.search;
        let has_endpoint = search.endpoint.as_deref().is_some_and(|e| !e.trim().is_empty());
        if !has_endpoint && search.service_name.trim().is_empty() {
            return Err(Error::InvalidConfig("search.service_name or search.endpoint must be set".into()));
        }
        if search.admin_api_key.trim().is_empty() {
            return Err(Error::InvalidConfig("search.admin_api_key must be set".into()));
        }
        if search.index_name.trim().is_empty() {
            return Err(Error::InvalidConfig("search.index_name must be set".into()));
        }
        if self.source.index_file.trim().is_empty() {
            return Err(Error::InvalidConfig("source.index_file must be set".into()));
        }
        Ok(())
    }

    /// Path of the document file, expanded and resolved against `base`
    /// (normally the directory the config files were read from).
    pub fn index_file(&self, base: &Path) -> PathBuf {
        resolve_with_base(base, &self.source.index_file)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
