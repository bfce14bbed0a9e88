//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.explorer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::ProviderKind;
use crate::provider::AdapterConfig;
use crate::provider::providers::{default_base_url, weather};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub weather: ProviderSection,
    #[serde(default)]
    pub recipes: ProviderSection,
    #[serde(default)]
    pub products: ProviderSection,
    #[serde(default)]
    pub shows: ProviderSection,
    #[serde(default)]
    pub users: ProviderSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ProviderSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub default_query: Option<String>,
}

impl ExplorerConfig {
    pub fn section(&self, kind: ProviderKind) -> &ProviderSection {
        match kind {
            ProviderKind::Weather => &self.weather,
            ProviderKind::Recipes => &self.recipes,
            ProviderKind::Products => &self.products,
            ProviderKind::Shows => &self.shows,
            ProviderKind::Users => &self.users,
        }
    }
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub provider: ProviderKind,
    pub adapter: AdapterConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.explorer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".explorer").join("config.toml"))
}

/// Load config from `~/.explorer/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ExplorerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ExplorerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ExplorerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ExplorerConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ExplorerConfig, ConfigError> {
    let config: ExplorerConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Explorer Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "weather"       # weather, recipes, products, shows, users
# request_timeout_secs = 30          # unset = wait indefinitely

# [weather]
# api_key = "..."                    # Or set OPENWEATHER_API_KEY env var
# base_url = "https://api.openweathermap.org/data/2.5"
# default_query = "Jalandhar"

# [recipes]
# base_url = "https://www.themealdb.com/api/json/v1/1"
# default_query = "Pasta"

# [products]
# base_url = "https://fakestoreapi.com"

# [shows]
# base_url = "https://api.tvmaze.com"

# [users]
# api_key = "ghp_..."                # Or set GITHUB_TOKEN env var
# base_url = "https://api.github.com"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_provider` and `cli_query` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ExplorerConfig,
    cli_provider: Option<ProviderKind>,
    cli_query: Option<&str>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_provider, cli_query, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ExplorerConfig,
    cli_provider: Option<ProviderKind>,
    cli_query: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli_provider
        .or_else(|| env("EXPLORER_PROVIDER").and_then(|s| ProviderKind::parse(&s)))
        .or_else(|| {
            config
                .general
                .default_provider
                .as_deref()
                .and_then(|name| {
                    let parsed = ProviderKind::parse(name);
                    if parsed.is_none() {
                        warn!("Unknown default_provider '{}' in config, ignoring", name);
                    }
                    parsed
                })
        })
        .unwrap_or_default();

    let section = config.section(provider);

    // Base URL: env → config → default
    let base_url = env(&format!("{}_BASE_URL", provider.name().to_uppercase()))
        .or_else(|| section.base_url.clone())
        .unwrap_or_else(|| default_base_url(provider).to_string());

    // API key: env → config
    let key_var = match provider {
        ProviderKind::Weather => Some("OPENWEATHER_API_KEY"),
        ProviderKind::Users => Some("GITHUB_TOKEN"),
        _ => None,
    };
    let api_key = key_var
        .and_then(&env)
        .or_else(|| section.api_key.clone());

    // Default query: CLI → config → provider default
    let default_query = cli_query
        .map(str::to_string)
        .or_else(|| section.default_query.clone())
        .or_else(|| (provider == ProviderKind::Weather).then(|| weather::DEFAULT_CITY.to_string()));

    ResolvedConfig {
        provider,
        adapter: AdapterConfig {
            base_url,
            api_key,
            default_query,
            request_timeout_secs: config.general.request_timeout_secs,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ExplorerConfig::default();
        assert!(config.general.default_provider.is_none());
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ExplorerConfig::default(), None, None, no_env);
        assert_eq!(resolved.provider, ProviderKind::Weather);
        assert_eq!(resolved.adapter.base_url, weather::DEFAULT_BASE_URL);
        assert_eq!(resolved.adapter.default_query.as_deref(), Some("Jalandhar"));
        assert!(resolved.adapter.api_key.is_none());
        assert!(resolved.adapter.request_timeout_secs.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = parse_config(
            r#"
[general]
default_provider = "recipes"
request_timeout_secs = 15

[recipes]
base_url = "http://localhost:9000"
default_query = "Pasta"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.provider, ProviderKind::Recipes);
        assert_eq!(resolved.adapter.base_url, "http://localhost:9000");
        assert_eq!(resolved.adapter.default_query.as_deref(), Some("Pasta"));
        assert_eq!(resolved.adapter.request_timeout_secs, Some(15));
    }

    #[test]
    fn test_resolve_cli_wins_over_env_and_config() {
        let config = parse_config(
            r#"
[general]
default_provider = "recipes"

[shows]
default_query = "office"
"#,
        )
        .unwrap();
        let env = |key: &str| (key == "EXPLORER_PROVIDER").then(|| "users".to_string());

        let resolved = resolve_with_env(&config, None, None, env);
        assert_eq!(resolved.provider, ProviderKind::Users);

        let resolved = resolve_with_env(&config, Some(ProviderKind::Shows), Some("lost"), env);
        assert_eq!(resolved.provider, ProviderKind::Shows);
        assert_eq!(resolved.adapter.default_query.as_deref(), Some("lost"));
    }

    #[test]
    fn test_env_api_key_and_base_url_win_over_file() {
        let config = parse_config(
            r#"
[weather]
api_key = "from-file"
base_url = "http://file"
"#,
        )
        .unwrap();
        let env = |key: &str| match key {
            "OPENWEATHER_API_KEY" => Some("from-env".to_string()),
            "WEATHER_BASE_URL" => Some("http://env".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, None, None, env);
        assert_eq!(resolved.adapter.api_key.as_deref(), Some("from-env"));
        assert_eq!(resolved.adapter.base_url, "http://env");

        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.adapter.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_unknown_provider_name_falls_back_to_default() {
        let config = parse_config("[general]\ndefault_provider = \"movies\"\n").unwrap();
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.provider, ProviderKind::Weather);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\ndefault_provider = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing. Everything else stays default.
        let config = parse_config("[products]\ndefault_query = \"bag\"\n").unwrap();
        assert_eq!(config.products.default_query.as_deref(), Some("bag"));
        assert!(config.general.default_provider.is_none());
        assert!(config.users.base_url.is_none());
    }
}
