//! TripGenie configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main TripGenie configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation client configuration
    pub llm: LlmConfig,

    /// Planner behavior
    pub planner: PlannerConfig,

    /// Prompt template paths
    pub prompts: PromptsConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that required environment variables are set when the live
    /// provider is selected. Call this early in startup to fail fast with
    /// clear error messages.
    pub fn validate(&self) -> Result<()> {
        if self.planner.provider == ProviderKind::Live && std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable or use the fixture provider.",
                self.llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripgenie.yml
        let local_config = PathBuf::from(".tripgenie.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tripgenie/tripgenie.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripgenie").join("tripgenie.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Generation client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "anthropic" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 16384,
            timeout_ms: 300_000,
        }
    }
}

/// Which itinerary provider backs the planning entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Full multi-agent generation pipeline
    #[default]
    Live,
    /// Deterministic built-in bundle, no network
    Fixture,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "fixture" | "static" => Ok(Self::Fixture),
            _ => Err(format!("Unknown provider: {}. Use: live or fixture", s)),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Fixture => write!(f, "fixture"),
        }
    }
}

/// Planner behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Itinerary provider backing the entry point
    pub provider: ProviderKind,

    /// Max tokens for the per-agent data gathering calls
    #[serde(rename = "agent-max-tokens")]
    pub agent_max_tokens: u32,

    /// Max tokens for the final synthesis call, which emits three complete
    /// itineraries and needs headroom
    #[serde(rename = "synthesis-max-tokens")]
    pub synthesis_max_tokens: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Live,
            agent_max_tokens: 8192,
            synthesis_max_tokens: 16384,
        }
    }
}

/// Prompt template paths configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory of prompt overrides; embedded templates are used when unset
    /// or when a template file is missing
    #[serde(rename = "override-dir")]
    pub override_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.planner.provider, ProviderKind::Live);
        assert_eq!(config.planner.synthesis_max_tokens, 16384);
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert_eq!(config.provider, "anthropic");
        assert!(config.model.contains("sonnet"));
        assert_eq!(config.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: anthropic
  model: claude-opus-4
  api-key-env: MY_API_KEY
  base-url: https://api.example.com
  max-tokens: 8192
  timeout-ms: 60000

planner:
  provider: fixture
  agent-max-tokens: 4096
  synthesis-max-tokens: 8192
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "claude-opus-4");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.planner.provider, ProviderKind::Fixture);
        assert_eq!(config.planner.agent_max_tokens, 4096);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: claude-haiku
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "claude-haiku");

        // Defaults for unspecified
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.planner.provider, ProviderKind::Live);
    }

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!("live".parse::<ProviderKind>().unwrap(), ProviderKind::Live);
        assert_eq!("Fixture".parse::<ProviderKind>().unwrap(), ProviderKind::Fixture);
        assert_eq!("static".parse::<ProviderKind>().unwrap(), ProviderKind::Fixture);
        assert!("webhook".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_validate_fixture_needs_no_key() {
        let config = Config {
            planner: PlannerConfig {
                provider: ProviderKind::Fixture,
                ..Default::default()
            },
            ..Default::default()
        };
        // No API key in the environment is fine for the fixture provider
        assert!(config.validate().is_ok());
    }
}
