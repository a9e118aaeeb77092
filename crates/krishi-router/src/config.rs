//! Router configuration.
//!
//! Loads settings from /etc/krishi/router.toml or uses defaults.
//!
//! ```toml
//! [routing]
//! multi_label_ratio = 0.5
//! clarification_threshold = 0.6
//!
//! [agents]
//! irrigation = ["irrigation_scheduler_agent", "drip_advisor_agent"]
//! ```

use krishi_shared::registry::DEFAULT_AGENTS;
use krishi_shared::{AgentRegistry, Domain, KrishiError, CONFIG_PATH, DEFAULT_CONFIG_PATH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Domains scoring at least this fraction of the top score are kept
pub const MULTI_LABEL_RATIO: f64 = 0.5;

/// Decisions below this confidence ask the farmer for clarification
pub const CLARIFICATION_THRESHOLD: f64 = 0.6;

/// Confidence reported when no domain pattern matched
pub const GENERAL_CONFIDENCE: f64 = 0.3;

/// Largest agent set that may fan out without coordination
pub const MAX_PARALLEL_AGENTS: usize = 3;

/// Routing thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    #[serde(default = "default_multi_label_ratio")]
    pub multi_label_ratio: f64,

    #[serde(default = "default_clarification_threshold")]
    pub clarification_threshold: f64,

    #[serde(default = "default_general_confidence")]
    pub general_confidence: f64,

    #[serde(default = "default_max_parallel_agents")]
    pub max_parallel_agents: usize,
}

fn default_multi_label_ratio() -> f64 {
    MULTI_LABEL_RATIO
}

fn default_clarification_threshold() -> f64 {
    CLARIFICATION_THRESHOLD
}

fn default_general_confidence() -> f64 {
    GENERAL_CONFIDENCE
}

fn default_max_parallel_agents() -> usize {
    MAX_PARALLEL_AGENTS
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            multi_label_ratio: default_multi_label_ratio(),
            clarification_threshold: default_clarification_threshold(),
            general_confidence: default_general_confidence(),
            max_parallel_agents: default_max_parallel_agents(),
        }
    }
}

impl RoutingSettings {
    pub fn validate(&self) -> Result<(), KrishiError> {
        if !(self.multi_label_ratio > 0.0 && self.multi_label_ratio <= 1.0) {
            return Err(KrishiError::Config(format!(
                "multi_label_ratio must be in (0, 1], got {}",
                self.multi_label_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.clarification_threshold) {
            return Err(KrishiError::Config(format!(
                "clarification_threshold must be in [0, 1], got {}",
                self.clarification_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.general_confidence) {
            return Err(KrishiError::Config(format!(
                "general_confidence must be in [0, 1], got {}",
                self.general_confidence
            )));
        }
        if self.max_parallel_agents == 0 {
            return Err(KrishiError::Config(
                "max_parallel_agents must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full router configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingSettings,

    /// Domain name -> agent ids. Absent means the default specialists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<BTreeMap<String, Vec<String>>>,
}

impl Config {
    /// Load config from the default locations, or return defaults
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_PATH)
            .or_else(|_| Self::load_from_path(DEFAULT_CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            })
    }

    /// Load and validate config from a specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, KrishiError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml(content: &str) -> Result<Self, KrishiError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), KrishiError> {
        self.routing.validate()?;
        if let Some(agents) = &self.agents {
            for name in agents.keys() {
                name.parse::<Domain>()?;
            }
        }
        Ok(())
    }

    /// Build the agent registry this config describes
    pub fn build_registry(&self) -> Result<AgentRegistry, KrishiError> {
        let Some(agents) = &self.agents else {
            return Ok(AgentRegistry::with_defaults());
        };

        let registry = AgentRegistry::new();
        registry.register_mapping(
            agents
                .iter()
                .flat_map(|(domain, ids)| ids.iter().map(move |id| (domain.as_str(), id.clone()))),
        )?;
        Ok(registry)
    }

    /// Copy with the default agent table filled in when none is configured
    pub fn effective(&self) -> Self {
        let agents = self.agents.clone().unwrap_or_else(|| {
            DEFAULT_AGENTS
                .iter()
                .map(|(domain, id)| (domain.to_string(), vec![id.to_string()]))
                .collect()
        });
        Self {
            routing: self.routing.clone(),
            agents: Some(agents),
        }
    }

    pub fn to_toml(&self) -> Result<String, KrishiError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save default config to path (for init)
    pub fn save_default(path: impl AsRef<Path>) -> Result<(), KrishiError> {
        let content = Config::default().effective().to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RoutingSettings::default();
        assert_eq!(settings.multi_label_ratio, 0.5);
        assert_eq!(settings.clarification_threshold, 0.6);
        assert_eq!(settings.general_confidence, 0.3);
        assert_eq!(settings.max_parallel_agents, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[routing]\nclarification_threshold = 0.4\n").unwrap();
        assert_eq!(config.routing.clarification_threshold, 0.4);
        assert_eq!(config.routing.multi_label_ratio, 0.5);
        assert!(config.agents.is_none());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let err = Config::from_toml("[routing]\nmulti_label_ratio = 0.0\n").unwrap_err();
        assert!(matches!(err, KrishiError::Config(_)));

        let err = Config::from_toml("[routing]\nmax_parallel_agents = 0\n").unwrap_err();
        assert!(matches!(err, KrishiError::Config(_)));
    }

    #[test]
    fn test_unknown_agent_domain_rejected() {
        let err = Config::from_toml("[agents]\nweather = [\"weather_agent\"]\n").unwrap_err();
        assert!(matches!(err, KrishiError::UnknownDomain(ref d) if d == "weather"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml("[routing\n").unwrap_err();
        assert!(matches!(err, KrishiError::TomlParse(_)));
    }

    #[test]
    fn test_registry_from_agent_table() {
        let config = Config::from_toml(
            "[agents]\nirrigation = [\"irrigation_scheduler_agent\", \"drip_advisor_agent\"]\n",
        )
        .unwrap();
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup(Domain::Irrigation),
            vec!["irrigation_scheduler_agent", "drip_advisor_agent"]
        );
        assert!(!registry.has_agents(Domain::CropSelection));
    }

    #[test]
    fn test_registry_defaults_without_agent_table() {
        let registry = Config::default().build_registry().unwrap();
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_effective_config_round_trips() {
        let effective = Config::default().effective();
        let text = effective.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed, effective);
        assert_eq!(parsed.agents.unwrap().len(), 7);
    }
}
