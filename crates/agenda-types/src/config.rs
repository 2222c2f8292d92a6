use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub briefing: BriefingConfig,
}

impl AppConfig {
    /// Configuration with the credential baked in at build time from `API_KEY`.
    pub fn from_build_env() -> Self {
        Self {
            briefing: BriefingConfig {
                api_key: option_env!("API_KEY").unwrap_or_default().to_string(),
                ..BriefingConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingConfig {
    pub model: String,
    pub api_key: String,
    pub api_base: Option<String>,
    pub temperature: f32,
    /// No timeout when unset; the upstream call is expected to fail on its own
    pub timeout_ms: Option<u64>,
}

impl BriefingConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://generativelanguage.googleapis.com";

    pub fn base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or(Self::DEFAULT_API_BASE)
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            api_base: None,
            temperature: 0.5,
            timeout_ms: None,
        }
    }
}
