use crate::config::DEFAULT_USER_ID;
use crate::core::{ConfigProvider, FlightOption};
use crate::utils::error::{ConciergeError, Result};
use crate::utils::validation::{validate_airport_code, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Replaces the built-in fare table when present.
    pub catalog: Option<Vec<FlightOption>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub user_id: Option<String>,
    pub tips: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConciergeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConciergeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_ID})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&mut self, user_id: Option<&str>, tips: bool) {
        if let Some(user_id) = user_id {
            tracing::info!("🔧 user_id overridden to: {}", user_id);
            self.assistant.user_id = Some(user_id.to_string());
        }
        if tips {
            self.assistant.tips = Some(true);
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(user_id) = &self.assistant.user_id {
            validate_non_empty_string("assistant.user_id", user_id)?;
        }

        if let Some(catalog) = &self.catalog {
            if catalog.is_empty() {
                return Err(ConciergeError::ConfigError {
                    message: "[[catalog]] is declared but has no fares".to_string(),
                });
            }
            for fare in catalog {
                validate_airport_code("catalog.destination", &fare.destination)?;
                validate_non_empty_string("catalog.notes", &fare.notes)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn user_id(&self) -> &str {
        self.assistant.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }

    fn tips_enabled(&self) -> bool {
        self.assistant.tips.unwrap_or(false)
    }

    fn catalog(&self) -> Option<&[FlightOption]> {
        self.catalog.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
