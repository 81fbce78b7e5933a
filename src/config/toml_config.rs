use crate::core::{ConfigProvider, OutputFormat};
use crate::domain::ports::{DEFAULT_INVALID_MESSAGE, DEFAULT_VALID_MESSAGE};
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub valid_message: Option<String>,
    pub invalid_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CpfError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CPF_VALID_MESSAGE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CpfError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn valid_message(&self) -> &str {
        self.output
            .valid_message
            .as_deref()
            .unwrap_or(DEFAULT_VALID_MESSAGE)
    }

    fn invalid_message(&self) -> &str {
        self.output
            .invalid_message
            .as_deref()
            .unwrap_or(DEFAULT_INVALID_MESSAGE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(message) = &self.output.valid_message {
            validate_non_empty_string("output.valid_message", message)?;
        }
        if let Some(message) = &self.output.invalid_message {
            validate_non_empty_string("output.invalid_message", message)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
