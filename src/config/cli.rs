use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Command-line flags merged with the optional configuration file. Flags win.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub cli: CliConfig,
    pub file: TomlConfig,
}

impl RunConfig {
    pub fn load(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let config = Self { cli, file };
        config.validate()?;
        Ok(config)
    }

    pub fn cpf(&self) -> &str {
        &self.cli.cpf
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub fn log_level(&self) -> Option<&str> {
        self.file.log_level()
    }

    pub fn json_logs(&self) -> bool {
        self.cli.json_logs || self.file.json_logs()
    }
}

impl ConfigProvider for RunConfig {
    fn output_format(&self) -> OutputFormat {
        self.cli
            .format
            .unwrap_or_else(|| self.file.output_format())
    }

    fn valid_message(&self) -> &str {
        self.file.valid_message()
    }

    fn invalid_message(&self) -> &str {
        self.file.invalid_message()
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        self.file.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let cli = CliConfig::parse_from(["cpf-check"]);
        let config = RunConfig::load(cli).unwrap();

        assert_eq!(config.cpf(), "00000000000");
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.valid_message(), "CPF válido");
        assert!(!config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_flag_overrides_file_format() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all("[output]\nformat = \"json\"\ninvalid_message = \"inválido\"\n".as_bytes())
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let from_file = RunConfig::load(CliConfig::parse_from(["cpf-check", "-c", path])).unwrap();
        assert_eq!(from_file.output_format(), OutputFormat::Json);
        assert_eq!(from_file.invalid_message(), "inválido");

        let overridden = RunConfig::load(CliConfig::parse_from([
            "cpf-check",
            "11144477735",
            "--config",
            path,
            "--format",
            "text",
        ]))
        .unwrap();
        assert_eq!(overridden.cpf(), "11144477735");
        assert_eq!(overridden.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[logging]\nlevel = \"loud\"\n").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let err = RunConfig::load(CliConfig::parse_from(["cpf-check", "-c", path])).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
