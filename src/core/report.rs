use crate::core::validator::Cpf;
use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub cpf: String,
    pub valid: bool,
    pub check_digits: String,
}

impl ValidationReport {
    pub fn from_cpf(cpf: &Cpf) -> Self {
        Self {
            cpf: cpf.to_string(),
            valid: cpf.is_valid(),
            check_digits: cpf.check_digits().to_string(),
        }
    }

    pub fn render<C: ConfigProvider>(&self, config: &C) -> Result<String> {
        match config.output_format() {
            OutputFormat::Text => {
                let message = if self.valid {
                    config.valid_message()
                } else {
                    config.invalid_message()
                };
                Ok(message.to_string())
            }
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl From<&Cpf> for ValidationReport {
    fn from(cpf: &Cpf) -> Self {
        Self::from_cpf(cpf)
    }
}
