use crate::domain::model::OutputFormat;

pub const DEFAULT_VALID_MESSAGE: &str = "CPF válido";
pub const DEFAULT_INVALID_MESSAGE: &str = "CPF inválido";

/// Presentation settings for a validation report.
pub trait ConfigProvider: Send + Sync {
    fn output_format(&self) -> OutputFormat;

    fn valid_message(&self) -> &str {
        DEFAULT_VALID_MESSAGE
    }

    fn invalid_message(&self) -> &str {
        DEFAULT_INVALID_MESSAGE
    }
}
