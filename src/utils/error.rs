use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("Structural error for '{value}': {reason}")]
    StructuralError { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CpfError {
    pub fn structural(value: &str, reason: impl Into<String>) -> Self {
        Self::StructuralError {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::StructuralError { .. })
    }

    /// Process exit code used by the CLI. 0 and 1 are reserved for valid and
    /// invalid results.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StructuralError { .. } => 2,
            _ => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::StructuralError { reason, .. } => {
                format!("Seu CPF deve conter 11 dígitos ({})", reason)
            }
            Self::IoError(e) => format!("Could not read configuration: {}", e),
            Self::SerializationError(e) => format!("Could not render report: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
