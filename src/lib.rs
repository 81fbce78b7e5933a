pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::RunConfig, CliConfig};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::report::ValidationReport;
pub use crate::core::validator::{compute_check_digits, validate, Cpf};
pub use crate::domain::model::{CandidateId, CheckDigits, OutputFormat, WeightTable};
pub use crate::utils::error::{CpfError, Result};
