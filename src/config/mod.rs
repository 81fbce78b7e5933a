#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_CPF: &str = "00000000000";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cpf-check")]
#[command(about = "Validate the check digits of a Brazilian CPF number")]
pub struct CliConfig {
    /// CPF to validate: 11 digits, no dots or dashes
    #[arg(default_value = DEFAULT_CPF)]
    pub cpf: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
