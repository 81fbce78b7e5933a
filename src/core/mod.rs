pub mod report;
pub mod validator;

pub use crate::domain::model::{CandidateId, CheckDigits, OutputFormat, WeightTable};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
