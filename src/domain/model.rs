use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_cpf_shape, CPF_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positional weights for the two CPF verifier digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    pub first: [u32; 9],
    pub second: [u32; 10],
}

impl WeightTable {
    pub const CPF: WeightTable = WeightTable {
        first: [10, 9, 8, 7, 6, 5, 4, 3, 2],
        second: [11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    };
}

/// An 11-digit CPF candidate that passed the structural check. Holds digit
/// values (0-9), not ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateId([u8; CPF_LENGTH]);

impl CandidateId {
    pub fn parse(candidate: &str) -> Result<Self> {
        validate_cpf_shape(candidate)?;

        let mut digits = [0u8; CPF_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(candidate.bytes()) {
            *slot = byte - b'0';
        }
        Ok(Self(digits))
    }

    /// Builds a candidate from digit values. Returns `None` if any value is
    /// above 9.
    pub fn from_digits(digits: [u8; CPF_LENGTH]) -> Option<Self> {
        digits.iter().all(|d| *d <= 9).then_some(Self(digits))
    }

    pub fn digits(&self) -> &[u8; CPF_LENGTH] {
        &self.0
    }

    /// The first nine digits the verifier digits are computed from.
    pub fn base(&self) -> [u8; 9] {
        let mut base = [0u8; 9];
        base.copy_from_slice(&self.0[..9]);
        base
    }

    pub fn declared_check_digits(&self) -> CheckDigits {
        CheckDigits {
            first: self.0[9],
            second: self.0[10],
        }
    }

    pub fn is_repeated_digit(&self) -> bool {
        self.0.iter().all(|d| *d == self.0[0])
    }
}

impl Default for CandidateId {
    fn default() -> Self {
        Self([0; CPF_LENGTH])
    }
}

impl FromStr for CandidateId {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigits {
    pub first: u8,
    pub second: u8,
}

impl fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
