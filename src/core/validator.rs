use crate::domain::model::{CandidateId, CheckDigits, WeightTable};
use crate::utils::error::{CpfError, Result};
use std::fmt;
use std::str::FromStr;

/// Validates an 11-digit CPF string.
///
/// Returns `Ok(true)` when the last two digits match the verifier digits
/// computed from the first nine, `Ok(false)` on a checksum mismatch or a
/// repeated-digit number, and `CpfError::StructuralError` when the input is
/// not exactly 11 ASCII digits.
pub fn validate(candidate: &str) -> Result<bool> {
    let id = CandidateId::parse(candidate)?;
    Ok(is_valid_candidate(&id))
}

pub fn is_valid_candidate(id: &CandidateId) -> bool {
    // 00000000000 .. 99999999999 all satisfy the checksum
    if id.is_repeated_digit() {
        tracing::debug!(cpf = %id, "rejecting repeated-digit CPF");
        return false;
    }

    let computed = compute_check_digits(&id.base());
    let declared = id.declared_check_digits();
    let valid = computed == declared;

    tracing::debug!(
        cpf = %id,
        computed = %computed,
        declared = %declared,
        valid,
        "CPF checksum evaluated"
    );

    valid
}

/// Computes both verifier digits for a nine-digit base.
pub fn compute_check_digits(base: &[u8; 9]) -> CheckDigits {
    let weights = WeightTable::CPF;
    let first = check_digit(base, &weights.first);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    let second = check_digit(&extended, &weights.second);

    CheckDigits { first, second }
}

/// Weighted sum modulo 11. Remainders 0 and 1 map to 0, anything else to
/// `11 - remainder`.
pub fn check_digit<const N: usize>(digits: &[u8; N], weights: &[u32; N]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        remainder => (11 - remainder) as u8,
    }
}

/// A CPF candidate together with its validity, computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpf {
    candidate: CandidateId,
    check_digits: CheckDigits,
    valid: bool,
}

impl Cpf {
    pub fn new(candidate: &str) -> Result<Self> {
        let id = CandidateId::parse(candidate)?;
        Ok(Self::from_candidate(id))
    }

    pub fn from_candidate(candidate: CandidateId) -> Self {
        Self {
            candidate,
            check_digits: compute_check_digits(&candidate.base()),
            valid: is_valid_candidate(&candidate),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn candidate(&self) -> CandidateId {
        self.candidate
    }

    /// The verifier digits the first nine digits call for, regardless of
    /// what the candidate declares.
    pub fn check_digits(&self) -> CheckDigits {
        self.check_digits
    }
}

impl Default for Cpf {
    fn default() -> Self {
        Self::from_candidate(CandidateId::default())
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.candidate, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_and_invalid() {
        assert!(validate("11144477735").unwrap());
        assert!(validate("52998224725").unwrap());
        assert!(validate("12345678909").unwrap());
        assert!(!validate("11122233344").unwrap());
    }

    #[test]
    fn test_compute_check_digits() {
        let digits = compute_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]);
        assert_eq!(digits, CheckDigits { first: 3, second: 5 });

        let digits = compute_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]);
        assert_eq!(digits.to_string(), "25");
    }

    #[test]
    fn test_low_remainders_map_to_zero() {
        let weights = WeightTable::CPF.first;
        // remainder 0
        assert_eq!(check_digit(&[0; 9], &weights), 0);
        // 6 * 2 = 12, remainder 1
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 6], &weights), 0);
        // 1 * 2 = 2, remainder 2
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 1], &weights), 9);
    }

    #[test]
    fn test_repeated_digits_are_invalid() {
        for digit in 0..=9 {
            let candidate = digit.to_string().repeat(11);
            assert!(!validate(&candidate).unwrap(), "{} should be invalid", candidate);
        }
    }

    #[test]
    fn test_structural_errors() {
        for candidate in ["", "1114447773", "111444777350", "111.444.777-35", "1114447773x"] {
            let err = validate(candidate).unwrap_err();
            assert!(err.is_structural(), "{} should be a structural error", candidate);
        }
    }

    #[test]
    fn test_cpf_holder_is_eager() {
        let cpf = Cpf::new("11144477735").unwrap();
        assert!(cpf.is_valid());
        assert_eq!(cpf.to_string(), "11144477735");
        assert_eq!(cpf.check_digits().to_string(), "35");

        let cpf: Cpf = "11122233344".parse().unwrap();
        assert!(!cpf.is_valid());
        assert_eq!(cpf.check_digits().to_string(), "96");

        assert!(Cpf::new("111.444.777-35").is_err());
    }

    #[test]
    fn test_cpf_default_is_all_zeros() {
        let cpf = Cpf::default();
        assert_eq!(cpf.to_string(), "00000000000");
        assert!(!cpf.is_valid());
    }
}
