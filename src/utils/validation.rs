use crate::utils::error::{CpfError, Result};

pub const CPF_LENGTH: usize = 11;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks the shape of a CPF candidate: exactly 11 characters, all ASCII
/// decimal digits. Punctuated forms such as `111.444.777-35` are rejected.
pub fn validate_cpf_shape(candidate: &str) -> Result<()> {
    let length = candidate.chars().count();
    if length != CPF_LENGTH {
        return Err(CpfError::structural(
            candidate,
            format!("expected {} characters, got {}", CPF_LENGTH, length),
        ));
    }

    if let Some((position, found)) = candidate
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(CpfError::structural(
            candidate,
            format!("non-digit character {:?} at position {}", found, position),
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CpfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CpfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
