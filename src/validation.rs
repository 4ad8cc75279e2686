// 📋 Input Validation - CPF and amount checks
// Everything typed at a prompt passes through here before it reaches the
// domain; bad input is reported back to the operator, never propagated.

use std::fmt;

/// A CPF is exactly this many decimal digits, no separators.
pub const CPF_DIGITS: usize = 11;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CPF
// ============================================================================

/// Check that a CPF is exactly 11 ASCII digits.
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.len() != CPF_DIGITS || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError {
            field: "cpf".to_string(),
            message: format!("must be exactly {} digits, only numbers", CPF_DIGITS),
        });
    }
    Ok(())
}

/// Render a CPF as `XXX.XXX.XXX-XX`.
///
/// The input must already be validated to 11 digits (see [`validate_cpf`]).
pub fn format_cpf(cpf: &str) -> String {
    format!("{}.{}.{}-{}", &cpf[..3], &cpf[3..6], &cpf[6..9], &cpf[9..])
}

// ============================================================================
// AMOUNTS
// ============================================================================

/// Parse a currency amount typed at a prompt.
///
/// Rejects input that does not parse to a finite number. The sign is
/// checked by the account operations, not here.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError {
            field: "amount".to_string(),
            message: format!("'{}' is not a valid amount", trimmed),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
