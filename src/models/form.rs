// ============================================================================
// FORM PARSING - Texto libre del formulario -> valores numéricos validados
// ============================================================================

use std::str::FromStr;

use crate::error::{SyncError, SyncResult};

/// Parsea un decimal finito (rechaza "", "abc", "NaN", "inf")
pub fn parse_decimal(field: &'static str, raw: &str) -> SyncResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SyncError::validation(field, raw)),
    }
}

/// Parsea un entero (sin signo, sin decimales)
pub fn parse_integer<T: FromStr>(field: &'static str, raw: &str) -> SyncResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| SyncError::validation(field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_accept_surrounding_whitespace() {
        assert_eq!(parse_decimal("price", " 19.99 "), Ok(19.99));
    }

    #[test]
    fn non_finite_decimals_are_rejected() {
        for raw in ["", "abc", "NaN", "inf", "-infinity"] {
            assert_eq!(
                parse_decimal("price", raw),
                Err(SyncError::validation("price", raw)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn integers_reject_fractions_and_signs() {
        assert_eq!(parse_integer::<u32>("totalProducts", "3"), Ok(3));
        assert!(parse_integer::<u32>("totalProducts", "3.5").is_err());
        assert!(parse_integer::<u64>("userId", "-1").is_err());
    }
}
