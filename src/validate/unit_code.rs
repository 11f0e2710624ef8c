use crate::errors::{BillingError, Result};

/// Normalize a unit code to canonical `{1-4 digits}{A-G}` form, e.g. "10A".
///
/// Whitespace and dots are dropped and the letter is uppercased, so
/// "10a", "10 A" and "10.a" all normalize to "10A". Anything else fails with
/// the user-facing form error.
pub fn normalize_unit_code(input: &str) -> Result<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    let rest = &cleaned[digits.len()..];

    let letter = match rest.chars().next() {
        Some(c) if rest.chars().count() == 1 && c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(invalid(input)),
    };

    if digits.is_empty() || digits.len() > 4 || !('A'..='G').contains(&letter) {
        return Err(invalid(input));
    }

    Ok(format!("{digits}{letter}"))
}

/// syntax check variant that never fails
pub fn is_valid_unit_code(code: &str) -> bool {
    normalize_unit_code(code).is_ok()
}

fn invalid(input: &str) -> BillingError {
    BillingError::InvalidUnitCode {
        code: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_variants() {
        assert_eq!(normalize_unit_code("10a").unwrap(), "10A");
        assert_eq!(normalize_unit_code("10 A").unwrap(), "10A");
        assert_eq!(normalize_unit_code("10.a").unwrap(), "10A");
        assert_eq!(normalize_unit_code("  10A  ").unwrap(), "10A");
        assert_eq!(normalize_unit_code("1b").unwrap(), "1B");
        assert_eq!(normalize_unit_code("1234g").unwrap(), "1234G");
    }

    #[test]
    fn test_already_normalized_is_stable() {
        let once = normalize_unit_code("10a").unwrap();
        assert_eq!(normalize_unit_code(&once).unwrap(), once);
    }

    #[test]
    fn test_rejections() {
        for bad in ["", "A", "10", "10H", "10h", "12345A", "10AB", "A10", "1 0 A B"] {
            assert!(normalize_unit_code(bad).is_err(), "{:?} passed", bad);
        }
    }

    #[test]
    fn test_error_carries_original_input() {
        let err = normalize_unit_code("99Z").unwrap_err();
        assert!(matches!(err, BillingError::InvalidUnitCode { ref code } if code == "99Z"));
        // user-facing portuguese message for the form layer
        assert!(err.to_string().contains("código de unidade inválido"));
    }

    #[test]
    fn test_is_valid_unit_code_never_fails() {
        assert!(is_valid_unit_code("10a"));
        assert!(!is_valid_unit_code("banana"));
        assert!(!is_valid_unit_code(""));
    }
}
