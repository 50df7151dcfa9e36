//! Input validation helpers.
//!
//! All checks return [`TenorError::Validation`] and are meant to run before
//! any computation begins, so a failed call never leaves partial output.

use crate::error::{TenorError, TenorResult};

/// Fails unless `a` and `b` have the same length.
pub fn same_len<A, B>(name_a: &str, a: &[A], name_b: &str, b: &[B]) -> TenorResult<()> {
    if a.len() != b.len() {
        return Err(TenorError::validation(format!(
            "{name_a} and {name_b} must have the same length: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Fails if `values` is empty.
pub fn non_empty<T>(name: &str, values: &[T]) -> TenorResult<()> {
    if values.is_empty() {
        return Err(TenorError::validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Fails unless `value` is finite.
pub fn finite(name: &str, value: f64) -> TenorResult<()> {
    if !value.is_finite() {
        return Err(TenorError::validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Fails unless `value` is finite and strictly positive.
pub fn positive(name: &str, value: f64) -> TenorResult<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(TenorError::validation(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Fails unless `value` is finite and not negative.
pub fn non_negative(name: &str, value: f64) -> TenorResult<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(TenorError::validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Fails unless every element of `values` is finite.
pub fn all_finite(name: &str, values: &[f64]) -> TenorResult<()> {
    for (i, v) in values.iter().enumerate() {
        finite(&format!("{name}[{i}]"), *v)?;
    }
    Ok(())
}

/// Fails unless every element of `values` is finite and strictly positive.
pub fn all_positive(name: &str, values: &[f64]) -> TenorResult<()> {
    for (i, v) in values.iter().enumerate() {
        positive(&format!("{name}[{i}]"), *v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_same_len() {
        assert!(same_len("a", &[1.0, 2.0], "b", &[3.0, 4.0]).is_ok());
        let err = same_len("a", &[1.0], "b", &[3.0, 4.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("1 vs 2"));
    }

    #[test]
    fn test_positive() {
        assert!(positive("price", 95.0).is_ok());
        assert!(positive("price", 0.0).is_err());
        assert!(positive("price", f64::NAN).is_err());
        assert!(non_negative("coupon", 0.0).is_ok());
        assert!(non_negative("coupon", -0.01).is_err());
    }

    #[test]
    fn test_all_positive_names_index() {
        let err = all_positive("maturities", &[1.0, -2.0]).unwrap_err();
        assert!(err.to_string().contains("maturities[1]"));
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty::<f64>("rates", &[]).is_err());
        assert!(non_empty("rates", &[0.01]).is_ok());
    }
}
