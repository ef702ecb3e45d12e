use crate::utils::error::{Result, UniversityError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UniversityError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(UniversityError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UniversityError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("presentation.decorator_prefix", "Good").is_ok());
        assert!(validate_non_empty_string("presentation.decorator_prefix", "").is_err());
        assert!(validate_non_empty_string("presentation.decorator_prefix", "   ").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("grading.perfect_score", 10.0).is_ok());
        assert!(validate_finite("grading.perfect_score", f64::NAN).is_err());
        assert!(validate_finite("grading.perfect_score", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("grading.perfect_score", 10.0, 0.0, 1000.0).is_ok());
        assert!(validate_range("grading.perfect_score", -1.0, 0.0, 1000.0).is_err());
        assert!(validate_range("grading.perfect_score", 1000.5, 0.0, 1000.0).is_err());
    }
}
