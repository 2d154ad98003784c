use crate::utils::error::{Result, SamplerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

/// The range generator itself never checks its increment; a non-positive one
/// would loop forever, so it is rejected here before a pipeline is built.
pub fn validate_positive_increment(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(SamplerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Increment must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ascending_bounds(start_field: &str, start: f64, stop: f64) -> Result<()> {
    validate_finite(start_field, start)?;
    validate_finite("stop", stop)?;
    if start >= stop {
        return Err(SamplerError::InvalidConfigValueError {
            field: start_field.to_string(),
            value: start.to_string(),
            reason: format!("Start must be strictly less than stop ({})", stop),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_increment() {
        assert!(validate_positive_increment("increment", 1.0).is_ok());
        assert!(validate_positive_increment("increment", 0.1).is_ok());
        assert!(validate_positive_increment("increment", 0.0).is_err());
        assert!(validate_positive_increment("increment", -0.5).is_err());
        assert!(validate_positive_increment("increment", f64::NAN).is_err());
        assert!(validate_positive_increment("increment", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_ascending_bounds() {
        assert!(validate_ascending_bounds("start", -1.0, 1.0001).is_ok());
        assert!(validate_ascending_bounds("start", 1.0, 1.0).is_err());
        assert!(validate_ascending_bounds("start", 2.0, 1.0).is_err());
        assert!(validate_ascending_bounds("start", f64::NAN, 1.0).is_err());
    }
}
