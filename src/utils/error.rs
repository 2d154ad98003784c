use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SamplerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SamplerError::IoError(_) => ErrorCategory::Io,
            SamplerError::TomlError(_) | SamplerError::ConfigError { .. } => ErrorCategory::Config,
            SamplerError::InvalidConfigValueError { .. }
            | SamplerError::MissingConfigError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SamplerError::IoError(_) => ErrorSeverity::Critical,
            SamplerError::TomlError(_) => ErrorSeverity::High,
            SamplerError::ConfigError { .. }
            | SamplerError::InvalidConfigValueError { .. }
            | SamplerError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SamplerError::IoError(_) => {
                "Check that the output path exists, is writable, and has free disk space"
                    .to_string()
            }
            SamplerError::TomlError(_) => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            SamplerError::ConfigError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            SamplerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and retry", field)
            }
            SamplerError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SamplerError::IoError(e) => format!("Could not write the sample file: {}", e),
            SamplerError::TomlError(e) => format!("Could not read the configuration file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SamplerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_critical() {
        let err: SamplerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_invalid_value_suggestion_names_field() {
        let err = SamplerError::InvalidConfigValueError {
            field: "increment".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.recovery_suggestion().contains("increment"));
    }
}
