// Валидация входящих запросов

use crate::config::Config;
use crate::convert::NumberKind;
use crate::utils::error::{Result, ServiceError};

/// Валидация `inputType`
pub fn validate_input_type(name: &str) -> Result<NumberKind> {
    name.parse::<NumberKind>()
        .map_err(|_| ServiceError::InvalidInputType(name.to_string()))
}

/// Валидация `outputType`
pub fn validate_output_type(name: &str) -> Result<NumberKind> {
    name.parse::<NumberKind>()
        .map_err(|_| ServiceError::InvalidOutputType(name.to_string()))
}

/// Валидация длины входного значения
pub fn validate_input_length(input: &str, config: &Config) -> Result<()> {
    if input.chars().count() > config.max_input_length {
        return Err(ServiceError::InputTooLong {
            max: config.max_input_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_types() {
        assert_eq!(validate_input_type("base64").unwrap(), NumberKind::Base64);
        assert_eq!(validate_output_type("text").unwrap(), NumberKind::Text);
        assert_eq!(
            validate_input_type("hex"),
            Err(ServiceError::InvalidInputType("hex".to_string()))
        );
        assert_eq!(
            validate_output_type(""),
            Err(ServiceError::InvalidOutputType(String::new()))
        );
    }

    #[test]
    fn test_validate_input_length() {
        let config = Config {
            max_input_length: 4,
            ..Config::default()
        };
        assert!(validate_input_length("1010", &config).is_ok());
        assert_eq!(
            validate_input_length("10101", &config),
            Err(ServiceError::InputTooLong { max: 4 })
        );
    }
}
