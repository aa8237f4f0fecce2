// Публичный API конвертера
// Проверка типов, разбор входа и форматирование результата

pub mod http;

use crate::config::Config;
use crate::protocol::messages::{ConvertRequest, ConvertResponse};
use crate::protocol::validation::{validate_input_length, validate_input_type, validate_output_type};
use crate::utils::error::Result;
use tracing::debug;

/// Главный API конвертера
#[derive(Debug, Clone)]
pub struct ConverterAPI {
    config: Config,
}

impl ConverterAPI {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Выполнить конвертацию
    ///
    /// # Errors
    ///
    /// - Недопустимый `inputType` или `outputType`
    /// - Слишком длинное входное значение
    /// - Ошибки разбора или форматирования
    pub fn convert(&self, request: &ConvertRequest) -> Result<ConvertResponse> {
        let from = validate_input_type(request.input_type.as_deref().unwrap_or_default())?;
        let to = validate_output_type(request.output_type.as_deref().unwrap_or_default())?;

        let input = request.input.as_text();
        validate_input_length(&input, &self.config)?;

        let value = from.parse(&input)?;

        debug!(
            target: "converter::api",
            from = %from,
            to = %to,
            "Parsed input into intermediate value"
        );

        let result = to.format(value)?;

        Ok(ConvertResponse {
            result,
            input_type: from.to_string(),
            output_type: to.to_string(),
        })
    }
}

impl Default for ConverterAPI {
    fn default() -> Self {
        Self::new(Config::global().clone())
    }
}
