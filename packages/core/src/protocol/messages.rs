// Типы сообщений HTTP API
// JSON тела запросов и ответов /api/convert

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Входное значение: строка или число JSON
///
/// Число хранится как `serde_json::Number`, поэтому весь диапазон i64/u64
/// доходит до разбора, а не отбрасывается десериализатором.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Text(String),
    Number(serde_json::Number),
}

impl InputValue {
    /// Строковое представление (целое число - в десятичной записи)
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            InputValue::Text(text) => Cow::Borrowed(text),
            InputValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        InputValue::Text(text.to_string())
    }
}

/// Запрос на конвертацию
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Исходное значение
    pub input: InputValue,
    /// Тип исходного значения ("text", "decimal", "binary", "octal", "base64")
    /// Отсутствующее или null поле отклоняется валидацией, а не десериализатором
    #[serde(default)]
    pub input_type: Option<String>,
    /// Требуемый тип результата
    #[serde(default)]
    pub output_type: Option<String>,
}

/// Успешный результат конвертации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub result: String,
    pub input_type: String,
    pub output_type: String,
}

/// Ошибка (тело ответа 400)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Список допустимых типов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypesResponse {
    pub types: Vec<String>,
}
