// Конвертация между представлениями числа
// Любой вход приводится к промежуточному i128, затем форматируется в выходной тип

pub mod base64_le;
pub mod radix;
pub mod text;

use crate::error::ConvertError;
use radix::Radix;
use std::fmt;
use std::str::FromStr;

pub use base64_le::{base64_to_number, number_to_base64};
pub use radix::{format_radix, parse_radix};
pub use text::{number_to_text, text_to_number};

/// Поддерживаемый тип представления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Text,
    Decimal,
    Binary,
    Octal,
    Base64,
}

impl NumberKind {
    /// Допустимые значения `inputType` / `outputType`
    pub const ALL: [NumberKind; 5] = [
        NumberKind::Text,
        NumberKind::Decimal,
        NumberKind::Binary,
        NumberKind::Octal,
        NumberKind::Base64,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::Text => "text",
            NumberKind::Decimal => "decimal",
            NumberKind::Binary => "binary",
            NumberKind::Octal => "octal",
            NumberKind::Base64 => "base64",
        }
    }

    /// Разобрать входное значение этого типа
    pub fn parse(self, input: &str) -> Result<i128, ConvertError> {
        match self {
            NumberKind::Text => text_to_number(input),
            NumberKind::Decimal => parse_radix(input, Radix::Decimal),
            NumberKind::Binary => parse_radix(input, Radix::Binary),
            NumberKind::Octal => parse_radix(input, Radix::Octal),
            NumberKind::Base64 => base64_to_number(input),
        }
    }

    /// Отформатировать число в этот тип
    pub fn format(self, value: i128) -> Result<String, ConvertError> {
        match self {
            NumberKind::Text => Ok(number_to_text(value)),
            NumberKind::Decimal => Ok(format_radix(value, Radix::Decimal)),
            NumberKind::Binary => Ok(format_radix(value, Radix::Binary)),
            NumberKind::Octal => Ok(format_radix(value, Radix::Octal)),
            NumberKind::Base64 => number_to_base64(value),
        }
    }
}

impl FromStr for NumberKind {
    type Err = ConvertError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        NumberKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ConvertError::UnknownKind(name.to_string()))
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Перевести значение из одного представления в другое
pub fn convert_value(input: &str, from: NumberKind, to: NumberKind) -> Result<String, ConvertError> {
    let value = from.parse(input)?;
    to.format(value)
}
