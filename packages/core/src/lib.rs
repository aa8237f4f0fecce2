// Converter Core
// Conversion between English text, decimal, binary, octal and base64

#![warn(clippy::all)]

// Модули
pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod protocol;
pub mod utils;

// Re-exports для удобства
pub use api::ConverterAPI;
pub use convert::NumberKind;
pub use error::ConvertError;
