// Base64 утилиты

use crate::error::ConvertError;
use base64::{engine::general_purpose, Engine};

pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode(data: &str) -> Result<Vec<u8>, ConvertError> {
    Ok(general_purpose::STANDARD.decode(data)?)
}
