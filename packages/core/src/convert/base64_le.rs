// Base64 <-> число (little-endian порядок байт)

use crate::error::ConvertError;
use crate::utils::b64;

/// Ширина промежуточного числа в байтах
const VALUE_WIDTH: usize = std::mem::size_of::<u128>();

/// Длина без старших нулевых байт (в little-endian они в конце)
fn significant_len(bytes: &[u8]) -> usize {
    bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1)
}

/// Декодировать base64 и прочитать байты как беззнаковое little-endian число.
///
/// Пустая строка декодируется в 0.
pub fn base64_to_number(input: &str) -> Result<i128, ConvertError> {
    let bytes = b64::decode(input.trim())?;
    let len = significant_len(&bytes);
    if len > VALUE_WIDTH {
        return Err(ConvertError::Overflow);
    }

    let mut buf = [0u8; VALUE_WIDTH];
    buf[..len].copy_from_slice(&bytes[..len]);
    i128::try_from(u128::from_le_bytes(buf)).map_err(|_| ConvertError::Overflow)
}

/// Закодировать неотрицательное число минимальным количеством
/// little-endian байт. Ноль дает пустую строку.
pub fn number_to_base64(value: i128) -> Result<String, ConvertError> {
    let unsigned = u128::try_from(value).map_err(|_| ConvertError::NegativeValue)?;
    let bytes = unsigned.to_le_bytes();
    Ok(b64::encode(&bytes[..significant_len(&bytes)]))
}
