// Десятичная, двоичная и восьмеричная запись

use crate::error::ConvertError;

/// Основание системы счисления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
        }
    }

    fn strip_prefix(self, digits: &str) -> &str {
        let prefixes: &[&str] = match self {
            Radix::Binary => &["0b", "0B"],
            Radix::Octal => &["0o", "0O"],
            Radix::Decimal => &[],
        };
        prefixes
            .iter()
            .find_map(|p| digits.strip_prefix(*p))
            .unwrap_or(digits)
    }
}

/// Разобрать число в заданной системе счисления.
///
/// Допускаются пробелы по краям, знак, префикс `0b`/`0o` и `_` между цифрами.
pub fn parse_radix(input: &str, radix: Radix) -> Result<i128, ConvertError> {
    let invalid = || ConvertError::InvalidNumber {
        kind: radix.name(),
        input: input.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = radix.strip_prefix(unsigned);

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(invalid());
    }

    let base = i128::from(radix.base());
    let mut value: i128 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = i128::from(c.to_digit(radix.base()).ok_or_else(invalid)?);
        // Отрицательные накапливаем вычитанием, чтобы i128::MIN тоже помещался
        value = value
            .checked_mul(base)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
            .ok_or(ConvertError::Overflow)?;
    }

    Ok(value)
}

/// Форматировать число без префикса, строчными цифрами
pub fn format_radix(value: i128, radix: Radix) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    match radix {
        Radix::Binary => format!("{sign}{magnitude:b}"),
        Radix::Octal => format!("{sign}{magnitude:o}"),
        Radix::Decimal => format!("{sign}{magnitude}"),
    }
}
