// Английская запись чисел словами

use crate::error::ConvertError;

const SMALL: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Короткая шкала: SCALES[i] = 10^(3 * (i + 1))
const SCALES: [&str; 12] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// 0..=19
    Small(u128),
    /// 20, 30, ..., 90
    Tens(u128),
    Hundred,
    /// Индекс в SCALES
    Scale(usize),
}

impl Token {
    fn lookup(word: &str) -> Option<Token> {
        if word == "hundred" {
            return Some(Token::Hundred);
        }
        if let Some(n) = SMALL.iter().position(|w| *w == word) {
            return Some(Token::Small(n as u128));
        }
        if let Some(n) = TENS.iter().position(|w| !w.is_empty() && *w == word) {
            return Some(Token::Tens(n as u128 * 10));
        }
        SCALES.iter().position(|w| *w == word).map(Token::Scale)
    }
}

fn scale_value(index: usize) -> u128 {
    1000u128.pow(index as u32 + 1)
}

/// Предыдущий разобранный элемент
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Last {
    #[default]
    Start,
    Small,
    Tens,
    Hundred,
    Scale,
}

/// Накопитель модуля значения: группы до `hundred` складываются в `group`,
/// а слово-шкала переносит группу в `total`. Знак применяется в конце.
#[derive(Debug, Default)]
struct TextParser {
    total: u128,
    group: u128,
    last: Last,
    last_scale: Option<usize>,
}

impl TextParser {
    fn push(&mut self, word: &str) -> Result<(), ConvertError> {
        let token = Token::lookup(word).ok_or_else(|| ConvertError::UnknownWord(word.to_string()))?;
        let unexpected = || ConvertError::MalformedText(format!("unexpected '{}'", word));

        match token {
            Token::Small(0) => {
                return Err(ConvertError::MalformedText(
                    "'zero' cannot be combined with other words".to_string(),
                ));
            }
            Token::Small(n) => {
                let allowed = match self.last {
                    Last::Start | Last::Hundred | Last::Scale => true,
                    Last::Tens => n < 10,
                    Last::Small => false,
                };
                if !allowed {
                    return Err(unexpected());
                }
                self.group += n;
                self.last = Last::Small;
            }
            Token::Tens(n) => {
                if !matches!(self.last, Last::Start | Last::Hundred | Last::Scale) {
                    return Err(unexpected());
                }
                self.group += n;
                self.last = Last::Tens;
            }
            Token::Hundred => {
                // "fifteen hundred" допустимо, "one hundred hundred" нет
                if !matches!(self.last, Last::Small | Last::Tens) || self.group >= 100 {
                    return Err(unexpected());
                }
                self.group *= 100;
                self.last = Last::Hundred;
            }
            Token::Scale(index) => {
                if self.group == 0 {
                    return Err(ConvertError::MalformedText(format!(
                        "'{}' has no multiplier",
                        word
                    )));
                }
                if let Some(prev) = self.last_scale {
                    if index >= prev {
                        return Err(ConvertError::MalformedText(format!(
                            "'{}' cannot follow '{}'",
                            word, SCALES[prev]
                        )));
                    }
                }
                self.check_group()?;
                let part = self
                    .group
                    .checked_mul(scale_value(index))
                    .ok_or(ConvertError::Overflow)?;
                self.total = self.total.checked_add(part).ok_or(ConvertError::Overflow)?;
                self.group = 0;
                self.last = Last::Scale;
                self.last_scale = Some(index);
            }
        }

        Ok(())
    }

    /// Под шкалой группа не может занимать больше трех разрядов
    fn check_group(&self) -> Result<(), ConvertError> {
        if self.last_scale.is_some() && self.group >= 1000 {
            return Err(ConvertError::MalformedText(
                "group below a scale must be less than one thousand".to_string(),
            ));
        }
        Ok(())
    }

    fn finish(self) -> Result<u128, ConvertError> {
        self.check_group()?;
        self.total.checked_add(self.group).ok_or(ConvertError::Overflow)
    }
}

/// Разобрать английскую запись числа ("one hundred and twenty-three" -> 123).
pub fn text_to_number(text: &str) -> Result<i128, ConvertError> {
    let normalized = text.to_lowercase().replace(['-', ','], " ");
    let mut words = normalized
        .split_whitespace()
        .filter(|w| *w != "and")
        .peekable();

    if words.peek().is_none() {
        return Err(ConvertError::EmptyInput);
    }

    let negative = matches!(words.peek(), Some(&"minus") | Some(&"negative"));
    if negative {
        words.next();
    }

    let words: Vec<&str> = words.collect();
    match words.as_slice() {
        [] => {
            return Err(ConvertError::MalformedText(
                "missing number after sign".to_string(),
            ))
        }
        ["zero"] => return Ok(0),
        _ => {}
    }

    let mut parser = TextParser::default();
    for word in words {
        parser.push(word)?;
    }
    let magnitude = parser.finish()?;

    // Отрицательный диапазон на единицу шире: -i128::MIN не помещается в i128
    if negative {
        0i128
            .checked_sub_unsigned(magnitude)
            .ok_or(ConvertError::Overflow)
    } else {
        i128::try_from(magnitude).map_err(|_| ConvertError::Overflow)
    }
}

/// Запись числа 1..=999
fn group_to_text(n: usize) -> String {
    let (hundreds, rest) = (n / 100, n % 100);
    let tail = match rest {
        0 => None,
        1..=19 => Some(SMALL[rest].to_string()),
        _ => match rest % 10 {
            0 => Some(TENS[rest / 10].to_string()),
            unit => Some(format!("{}-{}", TENS[rest / 10], SMALL[unit])),
        },
    };

    match (hundreds, tail) {
        (0, Some(tail)) => tail,
        (0, None) => String::new(),
        (h, None) => format!("{} hundred", SMALL[h]),
        (h, Some(tail)) => format!("{} hundred and {}", SMALL[h], tail),
    }
}

/// Записать число словами (123 -> "one hundred and twenty-three").
pub fn number_to_text(value: i128) -> String {
    if value == 0 {
        return SMALL[0].to_string();
    }

    // Группы по три разряда, от младшей к старшей
    let mut magnitude = value.unsigned_abs();
    let mut groups = Vec::new();
    while magnitude > 0 {
        groups.push((magnitude % 1000) as usize);
        magnitude /= 1000;
    }

    let mut text = String::new();
    if value < 0 {
        text.push_str("minus ");
    }

    let mut first = true;
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !first {
            text.push_str(if index == 0 && group < 100 { " and " } else { ", " });
        }
        text.push_str(&group_to_text(group));
        if index > 0 {
            text.push(' ');
            text.push_str(SCALES[index - 1]);
        }
        first = false;
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_number_basic() {
        assert_eq!(text_to_number("zero").unwrap(), 0);
        assert_eq!(text_to_number("ten").unwrap(), 10);
        assert_eq!(text_to_number("one hundred and twenty-three").unwrap(), 123);
    }

    #[test]
    fn test_text_to_number_scales() {
        assert_eq!(text_to_number("one thousand and one").unwrap(), 1001);
        assert_eq!(
            text_to_number("Two Million, Three Hundred Thousand, Forty-Five").unwrap(),
            2_300_045
        );
        assert_eq!(text_to_number("fifteen hundred").unwrap(), 1500);
        assert_eq!(text_to_number("  ninety   nine  ").unwrap(), 99);
    }

    #[test]
    fn test_text_to_number_negative() {
        assert_eq!(text_to_number("minus five").unwrap(), -5);
        assert_eq!(text_to_number("negative twenty").unwrap(), -20);
        assert_eq!(text_to_number("minus zero").unwrap(), 0);
    }

    #[test]
    fn test_text_to_number_errors() {
        assert_eq!(text_to_number(""), Err(ConvertError::EmptyInput));
        assert_eq!(text_to_number("and"), Err(ConvertError::EmptyInput));
        assert_eq!(
            text_to_number("one zillion"),
            Err(ConvertError::UnknownWord("zillion".to_string()))
        );
        assert!(matches!(text_to_number("one two"), Err(ConvertError::MalformedText(_))));
        assert!(matches!(text_to_number("twenty thirty"), Err(ConvertError::MalformedText(_))));
        assert!(matches!(text_to_number("twenty eleven"), Err(ConvertError::MalformedText(_))));
        assert!(matches!(text_to_number("thousand"), Err(ConvertError::MalformedText(_))));
        assert!(matches!(
            text_to_number("one thousand one million"),
            Err(ConvertError::MalformedText(_))
        ));
        assert!(matches!(
            text_to_number("one thousand fifteen hundred"),
            Err(ConvertError::MalformedText(_))
        ));
        assert!(matches!(text_to_number("zero one"), Err(ConvertError::MalformedText(_))));
        assert!(matches!(text_to_number("minus"), Err(ConvertError::MalformedText(_))));
    }

    #[test]
    fn test_text_to_number_overflow() {
        assert_eq!(
            text_to_number("nine hundred undecillion"),
            Err(ConvertError::Overflow)
        );
        // помещается в u128, но не в i128 ни с каким знаком
        assert_eq!(
            text_to_number("two hundred undecillion"),
            Err(ConvertError::Overflow)
        );
        assert_eq!(
            text_to_number("minus two hundred undecillion"),
            Err(ConvertError::Overflow)
        );
    }

    #[test]
    fn test_text_to_number_signed_bounds() {
        assert_eq!(text_to_number(&number_to_text(i128::MIN)).unwrap(), i128::MIN);
        assert_eq!(text_to_number(&number_to_text(i128::MAX)).unwrap(), i128::MAX);

        // i128::MAX + 1 допустимо только со знаком минус
        let above_max = number_to_text(i128::MIN).replacen("minus ", "", 1);
        assert_eq!(text_to_number(&above_max), Err(ConvertError::Overflow));
    }

    #[test]
    fn test_number_to_text_basic() {
        assert_eq!(number_to_text(0), "zero");
        assert_eq!(number_to_text(1), "one");
        assert_eq!(number_to_text(100), "one hundred");
        assert_eq!(number_to_text(123), "one hundred and twenty-three");
        assert_eq!(number_to_text(40), "forty");
    }

    #[test]
    fn test_number_to_text_groups() {
        assert_eq!(number_to_text(1001), "one thousand and one");
        assert_eq!(number_to_text(1100), "one thousand, one hundred");
        assert_eq!(number_to_text(2_000_000), "two million");
        assert_eq!(
            number_to_text(1_234_567),
            "one million, two hundred and thirty-four thousand, five hundred and sixty-seven"
        );
        assert_eq!(number_to_text(-15), "minus fifteen");
    }

    #[test]
    fn test_text_round_trip_extremes() {
        for value in [i128::MAX, i128::MIN, i128::MIN + 1, 1_000_000_000_007, -909] {
            assert_eq!(text_to_number(&number_to_text(value)).unwrap(), value);
        }
    }
}
