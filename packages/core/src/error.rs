use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Unknown number type: {0}")]
    UnknownKind(String),
    #[error("Input is empty")]
    EmptyInput,
    #[error("Unknown number word: {0}")]
    UnknownWord(String),
    #[error("Malformed number text: {0}")]
    MalformedText(String),
    #[error("Invalid {kind} number: {input}")]
    InvalidNumber { kind: &'static str, input: String },
    #[error("Invalid base64 input: {0}")]
    InvalidBase64(String),
    #[error("Negative values cannot be encoded as base64")]
    NegativeValue,
    #[error("Number is too large")]
    Overflow,
}

impl From<base64::DecodeError> for ConvertError {
    fn from(err: base64::DecodeError) -> Self {
        ConvertError::InvalidBase64(err.to_string())
    }
}
