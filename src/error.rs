use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrBillError {
    #[error("character {ch:?} (U+{code:04X}) not allowed in string: {text}")]
    InvalidCharacter { ch: char, code: u32, text: String },

    #[error("{field} must be specified")]
    MissingField { field: &'static str },

    #[error("maximum {field} length is {max} characters: {value}")]
    TooLong {
        field: &'static str,
        max: usize,
        value: String,
    },

    #[error("{field} may not be negative: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("end date {end} must come after start date {start}")]
    DateOrder { start: String, end: String },

    #[error("unsupported address type for name: {name}")]
    UnsupportedAddress { name: String },

    #[error("no creditor name specified")]
    MissingCreditor,

    #[error("ultimate creditor is currently not supported")]
    UltimateCreditorNotSupported,

    #[error("QR reference number required for QR-IBAN: {account}")]
    QrReferenceRequired { account: String },

    #[error("QR reference not allowed for IBAN: {account}")]
    QrReferenceNotAllowed { account: String },

    #[error("maximum two alternative procedures allowed, got {count}")]
    TooManyProcedures { count: usize },

    #[error("invalid account: {0}")]
    InvalidAccount(String),

    #[error("invalid reference: {0}")]
    InvalidReference(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("text height {height:.2} exceeds available height {max_height:.2}")]
    TextTooTall { height: f64, max_height: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QrBillError>;
