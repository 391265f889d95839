use crate::error::{QrBillError, Result};
use crate::util::{group_from_left, group_from_right, mod10_recursive, mod97};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "snake_case")]
pub enum PaymentReference {
    #[default]
    None,
    Qr(QrReference),
    Creditor(CreditorReference),
}

impl PaymentReference {
    pub fn tag(&self) -> &'static str {
        match self {
            PaymentReference::None => "NON",
            PaymentReference::Qr(_) => "QRR",
            PaymentReference::Creditor(_) => "SCOR",
        }
    }

    pub fn digital_format(&self) -> &str {
        match self {
            PaymentReference::None => "",
            PaymentReference::Qr(reference) => reference.digital_format(),
            PaymentReference::Creditor(reference) => reference.digital_format(),
        }
    }

    pub fn print_format(&self) -> Option<String> {
        match self {
            PaymentReference::None => None,
            PaymentReference::Qr(reference) => Some(reference.print_format()),
            PaymentReference::Creditor(reference) => Some(reference.print_format()),
        }
    }
}

/// 27-digit Swiss QR reference, last digit a recursive mod 10 check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QrReference {
    digits: String,
}

impl QrReference {
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
        if digits.len() != 27 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(QrBillError::InvalidReference(format!(
                "QR reference must have 27 digits: {input}"
            )));
        }
        let check = mod10_recursive(&digits[..26]).map_err(QrBillError::InvalidReference)?;
        if digits[26..].parse::<u32>().ok() != Some(check) {
            return Err(QrBillError::InvalidReference(format!(
                "QR reference check digit is invalid: {input}"
            )));
        }
        Ok(Self { digits })
    }

    pub fn from_str_unchecked(input: &str) -> Self {
        match Self::parse(input) {
            Ok(reference) => reference,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn digital_format(&self) -> &str {
        &self.digits
    }

    pub fn print_format(&self) -> String {
        group_from_right(&self.digits, 5)
    }
}

/// ISO 11649 structured creditor reference (`RF..`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreditorReference {
    code: String,
}

impl CreditorReference {
    pub fn parse(input: &str) -> Result<Self> {
        let code: String = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if !code.is_ascii() {
            return Err(QrBillError::InvalidReference(format!(
                "creditor reference contains invalid characters: {input}"
            )));
        }
        if !code.starts_with("RF") || code.len() < 5 || code.len() > 25 {
            return Err(QrBillError::InvalidReference(format!(
                "creditor reference must be RF, two check digits and up to 21 characters: {input}"
            )));
        }
        if !code[2..4].chars().all(|ch| ch.is_ascii_digit())
            || !code[4..].chars().all(|ch| ch.is_ascii_alphanumeric())
        {
            return Err(QrBillError::InvalidReference(format!(
                "creditor reference contains invalid characters: {input}"
            )));
        }
        let rearranged = format!("{}{}", &code[4..], &code[..4]);
        if mod97(&rearranged).map_err(QrBillError::InvalidReference)? != 1 {
            return Err(QrBillError::InvalidReference(format!(
                "creditor reference check digits are invalid: {input}"
            )));
        }
        Ok(Self { code })
    }

    pub fn from_str_unchecked(input: &str) -> Self {
        match Self::parse(input) {
            Ok(reference) => reference,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn digital_format(&self) -> &str {
        &self.code
    }

    pub fn print_format(&self) -> String {
        group_from_left(&self.code, 4)
    }
}

impl TryFrom<String> for QrReference {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<QrReference> for String {
    fn from(value: QrReference) -> Self {
        value.digits
    }
}

impl TryFrom<String> for CreditorReference {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CreditorReference> for String {
    fn from(value: CreditorReference) -> Self {
        value.code
    }
}
