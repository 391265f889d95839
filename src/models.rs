use crate::error::{QrBillError, Result};
use crate::reference::{iban_length, is_qr_iban_prefix};
use crate::structref::PaymentReference;
use crate::structured::BillInformation;
use crate::util::{group_from_left, iban_check_digits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CHF: &str = "CHF";
pub const EUR: &str = "EUR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub account: Iban,
    pub creditor: Entity,
    /// Reserved by the standard; must stay empty.
    #[serde(default)]
    pub ultimate_creditor: Entity,
    pub amount: PaymentAmount,
    #[serde(default)]
    pub debtor: Entity,
    #[serde(default)]
    pub reference: PaymentReference,
    #[serde(default)]
    pub information: PaymentInformation,
    #[serde(default)]
    pub alternative_procedures: Vec<AlternativeProcedure>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Address {
    Combined(CombinedAddress),
    Structured(StructuredAddress),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedAddress {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub building_number: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub town: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAmount {
    /// `None` leaves the amount blank for the payer to fill in.
    #[serde(default)]
    pub amount: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentInformation {
    #[serde(default)]
    pub unstructured_message: String,
    #[serde(default)]
    pub bill_information: BillInformation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeProcedure {
    pub label: String,
    pub procedure: String,
}

impl PaymentRecord {
    pub fn new(account: Iban, creditor: Entity, amount: PaymentAmount) -> Self {
        Self {
            account,
            creditor,
            ultimate_creditor: Entity::default(),
            amount,
            debtor: Entity::default(),
            reference: PaymentReference::default(),
            information: PaymentInformation::default(),
            alternative_procedures: Vec::new(),
        }
    }
}

impl Entity {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.address.is_none() && self.country_code.is_empty()
    }

    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.name.is_empty() {
            return lines;
        }
        lines.push(self.name.clone());
        match &self.address {
            Some(Address::Combined(addr)) => {
                if !addr.line1.is_empty() {
                    lines.push(addr.line1.clone());
                }
                lines.push(addr.line2.clone());
            }
            Some(Address::Structured(addr)) => {
                if !addr.street.is_empty() {
                    let mut line = addr.street.clone();
                    if !addr.building_number.is_empty() {
                        line.push(' ');
                        line.push_str(&addr.building_number);
                    }
                    lines.push(line);
                }
                lines.push(format!("{} {}", addr.postcode, addr.town));
            }
            None => {}
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban {
    code: String,
}

impl Iban {
    pub fn parse(input: &str) -> Result<Self> {
        let code: String = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if code.len() < 5 {
            return Err(QrBillError::InvalidAccount(format!("IBAN is too short: {input}")));
        }
        if !code.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(QrBillError::InvalidAccount(format!(
                "IBAN must be alphanumeric: {input}"
            )));
        }
        let country = &code[0..2];
        if !country.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(QrBillError::InvalidAccount(format!(
                "IBAN must start with a country code: {input}"
            )));
        }
        match iban_length(country) {
            Some(expected) if expected == code.len() => {}
            Some(_) => {
                return Err(QrBillError::InvalidAccount(format!(
                    "IBAN length does not match country specification: {input}"
                )))
            }
            None => {
                return Err(QrBillError::InvalidAccount(format!(
                    "IBAN country not supported: {input}"
                )))
            }
        }
        let expected = iban_check_digits(country, &code[4..]).map_err(QrBillError::InvalidAccount)?;
        if expected != code[2..4] {
            return Err(QrBillError::InvalidAccount(format!(
                "IBAN check digits are invalid: {input}"
            )));
        }
        Ok(Self { code })
    }

    /// Panics on malformed input; run-time data goes through [`Iban::parse`].
    pub fn from_str_unchecked(input: &str) -> Self {
        match Self::parse(input) {
            Ok(iban) => iban,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn print_code(&self) -> String {
        group_from_left(&self.code, 4)
    }

    pub fn country_code(&self) -> &str {
        &self.code[0..2]
    }

    pub fn bban(&self) -> &str {
        &self.code[4..]
    }

    // QR-IBANs carry an institution id of 30000..31999.
    pub fn is_qr_iban(&self) -> bool {
        is_qr_iban_prefix(&self.bban()[0..2])
    }
}

impl FromStr for Iban {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(value: Iban) -> Self {
        value.code
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_printed_iban() {
        let iban = Iban::parse("CH56 0483 5012 3456 7800 9").unwrap();
        assert_eq!(iban.code(), "CH5604835012345678009");
        assert_eq!(iban.print_code(), "CH56 0483 5012 3456 7800 9");
        assert_eq!(iban.country_code(), "CH");
        assert_eq!(iban.bban(), "04835012345678009");
        assert!(!iban.is_qr_iban());
    }

    #[test]
    fn detects_qr_iban() {
        assert!(Iban::from_str_unchecked("CH4431999123000889012").is_qr_iban());
        assert!(!Iban::from_str_unchecked("CH5800791123000889012").is_qr_iban());
    }

    #[test]
    fn rejects_malformed_iban() {
        assert!(Iban::parse("CH5604835012345678008").is_err());
        assert!(Iban::parse("CH560483501234567800").is_err());
        assert!(Iban::parse("XX5604835012345678009").is_err());
        assert!(Iban::parse("CH56-0483").is_err());
        assert!(Iban::parse("").is_err());
    }

    #[test]
    #[should_panic]
    fn unchecked_constructor_panics() {
        Iban::from_str_unchecked("not an iban");
    }

    #[test]
    fn structured_entity_lines() {
        let mut entity = Entity {
            name: "Pia-Maria Rutschmann-Schnyder".to_string(),
            address: Some(Address::Structured(StructuredAddress {
                street: "Grosse Marktgasse".to_string(),
                building_number: "28".to_string(),
                postcode: "9400".to_string(),
                town: "Rorschach".to_string(),
            })),
            country_code: "CH".to_string(),
        };
        assert_eq!(
            entity.to_lines(),
            vec!["Pia-Maria Rutschmann-Schnyder", "Grosse Marktgasse 28", "9400 Rorschach"]
        );

        if let Some(Address::Structured(addr)) = entity.address.as_mut() {
            addr.building_number.clear();
        }
        assert_eq!(entity.to_lines()[1], "Grosse Marktgasse");

        if let Some(Address::Structured(addr)) = entity.address.as_mut() {
            addr.street.clear();
        }
        assert_eq!(
            entity.to_lines(),
            vec!["Pia-Maria Rutschmann-Schnyder", "9400 Rorschach"]
        );
    }

    #[test]
    fn combined_entity_lines() {
        let entity = Entity {
            name: "Pia-Maria Rutschmann-Schnyder".to_string(),
            address: Some(Address::Combined(CombinedAddress {
                line1: String::new(),
                line2: "9400 Rorschach".to_string(),
            })),
            country_code: String::new(),
        };
        assert_eq!(
            entity.to_lines(),
            vec!["Pia-Maria Rutschmann-Schnyder", "9400 Rorschach"]
        );
        assert!(Entity::default().to_lines().is_empty());
    }

    #[test]
    fn deserializes_record_from_json() {
        let json = r#"{
            "account": "CH58 0079 1123 0008 8901 2",
            "creditor": {
                "name": "Robert Schneider AG",
                "address": {"type": "structured", "street": "Rue du Lac", "building_number": "1268", "postcode": "2501", "town": "Biel"},
                "country_code": "CH"
            },
            "amount": {"amount": 3949.75, "currency": "CHF"}
        }"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.account.code(), "CH5800791123000889012");
        assert!(record.debtor.is_empty());
        assert_eq!(record.reference, PaymentReference::None);

        let bad = json.replace("CH58 0079", "CH59 0079");
        assert!(serde_json::from_str::<PaymentRecord>(&bad).is_err());
    }
}
