use crate::charset::validate_character_set;
use crate::error::{QrBillError, Result};
use crate::models::{
    Address, AlternativeProcedure, CombinedAddress, Entity, Iban, PaymentAmount,
    PaymentInformation, PaymentRecord, StructuredAddress,
};
use crate::reference::{is_account_country, is_iso_country, is_supported_currency};
use crate::structref::PaymentReference;
use crate::util::format_amount;

const MAX_NAME: usize = 70;
const MAX_ADDRESS_LINE: usize = 70;
const MAX_STREET: usize = 70;
const MAX_BUILDING_NUMBER: usize = 16;
const MAX_POSTCODE: usize = 16;
const MAX_TOWN: usize = 35;
const MAX_AMOUNT_CHARS: usize = 12;
const MAX_INFORMATION: usize = 140;
const MAX_PROCEDURES: usize = 2;
const MAX_PROCEDURE: usize = 100;

pub fn validate(record: &PaymentRecord) -> Result<()> {
    let result = validate_inner(record);
    if let Err(err) = &result {
        log::debug!("payment record rejected: {}", err);
    }
    result
}

fn validate_inner(record: &PaymentRecord) -> Result<()> {
    validate_account(&record.account)?;
    validate_entity(&record.creditor)?;
    validate_entity(&record.ultimate_creditor)?;
    validate_amount(&record.amount)?;
    validate_entity(&record.debtor)?;
    validate_information(&record.information)?;
    validate_procedures(&record.alternative_procedures)?;

    if record.creditor.name.is_empty() {
        return Err(QrBillError::MissingCreditor);
    }
    if !record.ultimate_creditor.name.is_empty() {
        return Err(QrBillError::UltimateCreditorNotSupported);
    }
    validate_reference_for_account(&record.account, &record.reference)
}

pub fn validate_account(account: &Iban) -> Result<()> {
    if !is_account_country(account.country_code()) {
        return Err(QrBillError::InvalidAccount(format!(
            "only CH and LI accounts allowed: {}",
            account.print_code()
        )));
    }
    Ok(())
}

pub fn validate_reference_for_account(account: &Iban, reference: &PaymentReference) -> Result<()> {
    let qr_reference = matches!(reference, PaymentReference::Qr(_));
    if account.is_qr_iban() && !qr_reference {
        return Err(QrBillError::QrReferenceRequired {
            account: account.print_code(),
        });
    }
    if !account.is_qr_iban() && qr_reference {
        return Err(QrBillError::QrReferenceNotAllowed {
            account: account.print_code(),
        });
    }
    Ok(())
}

pub fn validate_entity(entity: &Entity) -> Result<()> {
    if entity.is_empty() {
        return Ok(());
    }
    if entity.name.is_empty() {
        return Err(QrBillError::MissingField { field: "name" });
    }
    check_length("name", &entity.name, MAX_NAME)?;
    validate_character_set(&entity.name)?;

    if entity.country_code.is_empty() {
        return Err(QrBillError::MissingField {
            field: "country code",
        });
    }
    if entity.country_code.chars().count() != 2 {
        return Err(QrBillError::InvalidField {
            field: "country code",
            reason: format!("should be given as two-letter code: {}", entity.country_code),
        });
    }
    if !is_iso_country(&entity.country_code) {
        return Err(QrBillError::InvalidField {
            field: "country code",
            reason: format!("unknown code: {}", entity.country_code),
        });
    }

    match &entity.address {
        Some(Address::Combined(addr)) => validate_combined_address(addr),
        Some(Address::Structured(addr)) => validate_structured_address(addr),
        None => Err(QrBillError::UnsupportedAddress {
            name: entity.name.clone(),
        }),
    }
}

pub fn validate_combined_address(addr: &CombinedAddress) -> Result<()> {
    if addr.line2.is_empty() {
        return Err(QrBillError::MissingField {
            field: "address line 2",
        });
    }
    validate_character_set(&addr.line1)?;
    validate_character_set(&addr.line2)?;
    check_length("address line", &addr.line1, MAX_ADDRESS_LINE)?;
    check_length("address line", &addr.line2, MAX_ADDRESS_LINE)
}

pub fn validate_structured_address(addr: &StructuredAddress) -> Result<()> {
    if addr.postcode.is_empty() {
        return Err(QrBillError::MissingField { field: "post code" });
    }
    if addr.town.is_empty() {
        return Err(QrBillError::MissingField { field: "town" });
    }
    validate_character_set(&addr.street)?;
    validate_character_set(&addr.building_number)?;
    validate_character_set(&addr.postcode)?;
    validate_character_set(&addr.town)?;
    check_length("street name", &addr.street, MAX_STREET)?;
    check_length("building number", &addr.building_number, MAX_BUILDING_NUMBER)?;
    check_length("post code", &addr.postcode, MAX_POSTCODE)?;
    check_length("town name", &addr.town, MAX_TOWN)
}

pub fn validate_amount(amount: &PaymentAmount) -> Result<()> {
    if !is_supported_currency(&amount.currency) {
        return Err(QrBillError::InvalidField {
            field: "currency",
            reason: format!("must be CHF or EUR: {}", amount.currency),
        });
    }
    if let Some(value) = amount.amount {
        if !value.is_finite() {
            return Err(QrBillError::InvalidField {
                field: "amount",
                reason: format!("not a number: {value}"),
            });
        }
        if value < 0.0 {
            return Err(QrBillError::Negative {
                field: "amount",
                value,
            });
        }
        let rendered = format_amount(value);
        if rendered.len() > MAX_AMOUNT_CHARS {
            return Err(QrBillError::TooLong {
                field: "amount",
                max: MAX_AMOUNT_CHARS,
                value: rendered,
            });
        }
    }
    Ok(())
}

pub fn validate_information(info: &PaymentInformation) -> Result<()> {
    validate_character_set(&info.unstructured_message)?;
    info.bill_information.validate()?;
    let combined = format!("{}{}", info.unstructured_message, info.bill_information.encode());
    check_length("combined information", &combined, MAX_INFORMATION)
}

pub fn validate_procedures(procedures: &[AlternativeProcedure]) -> Result<()> {
    if procedures.len() > MAX_PROCEDURES {
        return Err(QrBillError::TooManyProcedures {
            count: procedures.len(),
        });
    }
    for procedure in procedures {
        validate_character_set(&procedure.label)?;
        validate_character_set(&procedure.procedure)?;
        if procedure.label.is_empty() {
            return Err(QrBillError::MissingField {
                field: "procedure label",
            });
        }
        if procedure.procedure.is_empty() {
            return Err(QrBillError::MissingField { field: "procedure" });
        }
        check_length("procedure", &procedure.procedure, MAX_PROCEDURE)?;
    }
    Ok(())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(QrBillError::TooLong {
            field,
            max,
            value: value.to_string(),
        });
    }
    Ok(())
}
