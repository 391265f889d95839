use crate::error::Result;
use crate::models::{
    Address, AlternativeProcedure, Entity, PaymentAmount, PaymentInformation, PaymentRecord,
};
use crate::structref::PaymentReference;
use crate::util::format_amount;
use crate::validation::validate;
use std::io::Write;

const HEADER: &str = "SPC\r\n0200\r\n1\r\n";
const SEP: &str = "\r\n";
const EMPTY_ENTITY: &str = "\r\n\r\n\r\n\r\n\r\n\r\n";
const END_OF_PAYMENT_DATA: &str = "EPD";

// No validation here; callers run `validate` first.
pub fn encode<W: Write>(record: &PaymentRecord, out: &mut W) -> Result<()> {
    out.write_all(HEADER.as_bytes())?;
    out.write_all(record.account.code().as_bytes())?;
    out.write_all(SEP.as_bytes())?;
    write_entity(&record.creditor, out)?;
    out.write_all(SEP.as_bytes())?;
    write_entity(&record.ultimate_creditor, out)?;
    out.write_all(SEP.as_bytes())?;
    write_amount(&record.amount, out)?;
    out.write_all(SEP.as_bytes())?;
    write_entity(&record.debtor, out)?;
    out.write_all(SEP.as_bytes())?;
    write_reference(&record.reference, out)?;
    out.write_all(SEP.as_bytes())?;
    write_information(&record.information, out)?;
    out.write_all(SEP.as_bytes())?;
    write_procedures(&record.alternative_procedures, out)?;
    log::debug!("encoded payload for account {}", record.account.code());
    Ok(())
}

pub fn payload_string(record: &PaymentRecord) -> Result<String> {
    validate(record)?;
    let mut buffer = Vec::new();
    encode(record, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn write_entity<W: Write>(entity: &Entity, out: &mut W) -> Result<()> {
    if entity.name.is_empty() {
        out.write_all(EMPTY_ENTITY.as_bytes())?;
        return Ok(());
    }
    let fields: [&str; 6] = match &entity.address {
        Some(Address::Combined(addr)) => [
            "K",
            entity.name.as_str(),
            addr.line1.as_str(),
            addr.line2.as_str(),
            "",
            "",
        ],
        Some(Address::Structured(addr)) => [
            "S",
            entity.name.as_str(),
            addr.street.as_str(),
            addr.building_number.as_str(),
            addr.postcode.as_str(),
            addr.town.as_str(),
        ],
        None => ["", entity.name.as_str(), "", "", "", ""],
    };
    out.write_all(fields.join(SEP).as_bytes())?;
    out.write_all(SEP.as_bytes())?;
    out.write_all(entity.country_code.as_bytes())?;
    Ok(())
}

pub fn write_amount<W: Write>(amount: &PaymentAmount, out: &mut W) -> Result<()> {
    if let Some(value) = amount.amount {
        out.write_all(format_amount(value).as_bytes())?;
    }
    out.write_all(SEP.as_bytes())?;
    out.write_all(amount.currency.as_bytes())?;
    Ok(())
}

pub fn write_reference<W: Write>(reference: &PaymentReference, out: &mut W) -> Result<()> {
    write!(out, "{}{}{}", reference.tag(), SEP, reference.digital_format())?;
    Ok(())
}

pub fn write_information<W: Write>(info: &PaymentInformation, out: &mut W) -> Result<()> {
    write!(
        out,
        "{}{}{}{}{}",
        info.unstructured_message,
        SEP,
        END_OF_PAYMENT_DATA,
        SEP,
        info.bill_information.encode()
    )?;
    Ok(())
}

// Always two lines; missing procedures become empty lines.
pub fn write_procedures<W: Write>(procedures: &[AlternativeProcedure], out: &mut W) -> Result<()> {
    let mut slots = ["", ""];
    for (slot, procedure) in slots.iter_mut().zip(procedures) {
        *slot = procedure.procedure.as_str();
    }
    out.write_all(slots.join(SEP).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CombinedAddress, StructuredAddress, CHF};
    use crate::structref::{CreditorReference, QrReference};
    use crate::structured::BillInformation;
    use pretty_assertions::assert_eq;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_entity_is_six_blank_lines() {
        let out = render(|buf| write_entity(&Entity::default(), buf));
        assert_eq!(out, "\r\n\r\n\r\n\r\n\r\n\r\n");
    }

    #[test]
    fn combined_address_entity() {
        let entity = Entity {
            name: "Test Name".to_string(),
            address: Some(Address::Combined(CombinedAddress {
                line1: "Address Line 1".to_string(),
                line2: "Address Line 2".to_string(),
            })),
            country_code: "CH".to_string(),
        };
        let out = render(|buf| write_entity(&entity, buf));
        assert_eq!(
            out,
            "K\r\nTest Name\r\nAddress Line 1\r\nAddress Line 2\r\n\r\n\r\nCH"
        );
    }

    #[test]
    fn structured_address_entity() {
        let entity = Entity {
            name: "Test Name".to_string(),
            address: Some(Address::Structured(StructuredAddress {
                street: "Street Name".to_string(),
                building_number: "17".to_string(),
                postcode: "1234".to_string(),
                town: "Town Name".to_string(),
            })),
            country_code: "CH".to_string(),
        };
        let out = render(|buf| write_entity(&entity, buf));
        assert_eq!(out, "S\r\nTest Name\r\nStreet Name\r\n17\r\n1234\r\nTown Name\r\nCH");
    }

    #[test]
    fn amount_is_fixed_to_two_decimals() {
        let amount = PaymentAmount {
            amount: Some(1234.5678),
            currency: CHF.to_string(),
        };
        assert_eq!(render(|buf| write_amount(&amount, buf)), "1234.57\r\nCHF");

        let blank = PaymentAmount {
            amount: None,
            currency: CHF.to_string(),
        };
        assert_eq!(render(|buf| write_amount(&blank, buf)), "\r\nCHF");
    }

    #[test]
    fn reference_records() {
        assert_eq!(
            render(|buf| write_reference(&PaymentReference::None, buf)),
            "NON\r\n"
        );
        let qr = PaymentReference::Qr(QrReference::from_str_unchecked(
            "210000000003139471430009017",
        ));
        assert_eq!(
            render(|buf| write_reference(&qr, buf)),
            "QRR\r\n210000000003139471430009017"
        );
        let scor = PaymentReference::Creditor(CreditorReference::from_str_unchecked(
            "RF8312345678912345678912",
        ));
        assert_eq!(
            render(|buf| write_reference(&scor, buf)),
            "SCOR\r\nRF8312345678912345678912"
        );
    }

    #[test]
    fn information_record() {
        let info = PaymentInformation {
            unstructured_message: "Unstructured message".to_string(),
            bill_information: BillInformation {
                customer_reference: "ref".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(
            render(|buf| write_information(&info, buf)),
            "Unstructured message\r\nEPD\r\n//S1/20/ref"
        );
    }

    #[test]
    fn procedures_always_fill_two_lines() {
        let procedure = |text: &str| AlternativeProcedure {
            label: "Label".to_string(),
            procedure: text.to_string(),
        };
        assert_eq!(render(|buf| write_procedures(&[], buf)), "\r\n");
        assert_eq!(
            render(|buf| write_procedures(&[procedure("Procedure 1")], buf)),
            "Procedure 1\r\n"
        );
        assert_eq!(
            render(|buf| write_procedures(
                &[procedure("Procedure 1"), procedure("Procedure 2")],
                buf
            )),
            "Procedure 1\r\nProcedure 2"
        );
    }
}
