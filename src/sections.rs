use crate::error::{QrBillError, Result};
use crate::languages::{check_language, heading, Heading, Language};
use crate::layout::{
    reflow_at_space, shorten_to_width, width_in_font_units, Font, GlyphWidths, PT_PER_CM,
};
use crate::models::PaymentRecord;
use crate::util::format_amount_grouped;
use crate::validation::validate;
use serde::Serialize;

const PROCEDURE_BLOCK_WIDTH_CM: f64 = 13.8;
const PROCEDURE_FONT_SIZE_PT: f64 = 7.0;
const PARAGRAPH_GAP_PT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSection {
    pub payment_part: String,
    pub receipt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountSection {
    pub currency_heading: String,
    pub currency_value: String,
    pub amount_heading: String,
    /// Empty when the payer fills in the amount.
    pub amount_value: String,
}

/// A heading followed by text lines. No lines means the renderer draws a
/// blank box to be filled in by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub heading: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InformationPart {
    #[default]
    PaymentPart,
    ReceiptPart,
}

impl InformationPart {
    pub fn text_width(self) -> f64 {
        match self {
            InformationPart::PaymentPart => width_in_font_units(8.5, 10.0),
            InformationPart::ReceiptPart => width_in_font_units(5.2, 8.0),
        }
    }

    pub fn layout_options(self) -> LayoutOptions {
        match self {
            InformationPart::PaymentPart => LayoutOptions::payment_part(),
            InformationPart::ReceiptPart => LayoutOptions::receipt(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureLine {
    pub label: String,
    pub procedure: String,
}

// All values in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub leading: f64,
    pub max_height: f64,
    pub box_height: f64,
}

impl LayoutOptions {
    pub fn receipt() -> Self {
        Self {
            leading: 9.0,
            max_height: 5.6 * PT_PER_CM,
            box_height: 2.0 * PT_PER_CM,
        }
    }

    pub fn payment_part() -> Self {
        Self {
            leading: 11.0,
            max_height: 8.5 * PT_PER_CM,
            box_height: 2.5 * PT_PER_CM,
        }
    }
}

fn prepare(record: &PaymentRecord, language: &str) -> Result<Language> {
    validate(record)?;
    check_language(language)
}

pub fn title_section(record: &PaymentRecord, language: &str) -> Result<TitleSection> {
    let language = prepare(record, language)?;
    Ok(TitleSection {
        payment_part: heading(Heading::PaymentPart, language).to_string(),
        receipt: heading(Heading::Receipt, language).to_string(),
    })
}

pub fn amount_section(record: &PaymentRecord, language: &str) -> Result<AmountSection> {
    let language = prepare(record, language)?;
    Ok(AmountSection {
        currency_heading: heading(Heading::Currency, language).to_string(),
        currency_value: record.amount.currency.clone(),
        amount_heading: heading(Heading::Amount, language).to_string(),
        amount_value: record
            .amount
            .amount
            .map(format_amount_grouped)
            .unwrap_or_default(),
    })
}

/// `max_width` is in units of the text font size.
pub fn information_section(
    record: &PaymentRecord,
    language: &str,
    max_width: f64,
    part: InformationPart,
) -> Result<Vec<Paragraph>> {
    let language = prepare(record, language)?;
    let font = Font::Helvetica;
    let paragraph = |id: Heading, lines: Vec<String>| Paragraph {
        heading: heading(id, language).to_string(),
        lines: reflow_at_space(&lines, max_width, &font),
    };

    let mut payable_to = vec![record.account.print_code()];
    payable_to.extend(record.creditor.to_lines());
    let mut paragraphs = vec![paragraph(Heading::AccountPayableTo, payable_to)];

    if let Some(reference) = record.reference.print_format() {
        paragraphs.push(paragraph(Heading::Reference, vec![reference]));
    }

    if part == InformationPart::PaymentPart {
        let mut lines = Vec::new();
        let message = &record.information.unstructured_message;
        if !message.is_empty() {
            lines.push(message.clone());
        }
        let structured = record.information.bill_information.encode();
        if !structured.is_empty() {
            lines.push(structured);
        }
        if !lines.is_empty() {
            paragraphs.push(paragraph(Heading::AdditionalInformation, lines));
        }
    }

    let debtor = record.debtor.to_lines();
    if debtor.is_empty() {
        paragraphs.push(Paragraph {
            heading: heading(Heading::PayableByNameAddress, language).to_string(),
            lines: Vec::new(),
        });
    } else {
        paragraphs.push(paragraph(Heading::PayableBy, debtor));
    }
    log::debug!(
        "laid out {} information paragraphs ({part:?}, {language})",
        paragraphs.len()
    );
    Ok(paragraphs)
}

pub fn alternative_procedure_lines(record: &PaymentRecord) -> Result<Vec<ProcedureLine>> {
    validate(record)?;
    let block_width = PROCEDURE_BLOCK_WIDTH_CM * PT_PER_CM;
    Ok(record
        .alternative_procedures
        .iter()
        .map(|procedure| {
            let label = format!("{}: ", procedure.label);
            let label_width = Font::HelveticaBold.text_width(&label) * PROCEDURE_FONT_SIZE_PT;
            let remaining = (block_width - label_width) / PROCEDURE_FONT_SIZE_PT;
            ProcedureLine {
                procedure: shorten_to_width(&procedure.procedure, remaining, &Font::Helvetica),
                label,
            }
        })
        .collect())
}

pub fn paragraphs_height(paragraphs: &[Paragraph], options: &LayoutOptions) -> f64 {
    let mut height = 0.0;
    for (idx, paragraph) in paragraphs.iter().enumerate() {
        if idx > 0 {
            height += options.leading + PARAGRAPH_GAP_PT;
        }
        if paragraph.lines.is_empty() {
            height += options.box_height + PARAGRAPH_GAP_PT;
        } else {
            height += options.leading * paragraph.lines.len() as f64;
        }
    }
    height
}

pub fn check_height(paragraphs: &[Paragraph], options: &LayoutOptions) -> Result<()> {
    let height = paragraphs_height(paragraphs, options);
    if height > options.max_height {
        return Err(QrBillError::TextTooTall {
            height,
            max_height: options.max_height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Address, AlternativeProcedure, Entity, Iban, PaymentAmount, StructuredAddress, CHF,
    };
    use pretty_assertions::assert_eq;

    fn structured(name: &str, street: &str, number: &str, postcode: &str, town: &str) -> Entity {
        Entity {
            name: name.to_string(),
            address: Some(Address::Structured(StructuredAddress {
                street: street.to_string(),
                building_number: number.to_string(),
                postcode: postcode.to_string(),
                town: town.to_string(),
            })),
            country_code: "CH".to_string(),
        }
    }

    fn gardening_invoice() -> PaymentRecord {
        let mut record = PaymentRecord::new(
            Iban::from_str_unchecked("CH5800791123000889012"),
            structured("Robert Schneider AG", "Rue du Lac", "1268", "2501", "Biel"),
            PaymentAmount {
                amount: Some(3949.75),
                currency: CHF.to_string(),
            },
        );
        record.debtor = structured("Pia Rutschmann", "Marktgasse", "28", "9400", "Rorschach");
        record.information.unstructured_message =
            "Rechnung Nr. 3139 für Gartenarbeiten und Entsorgung Schnittmaterial".to_string();
        record
    }

    fn donation() -> PaymentRecord {
        let mut record = PaymentRecord::new(
            Iban::from_str_unchecked("CH3709000000304442225"),
            structured("Salvation Army Foundation Switzerland", "", "", "3000", "Bern"),
            PaymentAmount {
                amount: None,
                currency: CHF.to_string(),
            },
        );
        record.information.unstructured_message = "Donation to the Winterfest Campaign".to_string();
        record
    }

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn titles() {
        assert_eq!(
            title_section(&gardening_invoice(), "de").unwrap(),
            TitleSection {
                payment_part: "Zahlteil".to_string(),
                receipt: "Empfangsschein".to_string(),
            }
        );
        assert_eq!(title_section(&donation(), "en").unwrap().payment_part, "Payment part");
    }

    #[test]
    fn amount_is_grouped() {
        assert_eq!(
            amount_section(&gardening_invoice(), "de").unwrap(),
            AmountSection {
                currency_heading: "Währung".to_string(),
                currency_value: "CHF".to_string(),
                amount_heading: "Betrag".to_string(),
                amount_value: "3 949.75".to_string(),
            }
        );
    }

    #[test]
    fn blank_amount() {
        let section = amount_section(&donation(), "en").unwrap();
        assert_eq!(section.amount_heading, "Amount");
        assert_eq!(section.amount_value, "");
    }

    #[test]
    fn payment_part_information() {
        let expected = vec![
            Paragraph {
                heading: "Konto / Zahlbar an".to_string(),
                lines: strings(&[
                    "CH58 0079 1123 0008 8901 2",
                    "Robert Schneider AG",
                    "Rue du Lac 1268",
                    "2501 Biel",
                ]),
            },
            Paragraph {
                heading: "Zusätzliche Informationen".to_string(),
                lines: strings(&[
                    "Rechnung Nr. 3139 für Gartenarbeiten und",
                    "Entsorgung Schnittmaterial",
                ]),
            },
            Paragraph {
                heading: "Zahlbar durch".to_string(),
                lines: strings(&["Pia Rutschmann", "Marktgasse 28", "9400 Rorschach"]),
            },
        ];
        let actual = information_section(
            &gardening_invoice(),
            "de",
            width_in_font_units(8.5, 10.0),
            InformationPart::PaymentPart,
        )
        .unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn receipt_information_with_blank_debtor() {
        let expected = vec![
            Paragraph {
                heading: "Account / Payable to".to_string(),
                lines: strings(&[
                    "CH37 0900 0000 3044 4222 5",
                    "Salvation Army Foundation Switzerland",
                    "3000 Bern",
                ]),
            },
            Paragraph {
                heading: "Payable by (name/address)".to_string(),
                lines: Vec::new(),
            },
        ];
        let actual = information_section(
            &donation(),
            "en",
            width_in_font_units(8.5, 10.0),
            InformationPart::ReceiptPart,
        )
        .unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn sections_reject_bad_input() {
        assert!(matches!(
            title_section(&donation(), "rm"),
            Err(QrBillError::UnsupportedLanguage(_))
        ));
        let mut record = donation();
        record.creditor = Entity::default();
        assert!(matches!(
            information_section(&record, "en", 20.0, InformationPart::PaymentPart),
            Err(QrBillError::MissingCreditor)
        ));
    }

    #[test]
    fn procedure_lines() {
        let mut record = donation();
        record.alternative_procedures = vec![
            AlternativeProcedure {
                label: "Name AV1".to_string(),
                procedure: "UV;UltraPay005;12345".to_string(),
            },
            AlternativeProcedure {
                label: "Name AV2".to_string(),
                procedure: "X".repeat(100),
            },
        ];
        let lines = alternative_procedure_lines(&record).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Name AV1: ");
        assert_eq!(lines[0].procedure, "UV;UltraPay005;12345");
        assert!(lines[1].procedure.ends_with('…'));
        assert!(lines[1].procedure.chars().count() < 100);
    }

    #[test]
    fn height_check() {
        let part = InformationPart::PaymentPart;
        let paragraphs =
            information_section(&gardening_invoice(), "de", part.text_width(), part).unwrap();
        let options = part.layout_options();
        assert!(check_height(&paragraphs, &options).is_ok());

        let receipt = InformationPart::ReceiptPart;
        let paragraphs =
            information_section(&gardening_invoice(), "de", receipt.text_width(), receipt).unwrap();
        assert!(check_height(&paragraphs, &receipt.layout_options()).is_ok());

        let blank = vec![Paragraph {
            heading: "Payable by".to_string(),
            lines: Vec::new(),
        }];
        assert_eq!(paragraphs_height(&blank, &options), options.box_height + 3.0);

        let tall = vec![Paragraph {
            heading: "Zusätzliche Informationen".to_string(),
            lines: vec!["line".to_string(); 30],
        }];
        assert!(matches!(
            check_height(&tall, &options),
            Err(QrBillError::TextTooTall { .. })
        ));
    }
}
