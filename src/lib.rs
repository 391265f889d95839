//! Swiss QR-bill core: validates payment records, encodes the SPC payload
//! carried in the QR symbol, and lays out the text blocks of the payment
//! slip.
//!
//! Every entry point takes a [`PaymentRecord`] by reference. Encoding and
//! layout assume the record has passed [`validate`]; [`payload_string`] and
//! the section builders in [`sections`] run it themselves.

pub mod charset;
pub mod error;
mod glyphs;
pub mod languages;
pub mod layout;
pub mod models;
pub mod payload;
pub mod reference;
pub mod sections;
pub mod structref;
pub mod structured;
pub mod util;
pub mod validation;

pub use error::{QrBillError, Result};
pub use languages::{border_text, check_language, heading, Heading, Language};
pub use models::{
    Address, AlternativeProcedure, CombinedAddress, Entity, Iban, PaymentAmount,
    PaymentInformation, PaymentRecord, StructuredAddress, CHF, EUR,
};
pub use payload::{encode, payload_string};
pub use sections::{
    alternative_procedure_lines, amount_section, check_height, information_section,
    title_section, AmountSection, InformationPart, LayoutOptions, Paragraph, TitleSection,
};
pub use structref::{CreditorReference, PaymentReference, QrReference};
pub use structured::{BillInformation, DateSpan, PaymentCondition, TaxRate};
pub use validation::validate;
