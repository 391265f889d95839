use crate::error::{QrBillError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    Fr,
    It,
    En,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::De, Language::Fr, Language::It, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::Fr => "fr",
            Language::It => "it",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self> {
        check_language(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn check_language(code: &str) -> Result<Language> {
    Language::ALL
        .into_iter()
        .find(|lang| lang.code() == code)
        .ok_or_else(|| QrBillError::UnsupportedLanguage(code.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    PaymentPart,
    AccountPayableTo,
    Reference,
    AdditionalInformation,
    Currency,
    Amount,
    Receipt,
    AcceptancePoint,
    PleaseSeparate,
    PayableBy,
    PayableByNameAddress,
    InFavourOf,
}

/// Localized slip text from the QR-bill style guide.
pub fn heading(id: Heading, language: Language) -> &'static str {
    use Language::*;
    match (id, language) {
        (Heading::PaymentPart, De) => "Zahlteil",
        (Heading::PaymentPart, Fr) => "Section paiement",
        (Heading::PaymentPart, It) => "Sezione pagamento",
        (Heading::PaymentPart, En) => "Payment part",

        (Heading::AccountPayableTo, De) => "Konto / Zahlbar an",
        (Heading::AccountPayableTo, Fr) => "Compte / Payable à",
        (Heading::AccountPayableTo, It) => "Conto / Pagabile a",
        (Heading::AccountPayableTo, En) => "Account / Payable to",

        (Heading::Reference, De) => "Referenz",
        (Heading::Reference, Fr) => "Référence",
        (Heading::Reference, It) => "Riferimento",
        (Heading::Reference, En) => "Reference",

        (Heading::AdditionalInformation, De) => "Zusätzliche Informationen",
        (Heading::AdditionalInformation, Fr) => "Informations supplémentaires",
        (Heading::AdditionalInformation, It) => "Informazioni supplementari",
        (Heading::AdditionalInformation, En) => "Additional information",

        (Heading::Currency, De) => "Währung",
        (Heading::Currency, Fr) => "Monnaie",
        (Heading::Currency, It) => "Valuta",
        (Heading::Currency, En) => "Currency",

        (Heading::Amount, De) => "Betrag",
        (Heading::Amount, Fr) => "Montant",
        (Heading::Amount, It) => "Importo",
        (Heading::Amount, En) => "Amount",

        (Heading::Receipt, De) => "Empfangsschein",
        (Heading::Receipt, Fr) => "Récépissé",
        (Heading::Receipt, It) => "Ricevuta",
        (Heading::Receipt, En) => "Receipt",

        (Heading::AcceptancePoint, De) => "Annahmestelle",
        (Heading::AcceptancePoint, Fr) => "Point de dépôt",
        (Heading::AcceptancePoint, It) => "Punto di accettazione",
        (Heading::AcceptancePoint, En) => "Acceptance point",

        (Heading::PleaseSeparate, De) => "Vor der Einzahlung abzutrennen",
        (Heading::PleaseSeparate, Fr) => "A détacher avant le versement",
        (Heading::PleaseSeparate, It) => "Da staccare prima del versamento",
        (Heading::PleaseSeparate, En) => "Separate before paying in",

        (Heading::PayableBy, De) => "Zahlbar durch",
        (Heading::PayableBy, Fr) => "Payable par",
        (Heading::PayableBy, It) => "Pagabile da",
        (Heading::PayableBy, En) => "Payable by",

        (Heading::PayableByNameAddress, De) => "Zahlbar durch (Name/Adresse)",
        (Heading::PayableByNameAddress, Fr) => "Payable par (nom/adresse)",
        (Heading::PayableByNameAddress, It) => "Pagabile da (nome/indirizzo)",
        (Heading::PayableByNameAddress, En) => "Payable by (name/address)",

        (Heading::InFavourOf, De) => "Zugunsten",
        (Heading::InFavourOf, Fr) => "En faveur de",
        (Heading::InFavourOf, It) => "A favore di",
        (Heading::InFavourOf, En) => "In favour of",
    }
}

pub fn border_text(language: &str) -> Result<&'static str> {
    let language = check_language(language)?;
    Ok(heading(Heading::PleaseSeparate, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_languages() {
        assert_eq!(check_language("en").unwrap(), Language::En);
        assert_eq!("it".parse::<Language>().unwrap(), Language::It);
        assert!(matches!(
            check_language("sv"),
            Err(QrBillError::UnsupportedLanguage(code)) if code == "sv"
        ));
        assert!(check_language("DE").is_err());
    }

    #[test]
    fn heading_lookup() {
        assert_eq!(heading(Heading::Currency, Language::De), "Währung");
        assert_eq!(heading(Heading::AccountPayableTo, Language::Fr), "Compte / Payable à");
        assert_eq!(heading(Heading::Amount, Language::It), "Importo");
        assert_eq!(
            heading(Heading::PayableByNameAddress, Language::En),
            "Payable by (name/address)"
        );
    }

    #[test]
    fn border_caption() {
        assert_eq!(border_text("de").unwrap(), "Vor der Einzahlung abzutrennen");
        assert!(border_text("xx").is_err());
    }
}
