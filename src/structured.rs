use crate::charset::validate_character_set;
use crate::error::{QrBillError, Result};
use crate::util::format_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const SCHEME_MARKER: &str = "//S1";

/// Structured bill information (S1) carried inside the additional
/// information field. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillInformation {
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub invoice_date: Option<DateSpan>,
    #[serde(default)]
    pub customer_reference: String,
    /// UID without the `CHE` prefix, separators or VAT suffix.
    #[serde(default)]
    pub vat_number: String,
    #[serde(default)]
    pub vat_dates: Option<DateSpan>,
    #[serde(default)]
    pub vat_rates: Vec<TaxRate>,
    #[serde(default)]
    pub import_tax_rates: Vec<TaxRate>,
    #[serde(default)]
    pub conditions: Vec<PaymentCondition>,
}

/// A single date, or a start and end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// A rate applying to the whole invoice when `amount` is zero, otherwise to
/// that partial amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub rate_percent: f64,
    #[serde(default)]
    pub amount: f64,
}

/// Discount granted when paid within `days`. "Payable within n days" is a
/// zero discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentCondition {
    pub discount_percent: f64,
    pub days: i32,
}

impl DateSpan {
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: None,
        }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn encode(&self) -> String {
        let mut out = self.start.format("%y%m%d").to_string();
        if let Some(end) = self.end {
            out.push_str(&end.format("%y%m%d").to_string());
        }
        out
    }
}

impl BillInformation {
    pub fn is_empty(&self) -> bool {
        self.encode().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        validate_character_set(&self.invoice_number)?;
        if let Some(DateSpan { end: Some(end), .. }) = self.invoice_date {
            return Err(QrBillError::InvalidField {
                field: "invoice date",
                reason: format!("may not have an end date: {end}"),
            });
        }
        validate_character_set(&self.customer_reference)?;
        if !self.vat_number.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(QrBillError::InvalidField {
                field: "VAT number",
                reason: format!("may only contain digits 0-9: {}", self.vat_number),
            });
        }
        if let Some(DateSpan {
            start,
            end: Some(end),
        }) = self.vat_dates
        {
            if end <= start {
                return Err(QrBillError::DateOrder {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        for rate in self.vat_rates.iter().chain(self.import_tax_rates.iter()) {
            if rate.amount < 0.0 {
                return Err(QrBillError::Negative {
                    field: "VAT amount",
                    value: rate.amount,
                });
            }
            if rate.rate_percent < 0.0 {
                return Err(QrBillError::Negative {
                    field: "VAT rate",
                    value: rate.rate_percent,
                });
            }
        }
        for condition in &self.conditions {
            if condition.discount_percent < 0.0 {
                return Err(QrBillError::Negative {
                    field: "discount",
                    value: condition.discount_percent,
                });
            }
            if condition.days < 0 {
                return Err(QrBillError::Negative {
                    field: "number of days",
                    value: f64::from(condition.days),
                });
            }
        }
        Ok(())
    }

    /// Renders the `//S1/10/.../40/...` string, or an empty string when no
    /// part is present. Assumes the information has been validated.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        push_segment(&mut out, "10", &self.invoice_number);
        if let Some(dates) = &self.invoice_date {
            push_segment(&mut out, "11", &dates.encode());
        }
        push_segment(&mut out, "20", &self.customer_reference);
        push_segment(&mut out, "30", &self.vat_number);
        if let Some(dates) = &self.vat_dates {
            push_segment(&mut out, "31", &dates.encode());
        }
        push_segment(&mut out, "32", &encode_rates(&self.vat_rates));
        push_segment(&mut out, "33", &encode_rates(&self.import_tax_rates));
        push_segment(&mut out, "40", &encode_conditions(&self.conditions));
        if out.is_empty() {
            return out;
        }
        format!("{SCHEME_MARKER}{out}")
    }
}

fn push_segment(out: &mut String, tag: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push('/');
    out.push_str(tag);
    out.push('/');
    out.push_str(value);
}

fn encode_rates(rates: &[TaxRate]) -> String {
    rates
        .iter()
        .map(|rate| {
            if rate.amount > 0.0 {
                format!("{}:{}", format_number(rate.rate_percent), format_number(rate.amount))
            } else {
                format_number(rate.rate_percent)
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn encode_conditions(conditions: &[PaymentCondition]) -> String {
    conditions
        .iter()
        .map(|cond| format!("{}:{}", format_number(cond.discount_percent), cond.days))
        .collect::<Vec<_>>()
        .join(";")
}
