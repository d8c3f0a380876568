//! Payroll record model
//!
//! The flat, normalized view of one payroll (CFDI Nómina) document. Records
//! are produced by the document normalizer and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::period::parse_document_date;

/// Deduction type code that identifies income tax withheld (ISR)
pub const TAX_WITHHELD_CODE: &str = "002";

/// One earning line item (percepción)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningLine {
    /// Earning type code (TipoPercepcion)
    pub kind: String,
    /// Free-text concept
    pub concept: String,
    /// Taxed portion
    pub taxed: Amount,
    /// Exempt portion
    pub exempt: Amount,
}

/// One deduction line item (deducción)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Deduction type code (TipoDeduccion)
    pub kind: String,
    /// Free-text concept
    pub concept: String,
    pub amount: Amount,
}

impl DeductionLine {
    /// Whether this line is the income tax withholding
    pub fn is_tax_withheld(&self) -> bool {
        self.kind == TAX_WITHHELD_CODE
    }
}

/// One payroll document's totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Source file name (no directory)
    pub filename: String,
    /// Issue date as written on the document (`Fecha`)
    pub issue_date: String,
    /// Pay date, normalized to `YYYY-MM-DD` when it parses
    pub pay_date: String,
    /// Month bucket, first 7 characters of the pay date
    pub month: String,
    /// Schema version (`Version` on the root node)
    pub version: String,
    pub issuer: String,
    pub receiver: String,
    /// Payment periodicity code (PeriodicidadPago)
    pub periodicity: String,
    /// First day of the paid period, when declared
    pub period_start: Option<String>,
    /// Last day of the paid period, when declared
    pub period_end: Option<String>,
    /// Digital stamp UUID, when the document is stamped
    pub stamp_uuid: Option<String>,
    /// Document `Total` attribute
    pub document_total: Amount,
    pub gross: Amount,
    pub deductions: Amount,
    pub other: Amount,
    /// gross − deductions + other, fixed at parse time
    pub net: Amount,
    pub tax_withheld: Amount,
    pub earnings: Vec<EarningLine>,
    pub deduction_lines: Vec<DeductionLine>,
}

impl PayrollRecord {
    /// Net pay for the given totals
    pub fn net_of(gross: Amount, deductions: Amount, other: Amount) -> Amount {
        gross - deductions + other
    }

    /// Pay date as a calendar date, if it parses
    pub fn paid_on(&self) -> Option<NaiveDate> {
        parse_document_date(&self.pay_date)
    }

    /// Issue date as a calendar date, if it parses
    pub fn issued_on(&self) -> Option<NaiveDate> {
        parse_document_date(&self.issue_date)
    }
}

/// A document that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub filename: String,
    pub error: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.filename, self.error)
    }
}

/// Result of parsing a batch of documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollBatch {
    pub records: Vec<PayrollRecord>,
    pub failures: Vec<ParseFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_of() {
        let net = PayrollRecord::net_of(
            Amount::new(8994.54),
            Amount::new(500.0),
            Amount::new(25.0),
        );
        assert!((net.value() - 8519.54).abs() < 1e-9);
    }

    #[test]
    fn test_tax_withheld_code() {
        let isr = DeductionLine {
            kind: "002".into(),
            concept: "ISR".into(),
            amount: Amount::new(700.0),
        };
        let imss = DeductionLine {
            kind: "001".into(),
            concept: "IMSS".into(),
            amount: Amount::new(200.0),
        };
        assert!(isr.is_tax_withheld());
        assert!(!imss.is_tax_withheld());
    }

    #[test]
    fn test_parse_failure_display() {
        let failure = ParseFailure {
            filename: "bad.xml".into(),
            error: "unexpected end of stream".into(),
        };
        assert_eq!(failure.to_string(), "bad.xml: unexpected end of stream");
    }
}
