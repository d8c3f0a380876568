//! Payroll document parser
//!
//! Turns one CFDI Nómina XML document into a [`PayrollRecord`]. Parsing is
//! tolerant: any missing node or attribute falls back to an empty string or
//! `0.0`, and only a document that is not well-formed XML fails.

use std::path::Path;

use roxmltree::Document;
use tracing::{debug, warn};

use super::xml::{attr, attr_or_empty, children_named, find_first};
use crate::error::{FinfitError, FinfitResult};
use crate::models::period::parse_document_date;
use crate::models::{
    Amount, DeductionLine, EarningLine, ParseFailure, PayrollBatch, PayrollRecord,
};

/// Numeric attribute of an optional node, `0.0` when missing or malformed
fn amount_attr(node: Option<roxmltree::Node<'_, '_>>, name: &str) -> Amount {
    Amount::parse_or_zero(node.and_then(|n| n.attribute(name)))
}

/// Parse a payroll document from its XML text
pub fn parse_payroll_str(filename: &str, xml: &str) -> Result<PayrollRecord, roxmltree::Error> {
    let doc = Document::parse(xml.trim_start_matches('\u{feff}'))?;
    let root = doc.root_element();

    let issuer = find_first(root, "Emisor");
    let receiver = find_first(root, "Receptor");
    let nomina = find_first(root, "Nomina");
    let stamp = find_first(root, "TimbreFiscalDigital");

    let declared_pay_date = nomina.and_then(|n| attr(n, "FechaPago")).map(str::trim);
    let issue_date = attr(root, "Fecha")
        .map(str::trim)
        .or(declared_pay_date)
        .unwrap_or_default()
        .to_string();

    // Without a Nomina node there is no pay date, so the month stays empty
    let raw_pay_date = match nomina {
        Some(_) => declared_pay_date
            .map(str::to_string)
            .unwrap_or_else(|| issue_date.clone()),
        None => String::new(),
    };
    let month: String = raw_pay_date.chars().take(7).collect();
    let pay_date = parse_document_date(&raw_pay_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or(raw_pay_date);

    let gross = amount_attr(nomina, "TotalPercepciones");
    let deductions = amount_attr(nomina, "TotalDeducciones");
    let other = amount_attr(nomina, "TotalOtrosPagos");

    let mut earnings = Vec::new();
    let mut deduction_lines = Vec::new();
    let mut tax_withheld = Amount::zero();

    if let Some(nomina) = nomina {
        if let Some(percepciones) = find_first(nomina, "Percepciones") {
            for p in children_named(percepciones, "Percepcion") {
                earnings.push(EarningLine {
                    kind: attr_or_empty(Some(p), "TipoPercepcion"),
                    concept: attr_or_empty(Some(p), "Concepto"),
                    taxed: amount_attr(Some(p), "ImporteGravado"),
                    exempt: amount_attr(Some(p), "ImporteExento"),
                });
            }
        }

        if let Some(deducciones) = find_first(nomina, "Deducciones") {
            for d in children_named(deducciones, "Deduccion") {
                let line = DeductionLine {
                    kind: attr_or_empty(Some(d), "TipoDeduccion"),
                    concept: attr_or_empty(Some(d), "Concepto"),
                    amount: amount_attr(Some(d), "Importe"),
                };
                if line.is_tax_withheld() {
                    tax_withheld = line.amount;
                }
                deduction_lines.push(line);
            }
        }
    }

    let optional = |node: Option<roxmltree::Node<'_, '_>>, name: &str| {
        node.and_then(|n| attr(n, name)).map(|v| v.trim().to_string())
    };

    let record = PayrollRecord {
        filename: filename.to_string(),
        issue_date,
        pay_date,
        month,
        version: attr_or_empty(Some(root), "Version"),
        issuer: attr_or_empty(issuer, "Nombre"),
        receiver: attr_or_empty(receiver, "Nombre"),
        periodicity: attr_or_empty(nomina, "PeriodicidadPago"),
        period_start: optional(nomina, "FechaInicialPago"),
        period_end: optional(nomina, "FechaFinalPago"),
        stamp_uuid: optional(stamp, "UUID"),
        document_total: amount_attr(Some(root), "Total"),
        gross,
        deductions,
        other,
        net: PayrollRecord::net_of(gross, deductions, other),
        tax_withheld,
        earnings,
        deduction_lines,
    };

    debug!(file = filename, month = %record.month, net = %record.net, "Parsed payroll document");
    Ok(record)
}

/// Read and parse one payroll document from disk
pub fn parse_payroll_file(path: &Path) -> FinfitResult<PayrollRecord> {
    let filename = file_name(path);
    let xml = std::fs::read_to_string(path)
        .map_err(|e| FinfitError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(parse_payroll_str(&filename, &xml)?)
}

/// Parse every document, collecting failures instead of stopping
pub fn parse_all<I, P>(paths: I) -> PayrollBatch
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut batch = PayrollBatch::default();
    for path in paths {
        let path = path.as_ref();
        match parse_payroll_file(path) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping unparseable payroll document");
                batch.failures.push(ParseFailure {
                    filename: file_name(path),
                    error: e.to_string(),
                });
            }
        }
    }
    batch
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
