//! Shared fixtures for unit tests

use chrono::NaiveDate;

use crate::models::{Amount, EntryId, EntryKind, LedgerEntry, PayrollRecord};

/// Knobs for a synthetic CFDI 4.0 / Nómina 1.2 document
pub struct PayrollFixture<'a> {
    pub uuid: Option<&'a str>,
    pub issued: &'a str,
    pub pay_date: &'a str,
    pub gross: &'a str,
    pub deductions: &'a str,
    pub other: &'a str,
    pub total: &'a str,
    pub isr: Option<&'a str>,
}

impl Default for PayrollFixture<'static> {
    fn default() -> Self {
        Self {
            uuid: None,
            issued: "2025-01-14T18:30:00",
            pay_date: "2025-01-15",
            gross: "8994.54",
            deductions: "500.00",
            other: "0.00",
            total: "8494.54",
            isr: None,
        }
    }
}

pub fn payroll_xml(f: &PayrollFixture<'_>) -> String {
    let stamp = match f.uuid {
        Some(uuid) => format!(
            r#"<tfd:TimbreFiscalDigital xmlns:tfd="http://www.sat.gob.mx/TimbreFiscalDigital" Version="1.1" UUID="{}" FechaTimbrado="{}" />"#,
            uuid, f.issued
        ),
        None => String::new(),
    };
    let deduction_lines = match f.isr {
        Some(isr) => format!(
            r#"<nomina12:Deduccion TipoDeduccion="002" Clave="ISR" Concepto="ISR" Importe="{}" />
               <nomina12:Deduccion TipoDeduccion="001" Clave="IMSS" Concepto="Seguridad social" Importe="79.90" />"#,
            isr
        ),
        None => format!(
            r#"<nomina12:Deduccion TipoDeduccion="001" Clave="IMSS" Concepto="Seguridad social" Importe="{}" />"#,
            f.deductions
        ),
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4" xmlns:nomina12="http://www.sat.gob.mx/nomina12"
    Version="4.0" Fecha="{issued}" SubTotal="{gross}" Descuento="{deductions}" Total="{total}" Moneda="MXN">
  <cfdi:Emisor Rfc="ASE010101AAA" Nombre="ACME SERVICIOS SA DE CV" RegimenFiscal="601" />
  <cfdi:Receptor Rfc="PEPJ800101AAA" Nombre="JUAN PEREZ" UsoCFDI="CN01" />
  <cfdi:Complemento>
    <nomina12:Nomina Version="1.2" TipoNomina="O" FechaPago="{pay_date}" FechaInicialPago="2025-01-01"
        FechaFinalPago="2025-01-15" NumDiasPagados="15" PeriodicidadPago="04"
        TotalPercepciones="{gross}" TotalDeducciones="{deductions}" TotalOtrosPagos="{other}">
      <nomina12:Percepciones TotalSueldos="{gross}" TotalGravado="{gross}" TotalExento="0.00">
        <nomina12:Percepcion TipoPercepcion="001" Clave="P001" Concepto="Sueldo" ImporteGravado="{gross}" ImporteExento="0.00" />
      </nomina12:Percepciones>
      <nomina12:Deducciones TotalOtrasDeducciones="{deductions}">
        {deduction_lines}
      </nomina12:Deducciones>
    </nomina12:Nomina>
    {stamp}
  </cfdi:Complemento>
</cfdi:Comprobante>
"#,
        issued = f.issued,
        gross = f.gross,
        deductions = f.deductions,
        other = f.other,
        total = f.total,
        pay_date = f.pay_date,
        deduction_lines = deduction_lines,
        stamp = stamp,
    )
}

/// A record with only the fields aggregation looks at filled in
pub fn record(pay_date: &str, gross: f64, deductions: f64, other: f64, isr: f64) -> PayrollRecord {
    let gross = Amount::new(gross);
    let deductions = Amount::new(deductions);
    let other = Amount::new(other);
    PayrollRecord {
        filename: format!("{}.xml", pay_date),
        issue_date: pay_date.to_string(),
        pay_date: pay_date.to_string(),
        month: pay_date.chars().take(7).collect(),
        version: "4.0".into(),
        issuer: String::new(),
        receiver: String::new(),
        periodicity: String::new(),
        period_start: None,
        period_end: None,
        stamp_uuid: None,
        document_total: Amount::zero(),
        gross,
        deductions,
        other,
        net: PayrollRecord::net_of(gross, deductions, other),
        tax_withheld: Amount::new(isr),
        earnings: Vec::new(),
        deduction_lines: Vec::new(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn entry(date: NaiveDate, kind: EntryKind, amount: f64, uuid: &str) -> LedgerEntry {
    LedgerEntry {
        date,
        kind,
        category: "misc".into(),
        description: format!("{} entry", kind),
        amount: Amount::new(amount),
        currency: "MXN".into(),
        source: "manual".into(),
        uuid: EntryId::new(uuid),
    }
}
