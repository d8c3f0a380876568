use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PAYROLL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4" xmlns:nomina12="http://www.sat.gob.mx/nomina12"
    xmlns:tfd="http://www.sat.gob.mx/TimbreFiscalDigital"
    Version="4.0" Fecha="2025-01-14T18:30:00" SubTotal="8994.54" Descuento="500.00" Total="8494.54">
  <cfdi:Emisor Rfc="ASE010101AAA" Nombre="ACME SERVICIOS SA DE CV" />
  <cfdi:Receptor Rfc="PEPJ800101AAA" Nombre="JUAN PEREZ" />
  <cfdi:Complemento>
    <nomina12:Nomina Version="1.2" FechaPago="2025-01-15" FechaInicialPago="2025-01-01"
        FechaFinalPago="2025-01-15" PeriodicidadPago="04"
        TotalPercepciones="8994.54" TotalDeducciones="500.00" TotalOtrosPagos="0.00">
      <nomina12:Deducciones>
        <nomina12:Deduccion TipoDeduccion="002" Concepto="ISR" Importe="420.10" />
        <nomina12:Deduccion TipoDeduccion="001" Concepto="Seguridad social" Importe="79.90" />
      </nomina12:Deducciones>
    </nomina12:Nomina>
    <tfd:TimbreFiscalDigital Version="1.1" UUID="4B1E2C3D-0000-4000-8000-ABCDEF012345" />
  </cfdi:Complemento>
</cfdi:Comprobante>
"#;

fn finfit(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("finfit").unwrap();
    cmd.env("FINFIT_DATA_DIR", base)
        .env_remove("CFDI_INBOX")
        .env_remove("LEDGER_DIR")
        .env_remove("REPORT_DIR")
        .env_remove("FITNESS_LOG_DIR")
        .env_remove("DEFAULT_CURRENCY")
        .env_remove("RUST_LOG");
    cmd
}

fn init(base: &Path) {
    finfit(base)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
}

#[test]
fn test_init_creates_layout() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());

    assert!(temp_dir.path().join("settings.json").exists());
    assert!(temp_dir.path().join("budget.md").exists());
    assert!(temp_dir.path().join("inbox").is_dir());
    assert!(temp_dir.path().join("data/ledgers").is_dir());
}

#[test]
fn test_ingest_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());
    fs::write(temp_dir.path().join("inbox/enero.xml"), PAYROLL_XML).unwrap();

    finfit(temp_dir.path())
        .arg("ingest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingested 1 document(s)"))
        .stdout(predicate::str::contains("4B1E2C3D-0000-4000-8000-ABCDEF012345"));

    assert!(temp_dir.path().join("data/xml/enero.xml").exists());
    let ledger = fs::read_to_string(temp_dir.path().join("data/ledgers/2025-01.md")).unwrap();
    assert!(ledger.contains("8494.54"));

    finfit(temp_dir.path())
        .arg("ingest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingested 0 document(s)"))
        .stdout(predicate::str::contains("Skipped 1 duplicate(s)"));
}

#[test]
fn test_payroll_monthly_json() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());
    fs::write(temp_dir.path().join("inbox/enero.xml"), PAYROLL_XML).unwrap();

    let output = finfit(temp_dir.path())
        .args(["payroll", "monthly", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["period"], "2025-01");
    assert_eq!(rows[0]["net"], 8494.54);
    assert_eq!(rows[0]["isr"], 420.1);
}

#[test]
fn test_workout_log_and_report() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());

    finfit(temp_dir.path())
        .args([
            "workout",
            "log",
            "--day",
            "push",
            "--date",
            "2025-01-15",
            "flat_bench_press|100|5|top set",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 1 set(s) for PUSH on 2025-01-15"));

    finfit(temp_dir.path())
        .args(["workout", "report", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Est 1RM ~ 116.7kg"));
    assert!(temp_dir
        .path()
        .join("data/fitness/reports/monthly/2025-01.md")
        .exists());

    finfit(temp_dir.path())
        .args(["ledger", "summary", "--period", "month", "--date", "2025-01-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Monthly Summary — 2025-01"))
        .stdout(predicate::str::contains("- workouts: 1"));
}

#[test]
fn test_workout_log_rejects_unknown_exercise() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());

    finfit(temp_dir.path())
        .args(["workout", "log", "--day", "pull", "curl_machine|20|10|"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown exercise_id 'curl_machine'"));

    assert!(!temp_dir.path().join("data/ledgers").read_dir().unwrap().any(|_| true));
}

#[test]
fn test_report_generate_show_list() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());

    finfit(temp_dir.path())
        .args(["report", "generate", "--routine", "legs", "--date", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-01.md"));

    finfit(temp_dir.path())
        .args(["report", "show", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 🧾 Budget & Routine — 2025-03-01"))
        .stdout(predicate::str::contains("Today’s Routine (LEGS)"));

    finfit(temp_dir.path())
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-01.md"));

    finfit(temp_dir.path())
        .args(["report", "show", "2030-01-01"])
        .assert()
        .failure();
}

#[test]
fn test_entry_add_expense() {
    let temp_dir = TempDir::new().unwrap();
    init(temp_dir.path());

    finfit(temp_dir.path())
        .args([
            "entry", "add", "expense", "450", "groceries", "--category", "food", "--date",
            "2025-01-20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$450.00 MXN"));

    finfit(temp_dir.path())
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"))
        .stdout(predicate::str::contains("expenses 450.00"));
}
