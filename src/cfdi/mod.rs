//! Payroll document normalizer
//!
//! Parses CFDI Nómina XML documents into flat [`PayrollRecord`]s.
//!
//! [`PayrollRecord`]: crate::models::PayrollRecord

pub mod parser;
pub mod xml;

pub use parser::{parse_all, parse_payroll_file, parse_payroll_str};
