//! finfit - Payroll ledger and fitness tracker for the terminal
//!
//! This library provides the core functionality for the `finfit` CLI. It
//! reads CFDI Nómina payroll documents into an append-only markdown ledger,
//! aggregates pay by month, quincena and year, summarizes a markdown budget,
//! and keeps a monthly gym log with personal records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the exercise catalog
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, payroll records, ledger entries, sets)
//! - `cfdi`: Payroll document normalizer
//! - `storage`: Markdown and XML file storage layer
//! - `services`: Business logic layer (ingestion, entries, budget, fitness)
//! - `aggregate`: Monthly, biweekly and yearly payroll folds
//! - `reports`: Markdown reports and terminal tables
//! - `cli`: Command handlers for the `finfit` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finfit_cli::config::{paths::FinfitPaths, settings::Settings};
//! use finfit_cli::services::IngestService;
//! use finfit_cli::storage::Storage;
//!
//! let paths = FinfitPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let outcome = IngestService::new(&storage).run_all(&settings.default_currency, false)?;
//! ```

pub mod aggregate;
pub mod cfdi;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::FinfitError;
