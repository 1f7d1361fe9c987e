//! Cashbook bulk CSV import pipeline.
//!
//! Takes raw CSV rows for one record kind, validates them against the
//! kind's field contract, transforms them into typed records (currency
//! amounts become integer cents) and uploads them to the Cashbook API in
//! batches of 100, aggregating per-row outcomes into one report.
//!
//! Splitting the CSV file into rows, preview rendering and the surrounding
//! forms UI live elsewhere; this crate starts at raw rows and ends at the
//! aggregated [`ImportResult`].

pub mod currency;
pub mod error;
pub mod kinds;
pub mod models;
pub mod pipeline;
pub mod transform;
pub mod upload;
pub mod validation;

pub use error::ImportError;
pub use kinds::{FieldRule, RecordKind};
pub use models::{ImportItemResult, ImportRecord, ImportResult, RawRow};
pub use pipeline::{import_rows, ImportOutcome};
pub use transform::transform;
pub use upload::{upload, HttpImportApi, ImportApi, BATCH_SIZE};
pub use validation::{validate, ValidationError, ValidationResult};
