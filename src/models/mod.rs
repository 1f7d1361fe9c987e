//! Data model for the bulk import pipeline.
//!
//! Wire-facing types mirror the JSON contract of the Cashbook API:
//! camelCase field names, monetary amounts as integer cents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One parsed CSV line before validation: column name -> string or number.
pub type RawRow = serde_json::Map<String, Value>;

/// A typed record ready for upload, one variant per record kind.
///
/// Untagged on purpose: the API expects each record as a plain JSON object,
/// not a tagged enum representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportRecord {
    LedgerEntry(LedgerEntryRecord),
    Budget(BudgetRecord),
    Holding(HoldingRecord),
    HoldingSnapshot(HoldingSnapshotRecord),
    HoldingCategory(HoldingCategoryRecord),
    LedgerCategory(LedgerCategoryRecord),
    /// Rows for an unrecognized kind are forwarded unmapped.
    Raw(RawRow),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryRecord {
    pub date: String,
    pub description: String,
    pub amount_in_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub category_name: String,
    pub amount_in_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    pub name: String,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSnapshotRecord {
    pub holding_name: String,
    pub date: String,
    pub balance_in_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingCategoryRecord {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerCategoryRecord {
    pub name: String,
    pub category_type: String,
}

/// Per-row outcome after a batch is processed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportItemResult {
    pub success: bool,
    pub message: String,
    /// 1-based row number in the original submission.
    pub row: usize,
}

/// Aggregated outcome of one upload invocation, covering all batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub imported_count: usize,
    pub error_count: usize,
    pub results: Vec<ImportItemResult>,
}

impl ImportResult {
    /// The result of uploading nothing: trivially successful, zero counts.
    pub fn empty() -> Self {
        Self {
            success: true,
            message: "Successfully imported 0 items".to_string(),
            imported_count: 0,
            error_count: 0,
            results: vec![],
        }
    }
}

/// Response envelope the import API wraps every batch reply in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope {
    pub successful: bool,
    pub data: Option<ImportResult>,
    #[serde(default)]
    pub response_message: String,
}
