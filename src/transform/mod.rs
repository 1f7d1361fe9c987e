//! Transformation of validated raw rows into typed import records.
//!
//! Non-monetary fields are copied as-is; monetary fields are normalized to
//! integer cents via the currency module. Input is assumed to have passed
//! validation (or to be deliberately unchecked).

use serde_json::Value;

use crate::currency;
use crate::kinds::RecordKind;
use crate::models::{
    BudgetRecord, HoldingCategoryRecord, HoldingRecord, HoldingSnapshotRecord, ImportRecord,
    LedgerCategoryRecord, LedgerEntryRecord, RawRow,
};

/// Map raw rows to typed records for `kind`.
///
/// Rows for an unrecognized kind pass through unchanged, with no field
/// mapping applied.
pub fn transform(rows: &[RawRow], kind: &str) -> Vec<ImportRecord> {
    let Some(kind) = RecordKind::from_str(kind) else {
        return rows.iter().map(|row| ImportRecord::Raw(row.clone())).collect();
    };

    rows.iter().map(|row| build_record(row, kind)).collect()
}

fn build_record(row: &RawRow, kind: RecordKind) -> ImportRecord {
    match kind {
        RecordKind::LedgerEntries => ImportRecord::LedgerEntry(LedgerEntryRecord {
            date: text(row, "date"),
            description: text(row, "description"),
            amount_in_cents: cents(row, "amount"),
            category_name: opt_text(row, "categoryName"),
        }),
        RecordKind::Budgets => ImportRecord::Budget(BudgetRecord {
            category_name: text(row, "categoryName"),
            amount_in_cents: cents(row, "amount"),
        }),
        RecordKind::Holdings => ImportRecord::Holding(HoldingRecord {
            name: text(row, "name"),
            category_name: text(row, "categoryName"),
        }),
        RecordKind::HoldingSnapshots => ImportRecord::HoldingSnapshot(HoldingSnapshotRecord {
            holding_name: text(row, "holdingName"),
            date: text(row, "date"),
            balance_in_cents: cents(row, "balance"),
        }),
        RecordKind::HoldingCategories => ImportRecord::HoldingCategory(HoldingCategoryRecord {
            name: text(row, "name"),
        }),
        RecordKind::LedgerCategories => ImportRecord::LedgerCategory(LedgerCategoryRecord {
            name: text(row, "name"),
            category_type: text(row, "categoryType"),
        }),
    }
}

fn text(row: &RawRow, field: &str) -> String {
    match row.get(field) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn opt_text(row: &RawRow, field: &str) -> Option<String> {
    let value = text(row, field);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn cents(row: &RawRow, field: &str) -> i64 {
    match row.get(field) {
        Some(Value::String(s)) => currency::to_cents(s),
        Some(Value::Number(n)) => currency::to_cents(&n.to_string()),
        _ => 0,
    }
}
