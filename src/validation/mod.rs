//! Row validation for bulk CSV imports.
//!
//! Checks each raw row against its kind's field contract and reports every
//! violation per row and field. Validation never aborts a submission; the
//! caller decides what to do with the error list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::currency;
use crate::kinds::RecordKind;
use crate::models::RawRow;

/// One violation, addressed by 1-based row number and (usually) a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub row: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Outcome of validating a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub success: bool,
    /// Rows retained for transformation. Rows with a currency-format error
    /// are dropped; rows with only required-field errors are kept.
    pub data: Option<Vec<RawRow>>,
    pub errors: Vec<ValidationError>,
}

/// Validate `rows` against the field contract of `kind`.
///
/// A blank kind fails immediately with a row-0 error. A kind that is not in
/// the registry passes everything through untouched; rejecting it is the
/// uploader's job.
pub fn validate(rows: &[RawRow], kind: &str) -> ValidationResult {
    if kind.trim().is_empty() {
        return ValidationResult {
            success: false,
            data: None,
            errors: vec![ValidationError {
                row: 0,
                message: "Data type is required".to_string(),
                field: None,
            }],
        };
    }

    let Some(kind) = RecordKind::from_str(kind) else {
        return ValidationResult {
            success: true,
            data: Some(rows.to_vec()),
            errors: vec![],
        };
    };

    let mut errors = Vec::new();
    let mut data = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let row_no = idx + 1;
        let mut has_currency_error = false;

        for rule in kind.field_rules() {
            let value = row.get(rule.field);

            if rule.required && is_blank(value) {
                errors.push(ValidationError {
                    row: row_no,
                    message: format!("{} is required", rule.field),
                    field: Some(rule.field.to_string()),
                });
            }

            if rule.currency && !is_valid_currency(value) {
                errors.push(ValidationError {
                    row: row_no,
                    message: format!("{} must be a valid currency value", rule.field),
                    field: Some(rule.field.to_string()),
                });
                has_currency_error = true;
            }
        }

        // A row is dropped iff it has a currency-format error; rows with
        // only required-field errors stay in `data`.
        if !has_currency_error {
            data.push(row.clone());
        }
    }

    ValidationResult {
        success: errors.is_empty(),
        data: Some(data),
        errors,
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn is_valid_currency(value: Option<&Value>) -> bool {
    match value {
        // Missing and empty monetary fields default to zero downstream.
        None | Some(Value::Null) => true,
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => currency::is_valid(s),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ledger_row(date: &str, description: &str, amount: &str) -> RawRow {
        let mut row = RawRow::new();
        row.insert("date".to_string(), json!(date));
        row.insert("description".to_string(), json!(description));
        row.insert("amount".to_string(), json!(amount));
        row
    }

    #[test]
    fn test_valid_rows_all_pass() {
        let rows = vec![
            ledger_row("2025-01-15", "Groceries", "$54.20"),
            ledger_row("2025-01-16", "Rent", "1,200.00"),
        ];
        let result = validate(&rows, "LedgerEntries");
        assert!(result.success);
        assert!(result.errors.is_empty());
        assert_eq!(result.data.unwrap().len(), 2);
    }

    #[test]
    fn test_blank_kind_is_rejected() {
        let result = validate(&[ledger_row("2025-01-15", "Groceries", "1.00")], "");
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row, 0);
        assert_eq!(result.errors[0].message, "Data type is required");
        assert_eq!(result.errors[0].field, None);
    }

    #[test]
    fn test_unrecognized_kind_passes_through() {
        let rows = vec![ledger_row("", "", "not currency")];
        let result = validate(&rows, "Unknown Type");
        assert!(result.success);
        assert!(result.errors.is_empty());
        assert_eq!(result.data.unwrap(), rows);
    }

    #[test]
    fn test_missing_required_field_keeps_row() {
        let mut row = ledger_row("2025-01-15", "", "1.00");
        row.insert("description".to_string(), json!("   "));
        let result = validate(&[row], "LedgerEntries");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row, 1);
        assert_eq!(result.errors[0].field.as_deref(), Some("description"));
        assert_eq!(result.errors[0].message, "description is required");
        // Still retained for preview/transformation.
        assert_eq!(result.data.unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_currency_drops_row() {
        let rows = vec![
            ledger_row("2025-01-15", "Groceries", "12.34.56"),
            ledger_row("2025-01-16", "Rent", "1200.00"),
        ];
        let result = validate(&rows, "LedgerEntries");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row, 1);
        assert_eq!(result.errors[0].field.as_deref(), Some("amount"));
        assert_eq!(result.errors[0].message, "amount must be a valid currency value");
        // Only the well-formed row survives.
        let data = result.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].get("description"), Some(&json!("Rent")));
    }

    #[test]
    fn test_multiple_errors_on_one_row_are_all_collected() {
        let mut row = RawRow::new();
        row.insert("amount".to_string(), json!("abc"));
        let result = validate(&[row], "LedgerEntries");
        // date missing, description missing, amount required-but-present
        // is satisfied, amount malformed.
        let fields: Vec<_> = result.errors.iter().filter_map(|e| e.field.as_deref()).collect();
        assert!(fields.contains(&"date"));
        assert!(fields.contains(&"description"));
        assert!(fields.contains(&"amount"));
        assert!(result.errors.iter().all(|e| e.row == 1));
        assert_eq!(result.data.unwrap().len(), 0);
    }

    #[test]
    fn test_empty_currency_field_is_valid() {
        let mut row = RawRow::new();
        row.insert("categoryName".to_string(), json!("Utilities"));
        row.insert("amount".to_string(), json!(""));
        let result = validate(&[row], "Budgets");
        // Empty amount violates `required` but not the currency format.
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "amount is required");
        assert_eq!(result.data.unwrap().len(), 1);
    }

    #[test]
    fn test_numeric_json_values_are_accepted() {
        let mut row = RawRow::new();
        row.insert("categoryName".to_string(), json!("Utilities"));
        row.insert("amount".to_string(), json!(1234.56));
        let result = validate(&[row], "Budgets");
        assert!(result.success, "errors: {:?}", result.errors);
    }

    #[test]
    fn test_snapshot_rules_use_balance_field() {
        let mut row = RawRow::new();
        row.insert("holdingName".to_string(), json!("Brokerage"));
        row.insert("date".to_string(), json!("2025-06-30"));
        row.insert("balance".to_string(), json!("oops"));
        let result = validate(&[row], "HoldingSnapshots");
        assert!(!result.success);
        assert_eq!(result.errors[0].field.as_deref(), Some("balance"));
        assert_eq!(result.data.unwrap().len(), 0);
    }
}
