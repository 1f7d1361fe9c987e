//! Record Type Registry.
//!
//! The closed set of supported import kinds and, per kind, its field
//! contract and API endpoint. The validator and the transformer both read
//! the same declarative rule table, so adding a kind is one table entry
//! plus one `ImportRecord` variant.

use serde::{Deserialize, Serialize};

/// Target entity type for an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    LedgerEntries,
    Budgets,
    Holdings,
    HoldingSnapshots,
    HoldingCategories,
    LedgerCategories,
}

impl RecordKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LedgerEntries" => Some(Self::LedgerEntries),
            "Budgets" => Some(Self::Budgets),
            "Holdings" => Some(Self::Holdings),
            "HoldingSnapshots" => Some(Self::HoldingSnapshots),
            "HoldingCategories" => Some(Self::HoldingCategories),
            "LedgerCategories" => Some(Self::LedgerCategories),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LedgerEntries => "LedgerEntries",
            Self::Budgets => "Budgets",
            Self::Holdings => "Holdings",
            Self::HoldingSnapshots => "HoldingSnapshots",
            Self::HoldingCategories => "HoldingCategories",
            Self::LedgerCategories => "LedgerCategories",
        }
    }

    /// API route that accepts batches of this kind.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::LedgerEntries => "CashFlowEntries/Import",
            Self::Budgets => "Budgets/Import",
            Self::Holdings => "Holdings/Import",
            Self::HoldingSnapshots => "HoldingSnapshots/Import",
            Self::HoldingCategories => "HoldingCategories/Import",
            Self::LedgerCategories => "CashFlowCategories/Import",
        }
    }

    /// Field contract for raw rows of this kind.
    pub fn field_rules(&self) -> &'static [FieldRule] {
        match self {
            Self::LedgerEntries => LEDGER_ENTRY_RULES,
            Self::Budgets => BUDGET_RULES,
            Self::Holdings => HOLDING_RULES,
            Self::HoldingSnapshots => HOLDING_SNAPSHOT_RULES,
            Self::HoldingCategories => HOLDING_CATEGORY_RULES,
            Self::LedgerCategories => LEDGER_CATEGORY_RULES,
        }
    }
}

/// Classification of one raw-row column.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub currency: bool,
}

// ============================================================================
// Field rule tables
// ============================================================================

const LEDGER_ENTRY_RULES: &[FieldRule] = &[
    FieldRule { field: "date", required: true, currency: false },
    FieldRule { field: "description", required: true, currency: false },
    FieldRule { field: "amount", required: true, currency: true },
    FieldRule { field: "categoryName", required: false, currency: false },
];

const BUDGET_RULES: &[FieldRule] = &[
    FieldRule { field: "categoryName", required: true, currency: false },
    FieldRule { field: "amount", required: true, currency: true },
];

const HOLDING_RULES: &[FieldRule] = &[
    FieldRule { field: "name", required: true, currency: false },
    FieldRule { field: "categoryName", required: true, currency: false },
];

const HOLDING_SNAPSHOT_RULES: &[FieldRule] = &[
    FieldRule { field: "holdingName", required: true, currency: false },
    FieldRule { field: "date", required: true, currency: false },
    FieldRule { field: "balance", required: true, currency: true },
];

const HOLDING_CATEGORY_RULES: &[FieldRule] = &[
    FieldRule { field: "name", required: true, currency: false },
];

const LEDGER_CATEGORY_RULES: &[FieldRule] = &[
    FieldRule { field: "name", required: true, currency: false },
    FieldRule { field: "categoryType", required: true, currency: false },
];
