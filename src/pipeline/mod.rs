//! End-to-end import orchestration: validate -> transform -> upload.

use crate::error::ImportError;
use crate::models::{ImportResult, RawRow};
use crate::transform::transform;
use crate::upload::{upload, ImportApi};
use crate::validation::{validate, ValidationError};

/// Outcome of one import run.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// Validation rejected the submission; nothing was uploaded.
    Invalid { errors: Vec<ValidationError> },
    /// The upload ran to completion, possibly with per-row failures.
    Uploaded(ImportResult),
}

/// Run the full pipeline for one CSV submission.
///
/// Validation failures short-circuit before any network activity. Rows the
/// validator dropped (currency-format errors) never reach the transformer.
pub async fn import_rows<C: ImportApi>(
    client: &C,
    rows: &[RawRow],
    kind: &str,
) -> Result<ImportOutcome, ImportError> {
    log::info!("Importing {} rows as {}", rows.len(), kind);

    let validation = validate(rows, kind);
    if !validation.success {
        log::warn!(
            "Validation rejected {} submission: {} errors",
            kind,
            validation.errors.len()
        );
        return Ok(ImportOutcome::Invalid {
            errors: validation.errors,
        });
    }

    let rows = validation.data.unwrap_or_default();
    let records = transform(&rows, kind);
    let result = upload(client, &records, kind).await?;

    Ok(ImportOutcome::Uploaded(result))
}
