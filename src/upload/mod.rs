//! Batch upload of transformed records to the Cashbook API.
//!
//! Records are partitioned into fixed-size batches and submitted strictly
//! sequentially; later batches depend on earlier ones for row offsets and
//! running totals. Per-item and per-batch outcomes are folded into one
//! aggregated `ImportResult`.

mod client;

pub use client::HttpImportApi;

use crate::error::ImportError;
use crate::kinds::RecordKind;
use crate::models::{ApiEnvelope, ImportItemResult, ImportRecord, ImportResult};

/// Maximum records per network call; the API rejects larger payloads.
pub const BATCH_SIZE: usize = 100;

/// Transport seam for batch submission.
///
/// The reqwest-backed implementation is [`HttpImportApi`]; tests substitute
/// a scripted mock.
#[allow(async_fn_in_trait)]
pub trait ImportApi {
    async fn post_batch(
        &self,
        endpoint: &str,
        batch: &[ImportRecord],
    ) -> Result<ApiEnvelope, ImportError>;
}

/// Upload `records` of `kind` in sequential batches.
///
/// An unrecognized kind fails before any network activity. A transport
/// error aborts the remaining batches and propagates; a batch the server
/// rejects at the envelope level is folded in as a full-batch failure and
/// the run continues.
pub async fn upload<C: ImportApi>(
    client: &C,
    records: &[ImportRecord],
    kind: &str,
) -> Result<ImportResult, ImportError> {
    let endpoint = RecordKind::from_str(kind)
        .map(|k| k.endpoint())
        .ok_or_else(|| ImportError::UnknownKind(kind.to_string()))?;

    if records.is_empty() {
        return Ok(ImportResult::empty());
    }

    let mut results: Vec<ImportItemResult> = Vec::with_capacity(records.len());
    let mut imported_count = 0usize;
    let mut error_count = 0usize;
    let mut success = true;

    for (batch_no, batch) in records.chunks(BATCH_SIZE).enumerate() {
        let offset = batch_no * BATCH_SIZE;
        log::debug!(
            "Uploading batch {} ({} records) to {}",
            batch_no + 1,
            batch.len(),
            endpoint
        );

        let envelope = client.post_batch(endpoint, batch).await?;

        match envelope {
            ApiEnvelope {
                successful: true,
                data: Some(payload),
                ..
            } => {
                if !payload.success {
                    success = false;
                }
                imported_count += payload.imported_count;
                error_count += payload.error_count;
                // Per-batch row numbers become global row numbers.
                results.extend(payload.results.into_iter().map(|mut item| {
                    item.row += offset;
                    item
                }));
            }
            ApiEnvelope {
                response_message, ..
            } => {
                // No per-item payload: the whole batch counts as failed.
                let message = if response_message.is_empty() {
                    "Upload failed".to_string()
                } else {
                    response_message
                };
                log::warn!("Batch {} rejected: {}", batch_no + 1, message);
                results.extend((0..batch.len()).map(|i| ImportItemResult {
                    success: false,
                    message: message.clone(),
                    row: offset + i + 1,
                }));
                error_count += batch.len();
                success = false;
            }
        }
    }

    let message = if success {
        if error_count > 0 {
            format!("Successfully imported {} items with {} errors", imported_count, error_count)
        } else {
            format!("Successfully imported {} items", imported_count)
        }
    } else {
        format!("Imported {} items with {} errors", imported_count, error_count)
    };
    log::info!("Upload to {} finished: {}", endpoint, message);

    Ok(ImportResult {
        success,
        message,
        imported_count,
        error_count,
        results,
    })
}
