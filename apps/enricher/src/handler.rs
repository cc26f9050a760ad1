//! Batch handler - one invocation per trigger batch.

use aegis_core::pipeline::BatchSummary;
use aegis_core::{Enricher, RecordError, RecordOutcome};
use aegis_shared::{BatchResponse, EventRecord, KinesisEvent};

/// Process every record of `event` in order.
///
/// Record failures are logged and counted; the response always reports
/// success for the whole batch.
pub async fn handle_batch(enricher: &Enricher, event: KinesisEvent) -> BatchResponse {
    tracing::info!(records = event.len(), "Received event");

    let mut summary = BatchSummary::default();
    for record in &event.records {
        let result = process_record(enricher, record).await;
        if let Err(e) = &result {
            tracing::error!(record = %record.label(), error = %e, "Error processing a record");
        }
        summary.record(&result);
    }

    tracing::info!(
        received = summary.received,
        enriched = summary.enriched,
        skipped = summary.skipped,
        failed = summary.failed,
        "Batch complete"
    );

    BatchResponse::processed(event.len())
}

async fn process_record(
    enricher: &Enricher,
    record: &EventRecord,
) -> Result<RecordOutcome, RecordError> {
    let payload = record
        .decode_data()
        .map_err(|e| RecordError::Encoding(e.to_string()))?;
    enricher.enrich_payload(&payload).await
}
