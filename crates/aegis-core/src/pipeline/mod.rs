//! Pipeline stages - post generation on the producer side, enrichment on the
//! consumer side.

mod enrich;
mod generator;

pub use enrich::{
    BatchSummary, DEFAULT_LANGUAGE_CODE, Enricher, MAX_CONTENT_BYTES, RecordOutcome, SkipReason,
};
pub use generator::{
    CRISIS_MESSAGES, DEFAULT_CRISIS_PROBABILITY, PostGenerator, PostTemplate, TEMPLATES,
    TemplateLabel,
};
