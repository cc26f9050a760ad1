//! # Aegis Core
//!
//! The domain layer of the Aegis social pipeline.
//! This crate contains the post model, the synthetic post generator and the
//! record enricher, with zero infrastructure dependencies. Stream, analysis
//! and output backends are reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;

pub use error::{DomainError, RecordError};
pub use pipeline::{Enricher, PostGenerator, RecordOutcome, SkipReason};
