//! Text analysis implementations.

mod lexicon;

pub use lexicon::LexiconAnalyzer;

#[cfg(feature = "comprehend")]
mod comprehend;
#[cfg(feature = "comprehend")]
pub use self::comprehend::ComprehendAnalyzer;
