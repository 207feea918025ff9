//! Capability traits for the marquee pipeline.
//!
//! Stages never talk to a concrete backend. They call a [`LanguageModel`] for
//! free-form completions and a [`MetadataProvider`] for title lookups, so the
//! HTTP clients, simulated providers, and test doubles are interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{LanguageModel, MetadataProvider};
pub use types::LookupOutcome;
