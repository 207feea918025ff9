//! Core data types for the marquee movie pipeline.
//!
//! This crate provides the record threaded through every pipeline stage, the
//! normalized movie metadata shape, and the request/response types exchanged
//! with language model providers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod metadata;
mod record;
mod request;
mod role;
mod stage;

pub use message::Message;
pub use metadata::{MAX_CAST_MEMBERS, MovieFacts, MovieMetadata, NOT_AVAILABLE};
pub use record::PipelineRecord;
pub use request::{CompletionRequest, CompletionResponse};
pub use role::Role;
pub use stage::Stage;
