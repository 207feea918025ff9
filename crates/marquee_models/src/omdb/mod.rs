//! OMDb metadata lookup client.

mod client;
mod dto;

pub use client::{OMDB_API_KEY_VAR, OmdbClient};
