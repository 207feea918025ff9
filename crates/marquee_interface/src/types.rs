//! Types shared by provider implementations.

use marquee_core::MovieFacts;
use serde::{Deserialize, Serialize};

/// Result of a successful metadata lookup call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupOutcome {
    /// The provider matched the title
    Found(MovieFacts),
    /// The provider answered that nothing matches; carries its explanation
    NotFound(String),
}

impl LookupOutcome {
    /// Whether the provider matched the title.
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}
