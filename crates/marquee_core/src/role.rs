//! Role types for prompt participants.

use serde::{Deserialize, Serialize};

/// Who a prompt message is attributed to.
///
/// # Examples
///
/// ```
/// use marquee_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame how the model should behave
    #[display("system")]
    System,
    /// The request itself
    #[display("user")]
    User,
}
