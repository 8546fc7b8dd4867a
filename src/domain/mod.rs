//! Domain layer types and invariants.

pub mod display_time;
pub mod slug;
pub mod types;
