//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains its rich types plus, where relevant:
//! - `wire.rs`: Raw serde structs matching the dataset files
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `state.rs`: Memoized derived values keyed by selection

pub mod display;
pub mod price_history;
pub mod trend;
