//! Merge policy for configuration layers.

pub mod merge_policy;
