//! Shared type aliases.

pub mod collections;
