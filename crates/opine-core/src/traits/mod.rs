//! Seams to external collaborators.

pub mod oracle;

pub use oracle::NlpOracle;
