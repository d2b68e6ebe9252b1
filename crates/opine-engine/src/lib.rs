//! # opine-engine
//!
//! The Opine facade. `OpinionMiner` owns the vocabulary, the oracle, and the
//! cumulative sentiment aggregate; each `run` splits the text, extracts and
//! prunes patterns sentence by sentence, and scores the survivors.

pub mod bounded;
pub mod miner;
pub mod report;

pub use bounded::BoundedOracle;
pub use miner::OpinionMiner;
pub use report::MiningReport;
