//! Tracing setup is safe to call repeatedly.

use opine_core::tracing::init_tracing;

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!(target: "opine_core", "tracing initialized twice");
}
