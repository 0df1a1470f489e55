mod fixtures;
pub use fixtures::*;

mod grid_test;
pub use grid_test::{GridTest, WIDGET_ID};

/// Routes `tracing` output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
