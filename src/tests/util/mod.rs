pub mod polygon;
mod vtest;

pub use vtest::VTest;

/// Routes `tracing` output to the test harness. Safe to call from every test.
#[cfg(test)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
