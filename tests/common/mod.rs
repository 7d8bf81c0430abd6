//! Shared test setup.

/// Installs a `RUST_LOG`-driven subscriber once per test binary, so
/// `--nocapture` runs show the crate's tracing output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
