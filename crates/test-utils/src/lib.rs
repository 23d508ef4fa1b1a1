pub mod builders;
pub mod fake_runner;

use std::sync::Once;

use procargs::logging::{LOG_ENV_VAR, select_filter};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Uses the same filter selection as the binary, e.g.
/// `PROCARGS_LOG=procargs::exec=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_value = std::env::var(LOG_ENV_VAR).ok();
        let filter = select_filter(None, env_value.as_deref());

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
