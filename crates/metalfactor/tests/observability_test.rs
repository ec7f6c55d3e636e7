//! Logging setup and teardown.

use metalfactor::{ObservabilityConfig, init_observability_with_config, shutdown_observability};

#[test]
fn test_shutdown_without_init_is_a_no_op() {
    shutdown_observability();
    shutdown_observability();
}

#[test]
fn test_init_then_shutdown_twice() {
    let config = ObservabilityConfig::new("metalfactor-test")
        .with_log_level("debug")
        .with_json_logs(true);

    init_observability_with_config(config).unwrap();
    tracing::info!(guild_id = "42", "logged before shutdown");

    shutdown_observability();
    shutdown_observability();

    // A second global subscriber is refused.
    assert!(init_observability_with_config(ObservabilityConfig::default()).is_err());
}
