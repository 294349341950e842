use chartify_scales::telemetry::init_default_tracing;

#[test]
fn tracing_is_installed_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
