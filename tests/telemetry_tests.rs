use toerings::telemetry::{init_default_tracing, init_tracing_with_filter};

#[test]
fn subscriber_installs_at_most_once() {
    let first = init_tracing_with_filter("toerings::sparkline=trace");
    let second = init_default_tracing();

    assert!(!second || !first);
    if cfg!(not(feature = "telemetry")) {
        assert!(!first && !second);
    }
}
