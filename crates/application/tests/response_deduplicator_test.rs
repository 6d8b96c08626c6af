mod helpers;

use ferrous_mdns_application::services::ResponseDeduplicator;
use ferrous_mdns_domain::MdnsResponse;
use helpers::{host_a, host_aaaa, instance_srv, ManualClock};
use std::sync::Arc;
use std::time::Duration;

const WINDOW: Duration = Duration::from_millis(5000);

fn deduplicator() -> (ResponseDeduplicator, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (ResponseDeduplicator::new(WINDOW, clock.clone()), clock)
}

#[test]
fn test_recorded_response_is_suppressed() {
    let (mut dedup, _clock) = deduplicator();
    let response = MdnsResponse::new(vec![host_a()], vec![]);

    dedup.start_window();
    assert!(!dedup.should_suppress(&response));
    dedup.record(&response);

    assert!(dedup.should_suppress(&response));
}

#[test]
fn test_comparison_is_order_sensitive() {
    let (mut dedup, _clock) = deduplicator();
    dedup.start_window();
    dedup.record(&MdnsResponse::new(vec![host_a(), host_aaaa()], vec![]));

    assert!(!dedup.should_suppress(&MdnsResponse::new(vec![host_aaaa(), host_a()], vec![])));
}

#[test]
fn test_additionals_take_part_in_comparison() {
    let (mut dedup, _clock) = deduplicator();
    dedup.start_window();
    dedup.record(&MdnsResponse::new(vec![instance_srv()], vec![]));

    assert!(!dedup.should_suppress(&MdnsResponse::new(vec![instance_srv()], vec![host_a()])));
}

#[test]
fn test_ttl_difference_is_a_different_response() {
    let (mut dedup, _clock) = deduplicator();
    dedup.start_window();
    dedup.record(&MdnsResponse::new(vec![host_a()], vec![]));

    assert!(!dedup.should_suppress(&MdnsResponse::new(vec![host_a().with_ttl(0)], vec![])));
}

#[test]
fn test_window_clears_everything_at_deadline() {
    let (mut dedup, clock) = deduplicator();
    let response = MdnsResponse::new(vec![host_a()], vec![]);

    dedup.start_window();
    dedup.record(&response);
    clock.advance_ms(4999);
    assert!(dedup.should_suppress(&response));

    clock.advance_ms(1);
    assert!(!dedup.should_suppress(&response));
    assert!(dedup.is_empty());
    assert!(!dedup.is_window_running());
}

#[test]
fn test_window_is_anchored_to_first_activity() {
    let (mut dedup, clock) = deduplicator();
    let early = MdnsResponse::new(vec![host_a()], vec![]);
    let late = MdnsResponse::new(vec![host_aaaa()], vec![]);

    dedup.start_window();
    dedup.record(&early);

    clock.advance_ms(4000);
    dedup.start_window();
    dedup.record(&late);

    // The late entry shares the first window and goes with it.
    clock.advance_ms(1000);
    assert!(!dedup.should_suppress(&late));
    assert!(!dedup.should_suppress(&early));
}

#[test]
fn test_start_window_after_expiry_opens_a_new_one() {
    let (mut dedup, clock) = deduplicator();
    let response = MdnsResponse::new(vec![host_a()], vec![]);

    dedup.start_window();
    dedup.record(&response);
    clock.advance_ms(6000);

    dedup.start_window();
    assert!(dedup.is_window_running());
    assert!(dedup.is_empty());

    dedup.record(&response);
    clock.advance_ms(4999);
    assert!(dedup.should_suppress(&response));
}

#[test]
fn test_clear_stops_window() {
    let (mut dedup, _clock) = deduplicator();
    dedup.start_window();
    dedup.record(&MdnsResponse::new(vec![host_a()], vec![]));

    dedup.clear();

    assert!(dedup.is_empty());
    assert!(!dedup.is_window_running());
}
