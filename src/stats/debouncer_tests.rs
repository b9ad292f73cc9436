//! Tests for debouncer

use super::*;
use proptest::prelude::*;

const TEST_DEBOUNCE_MS: u64 = 150;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_new_debouncer_has_no_pending() {
    let debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(Instant::now()));
}

#[test]
fn test_zero_delay_is_disabled() {
    assert!(!Debouncer::new(0).is_enabled());
    assert!(!Debouncer::default().is_enabled());
    assert!(Debouncer::new(1).is_enabled());
}

#[test]
fn test_schedule_execution_sets_pending() {
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution();
    assert!(debouncer.has_pending());
}

#[test]
fn test_should_execute_false_immediately_after_schedule() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(start);
    assert!(!debouncer.should_execute_at(start));
}

#[test]
fn test_should_execute_true_after_debounce_period() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(start);
    assert!(debouncer.should_execute_at(start + ms(TEST_DEBOUNCE_MS + 10)));
}

#[test]
fn test_mark_executed_clears_state() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
    debouncer.schedule_execution_at(start);

    debouncer.mark_executed();
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(start + ms(TEST_DEBOUNCE_MS + 10)));
}

#[test]
fn test_schedule_resets_timer() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);

    debouncer.schedule_execution_at(start);
    debouncer.schedule_execution_at(start + ms(100));

    // 160ms after the first edit but only 60ms after the second
    assert!(!debouncer.should_execute_at(start + ms(160)));
    assert!(debouncer.should_execute_at(start + ms(100 + TEST_DEBOUNCE_MS)));
}

// Feature: live-update, Property 2: Debounce never fires early
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_fires_exactly_after_delay(delay in 1u64..1000, elapsed in 0u64..2000) {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(delay);
        debouncer.schedule_execution_at(start);

        prop_assert_eq!(debouncer.should_execute_at(start + ms(elapsed)), elapsed >= delay);
    }
}
