use super::*;

#[test]
fn atomic_f64_round_trips_special_values() {
    let a = AtomicF64::new(1.5);
    assert_eq!(a.load(), 1.5);
    a.store(-0.25);
    assert_eq!(a.load(), -0.25);
    a.store(f64::INFINITY);
    assert_eq!(a.load(), f64::INFINITY);
}

#[test]
fn defaults_match_published_constants() {
    let p = EngineParams::default();
    assert_eq!(p.side_length.load(), DEFAULT_SIDE_LENGTH);
    assert_eq!(p.step_delay_ms.load(), DEFAULT_STEP_DELAY_MS);
    assert_eq!(p.scan_offset.load(), 0.0);
    assert!(!p.running.load(Ordering::SeqCst));
    assert!(!p.loop_active.load(Ordering::SeqCst));
}

#[test]
fn step_delay_converts_milliseconds() {
    assert_eq!(step_delay_from_ms(30.0), Duration::from_millis(30));
    assert_eq!(step_delay_from_ms(0.0), Duration::ZERO);
}

#[test]
fn degenerate_step_delays_pace_as_zero() {
    assert_eq!(step_delay_from_ms(-5.0), Duration::ZERO);
    assert_eq!(step_delay_from_ms(f64::NAN), Duration::ZERO);
    assert_eq!(step_delay_from_ms(f64::INFINITY), Duration::ZERO);
}
