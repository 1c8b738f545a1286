// Host-side tests for the bloom pulsation driver.

use vignette_core::pulse::{lerp, BloomPulse};

fn reference_pulse() -> BloomPulse {
    BloomPulse::new(1.5, 0.4, 0.8, 0.0, 0.5)
}

#[test]
fn radius_follows_the_three_phase_curve() {
    let p = reference_pulse();
    // Idle phase holds the floor
    assert_eq!(p.radius_at(0.0), 0.0);
    assert_eq!(p.radius_at(1.0), 0.0);
    // End of idle: still the floor from both sides
    assert_eq!(p.radius_at(1.5), 0.0);
    // Mid-rise (t = 0.5): cubic ease-in gives lerp(0, 0.5, 0.125)
    assert!((p.radius_at(1.7) - 0.0625).abs() < 1e-6);
    // Peak
    assert!((p.radius_at(1.9) - 0.5).abs() < 1e-6);
    // Mid-fall (t = 0.5): linear gives 0.25
    assert!((p.radius_at(2.3) - 0.25).abs() < 1e-6);
}

#[test]
fn radius_is_continuous_at_phase_boundaries() {
    let p = reference_pulse();
    let eps = 1e-4;
    // idle -> rise boundary equals min_radius from both sides
    let before = p.radius_at(p.idle_time - eps);
    let after = p.radius_at(p.idle_time + eps);
    assert!((before - p.min_radius).abs() < 1e-3);
    assert!((after - p.min_radius).abs() < 1e-3);
    // rise -> fall boundary equals max_radius from both sides
    let peak = p.idle_time + p.spike_time;
    let before = p.radius_at(peak - eps);
    let after = p.radius_at(peak + eps);
    assert!((before - p.max_radius).abs() < 1e-3);
    assert!((after - p.max_radius).abs() < 1e-3);
}

#[test]
fn timer_wraps_after_one_full_cycle() {
    let mut p = reference_pulse();
    p.advance(0.6);
    let before = p.timer();
    let cycle = p.cycle_len();
    // Advance by exactly one cycle in several steps
    for _ in 0..9 {
        p.advance(cycle / 9.0);
    }
    assert!((p.timer() - before).abs() < 1e-4);
}

#[test]
fn advance_clamps_degenerate_deltas() {
    let mut p = reference_pulse();
    p.advance(0.25);
    let t = p.timer();
    let r = p.advance(0.0);
    assert_eq!(p.timer(), t);
    let r_neg = p.advance(-1.0);
    assert_eq!(p.timer(), t);
    assert_eq!(r, r_neg);
}

#[test]
fn zero_length_phases_are_skipped() {
    // No spike phase: radius jumps straight into the fall
    let p = BloomPulse::new(1.0, 0.0, 1.0, 0.1, 0.9);
    assert_eq!(p.radius_at(0.5), 0.1);
    assert!((p.radius_at(1.0) - 0.9).abs() < 1e-6);
    assert!((p.radius_at(1.5) - 0.5).abs() < 1e-6);

    // No fall phase: the curve snaps back to the floor after the peak
    let p = BloomPulse::new(1.0, 0.5, 0.0, 0.0, 1.0);
    assert!((p.radius_at(1.25) - 0.125).abs() < 1e-6);
    assert_eq!(p.radius_at(1.5), 0.0);

    // Everything zero: advancing never divides by zero or panics
    let mut p = BloomPulse::new(0.0, 0.0, 0.0, 0.2, 0.8);
    for _ in 0..10 {
        assert_eq!(p.advance(0.1), 0.2);
    }
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
    assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
    assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
}
