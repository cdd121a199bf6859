//! Waveform sampling: blink, scan sweep, glitch tables, list jitter and
//! one-shot transitions.

use neonfolio_core::animation::{
    Blink, Easing, GlitchJitter, Keyframes, ListJitter, RepeatMode, ScanDirection, ScanSweep,
    SeparatorGlitch, Transition, Tween,
};

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

macro_rules! assert_near {
    ($left:expr, $right:expr) => {{
        let (l, r) = ($left, $right);
        assert!(near(l, r), "{} = {l}, expected {r}", stringify!($left));
    }};
}

#[test]
fn blink_swings_full_amplitude_over_half_a_period() {
    let blink = Blink::default();
    let start = blink.opacity(0.0);
    let half = blink.opacity(Blink::PERIOD_MS / 2.0);
    assert!((start - half).abs() > 0.99);
}

#[test]
fn blink_is_periodic() {
    let blink = Blink::default();
    for t in [0.0, 120.0, 333.0, 700.0] {
        assert_near!(blink.opacity(t + Blink::PERIOD_MS), blink.opacity(t));
        assert_near!(blink.opacity(t + 5.0 * Blink::PERIOD_MS), blink.opacity(t));
    }
}

#[test]
fn blink_stays_in_unit_range() {
    let blink = Blink::default();
    for step in 0..200 {
        let v = blink.opacity(step as f64 * 13.7);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn restart_tween_ramps_and_wraps() {
    let tween = Tween::new(3000.0, RepeatMode::Restart, Easing::Linear);
    assert_near!(tween.progress(0.0), 0.0);
    assert_near!(tween.progress(1500.0), 0.5);
    assert_near!(tween.progress(4500.0), 0.5);
    assert_near!(tween.progress(-750.0), 0.75);
    assert_near!(tween.lerp(10.0, 20.0, 1500.0), 15.0);
}

#[test]
fn reverse_tween_ping_pongs() {
    let tween = Tween::new(1000.0, RepeatMode::Reverse, Easing::Linear);
    assert_near!(tween.cycle_ms(), 2000.0);
    assert_near!(tween.progress(1000.0), 1.0);
    assert_near!(tween.progress(1500.0), 0.5);
    assert_near!(tween.progress(2000.0), 0.0);
}

#[test]
fn easing_curves_pin_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutSine,
    ] {
        assert_near!(easing.apply(0.0), 0.0);
        assert_near!(easing.apply(1.0), 1.0);
        assert_near!(easing.apply(2.0), 1.0);
    }
    assert_near!(Easing::EaseInOutCubic.apply(0.5), 0.5);
    assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
}

#[test]
fn scan_sweeps_use_their_periods() {
    let horizontal = ScanSweep::horizontal();
    assert_eq!(horizontal.direction, ScanDirection::Horizontal);
    assert_near!(horizontal.position(1500.0), 0.5);
    assert_near!(horizontal.position(3000.0), 0.0);

    let vertical = ScanSweep::vertical();
    assert_near!(vertical.position(4500.0), 0.5);

    let bouncing = ScanSweep::horizontal().reversing();
    assert_near!(bouncing.position(3000.0), 1.0);
    assert_near!(bouncing.position(4500.0), 0.5);
}

#[test]
fn scan_glow_band_trails_the_line() {
    let sweep = ScanSweep::horizontal();
    let (start, end) = sweep.glow_band(1500.0);
    assert_near!(end, 0.5);
    assert_near!(start, 0.5 - ScanSweep::GLOW_BAND);
    let (start, _) = sweep.glow_band(0.0);
    assert_near!(start, 0.0);
}

#[test]
fn glitch_is_quiet_until_the_burst() {
    let glitch = GlitchJitter::default();
    for t in [0.0, 500.0, 1500.0, 2700.0] {
        assert_near!(glitch.offset(t), 0.0);
    }
    assert!(!glitch.is_bursting(1000.0));
    assert_near!(glitch.offset(2750.0), 2.0);
    assert_near!(glitch.offset(2775.0), 0.5);
    assert_near!(glitch.offset(2900.0), -2.0);
    assert_near!(glitch.offset(5750.0), 2.0);
    assert!(glitch.is_bursting(2750.0));
}

#[test]
fn glitch_chroma_holds_after_last_frame() {
    let glitch = GlitchJitter::new(2.0);
    assert_near!(glitch.chroma(3750.0), 2.0);
    assert_near!(glitch.chroma(3800.0), -1.0);
    assert_near!(glitch.chroma(3950.0), 0.0);
    assert_near!(glitch.offset(2750.0), 4.0);
}

#[test]
fn keyframes_hold_the_first_value_before_the_first_frame() {
    const FRAMES: &[(f64, f64)] = &[(100.0, 3.0), (200.0, 5.0)];
    let table = Keyframes::new(400.0, FRAMES);
    assert_near!(table.sample(50.0), 3.0);
    assert_near!(table.sample(150.0), 4.0);
    assert_near!(table.sample(300.0), 5.0);
}

#[test]
fn separator_glitch_bursts() {
    let glitch = SeparatorGlitch;
    let quiet = glitch.sample(100.0);
    assert_near!(quiet.skew_x, 0.0);
    assert_near!(quiet.offset_x, 0.0);
    assert_near!(quiet.scale_x, 1.0);

    let first = glitch.sample(480.0);
    assert_near!(first.skew_x, 20.0);
    assert_near!(first.offset_x, -20.0);

    let flipped = glitch.sample(2100.0);
    assert_near!(flipped.skew_x, 40.0);
    assert_near!(flipped.scale_x, -1.0);

    let recovered = glitch.sample(2131.0);
    assert_near!(recovered.scale_x, 1.0);
    assert!(recovered.css_transform().contains("scaleX(1.000)"));
}

#[test]
fn list_jitter_period_depends_on_index() {
    let periods: Vec<f64> = (0..8).map(|i| ListJitter::new(i).period_ms()).collect();
    assert_eq!(periods, vec![900.0, 1350.0, 450.0, 1350.0, 630.0, 450.0, 900.0, 1350.0]);
    assert!((0..64).all(|i| ListJitter::new(i).period_ms() != 1080.0));
}

#[test]
fn list_jitter_skips_calm_indices() {
    let calm = ListJitter::new(6);
    assert!(!calm.should_glitch());
    for t in [0.0, 90.0, 99.0, 459.0] {
        assert_near!(calm.skew(t), 0.0);
        assert_near!(calm.offset(t), 0.0);
    }
}

#[test]
fn list_jitter_follows_fractional_keyframes() {
    let first = ListJitter::new(0);
    assert!(first.should_glitch());
    assert_near!(first.skew(90.0), -3.0);
    assert_near!(first.skew(99.0), 3.0);
    assert_near!(first.skew(450.0), 0.0);
    assert_near!(first.offset(459.0), 5.0);
    assert_near!(first.offset(900.0), 0.0);
}

#[test]
fn transition_moves_and_retargets_from_current_value() {
    let mut aside = Transition::settled(43.0, Transition::ASIDE_MS, Easing::Linear);
    assert_near!(aside.value_at(0.0), 43.0);

    aside.retarget(225.0, 1000.0);
    assert_near!(aside.value_at(1000.0), 43.0);
    assert_near!(aside.value_at(1150.0), 134.0);
    assert_near!(aside.value_at(1300.0), 225.0);
    assert!(aside.is_finished(1300.0));

    aside.retarget(225.0, 1200.0);
    assert_near!(aside.value_at(1300.0), 225.0);

    let mut back = Transition::settled(43.0, 300.0, Easing::Linear);
    back.retarget(225.0, 1000.0);
    back.retarget(43.0, 1150.0);
    assert_near!(back.value_at(1150.0), 134.0);
    assert_near!(back.value_at(1300.0), 88.5);
    assert_near!(back.target(), 43.0);
}
