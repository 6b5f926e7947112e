use adaptplay::adaptation::{
    steadiness_settings, GameKind, MazeComplexity, MemorySink, NullSink, SteadinessSettings,
};
use adaptplay::profiles::CalibrationProfile;

use crate::support::profile_with;

#[test]
fn baseline_jitter_already_widens_the_path() {
    // The default jitter of 8px sits above this game's 5px threshold, so a
    // stock profile plays with a widened path while everything else stays at
    // base values.
    let settings = steadiness_settings(&CalibrationProfile::default(), &NullSink);
    assert_eq!(settings.path_width, 84.0);
    assert_eq!(settings.tremor_tolerance, 5.0);
    assert_eq!(settings.stop_signal_duration, 2000);
    assert_eq!(settings.maze_complexity, MazeComplexity::Medium);
}

#[test]
fn steady_hands_keep_the_documented_base_values() {
    let settings = steadiness_settings(&profile_with(|p| p.avg_jitter_px = 5.0), &NullSink);
    assert_eq!(settings, SteadinessSettings::default());
    assert_eq!(settings.path_width, 60.0, "Threshold is strict");
}

#[test]
fn jitter_above_threshold_widens_the_path() {
    let settings = steadiness_settings(&profile_with(|p| p.avg_jitter_px = 5.5), &NullSink);
    assert_eq!(settings.path_width, 76.5);

    let settings = steadiness_settings(&profile_with(|p| p.avg_jitter_px = 11.0), &NullSink);
    assert_eq!(settings.path_width, 93.0);
}

#[test]
fn quick_taps_shorten_the_stop_signal() {
    let settings = steadiness_settings(&profile_with(|p| p.avg_tap_duration_ms = 50.0), &NullSink);
    assert_eq!(settings.stop_signal_duration, 1500);
}

#[test]
fn long_taps_extend_the_stop_signal() {
    let settings = steadiness_settings(&profile_with(|p| p.avg_tap_duration_ms = 350.0), &NullSink);
    assert_eq!(settings.stop_signal_duration, 2500);
}

#[test]
fn mid_range_taps_leave_the_stop_signal_unchanged() {
    for tap_duration in [100.0, 200.0, 300.0] {
        let settings =
            steadiness_settings(&profile_with(|p| p.avg_tap_duration_ms = tap_duration), &NullSink);
        assert_eq!(
            settings.stop_signal_duration, 2000,
            "Tap duration {} must keep the base window",
            tap_duration
        );
    }
}

#[test]
fn firm_pressure_raises_tremor_tolerance() {
    let settings = steadiness_settings(&profile_with(|p| p.avg_pressure = 0.71), &NullSink);
    assert_eq!(settings.tremor_tolerance, 10.0);

    let settings = steadiness_settings(&profile_with(|p| p.avg_pressure = 0.7), &NullSink);
    assert_eq!(settings.tremor_tolerance, 5.0, "Threshold is strict");
}

#[test]
fn maze_complexity_is_never_adjusted() {
    let settings = steadiness_settings(
        &profile_with(|p| {
            p.avg_jitter_px = 40.0;
            p.avg_tap_duration_ms = 20.0;
            p.avg_pressure = 0.95;
        }),
        &NullSink,
    );
    assert_eq!(settings.maze_complexity, MazeComplexity::Medium);
}

#[test]
fn fired_rules_emit_events_for_this_game_only() {
    let sink = MemorySink::new();
    let profile = profile_with(|p| {
        p.avg_jitter_px = 11.0;
        p.avg_tap_duration_ms = 50.0;
        p.avg_pressure = 0.8;
    });

    steadiness_settings(&profile, &sink);

    let events = sink.recorded();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.game == GameKind::Steadiness));
    let rules: Vec<&str> = events.iter().map(|e| e.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec![
            "jitter_path_width",
            "tap_duration_stop_signal",
            "pressure_tremor_tolerance"
        ]
    );
}
