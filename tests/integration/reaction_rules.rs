use adaptplay::adaptation::{
    reaction_settings, steadiness_settings, NullSink, ReactionSettings,
};
use adaptplay::profiles::CalibrationProfile;

use crate::support::profile_with;

#[test]
fn baseline_profile_keeps_documented_base_values() {
    let settings = reaction_settings(&CalibrationProfile::default(), &NullSink);
    assert_eq!(settings, ReactionSettings::default());
    assert_eq!(settings.gravity, 0.5);
    assert_eq!(settings.bomb_probability, 0.2);
    assert_eq!(settings.bomb_visual_distinctness, 1.0);
    assert_eq!(settings.combo_window_ms, 300);
    assert_eq!(settings.spawn_rate, 1000);
}

#[test]
fn slow_reactions_soften_gravity_and_spawn_pacing() {
    let settings = reaction_settings(&profile_with(|p| p.response_latency_ms = 650.0), &NullSink);
    assert_eq!(settings.gravity, 0.3);
    assert_eq!(settings.spawn_rate, 1200);

    let settings = reaction_settings(&profile_with(|p| p.response_latency_ms = 600.0), &NullSink);
    assert_eq!(settings.gravity, 0.5, "Threshold is strict");
    assert_eq!(settings.spawn_rate, 1000);
}

#[test]
fn fast_reactions_intensify_gravity_and_spawn_pacing() {
    let settings = reaction_settings(&profile_with(|p| p.response_latency_ms = 250.0), &NullSink);
    assert_eq!(settings.gravity, 0.7);
    assert_eq!(settings.spawn_rate, 800);

    let settings = reaction_settings(&profile_with(|p| p.response_latency_ms = 300.0), &NullSink);
    assert_eq!(settings.gravity, 0.5, "Threshold is strict");
    assert_eq!(settings.spawn_rate, 1000);
}

#[test]
fn impulsive_players_get_rarer_more_distinct_bombs() {
    let settings = reaction_settings(&profile_with(|p| p.inhibition_errors = 3), &NullSink);
    assert_eq!(settings.bomb_visual_distinctness, 1.5);
    assert_eq!(settings.bomb_probability, 0.15);
}

#[test]
fn error_free_players_see_more_bombs() {
    let settings = reaction_settings(&profile_with(|p| p.inhibition_errors = 0), &NullSink);
    assert_eq!(settings.bomb_probability, 0.25);
    assert_eq!(settings.bomb_visual_distinctness, 1.0);
}

#[test]
fn single_error_keeps_base_bomb_parameters() {
    let settings = reaction_settings(&profile_with(|p| p.inhibition_errors = 1), &NullSink);
    assert_eq!(settings.bomb_probability, 0.2);
    assert_eq!(settings.bomb_visual_distinctness, 1.0);

    let settings = reaction_settings(&profile_with(|p| p.inhibition_errors = 2), &NullSink);
    assert_eq!(settings.bomb_probability, 0.2);
}

#[test]
fn tap_duration_sets_the_combo_window() {
    let settings = reaction_settings(&profile_with(|p| p.avg_tap_duration_ms = 50.0), &NullSink);
    assert_eq!(settings.combo_window_ms, 200);

    let settings = reaction_settings(&profile_with(|p| p.avg_tap_duration_ms = 350.0), &NullSink);
    assert_eq!(settings.combo_window_ms, 400);

    let settings = reaction_settings(&profile_with(|p| p.avg_tap_duration_ms = 150.0), &NullSink);
    assert_eq!(settings.combo_window_ms, 300);
}

#[test]
fn shared_tap_threshold_affects_both_games_consistently() {
    // The same 100ms tap-duration threshold drives the steadiness stop
    // signal and the reaction combo window; one profile must shift both.
    let profile = profile_with(|p| p.avg_tap_duration_ms = 50.0);

    let steadiness = steadiness_settings(&profile, &NullSink);
    let reaction = reaction_settings(&profile, &NullSink);
    assert_eq!(steadiness.stop_signal_duration, 1500);
    assert_eq!(reaction.combo_window_ms, 200);
}

#[test]
fn repeated_calls_are_deterministic() {
    let profile = profile_with(|p| {
        p.response_latency_ms = 650.0;
        p.inhibition_errors = 0;
        p.avg_tap_duration_ms = 350.0;
    });

    assert_eq!(
        reaction_settings(&profile, &NullSink),
        reaction_settings(&profile, &NullSink)
    );
}
