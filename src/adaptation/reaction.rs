//! Reaction / impulse-control game: catch falling fruit, leave the bombs.

use serde::{Deserialize, Serialize};

use super::events::{AdjustmentEvent, AdjustmentSink};
use super::GameKind;
use crate::profiles::CalibrationProfile;

/// Parameters the reaction game reads once at start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSettings {
    pub gravity: f64,
    pub bomb_probability: f64,
    pub bomb_visual_distinctness: f64,
    pub combo_window_ms: u32,
    /// Milliseconds between spawns.
    pub spawn_rate: u32,
}

impl Default for ReactionSettings {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            bomb_probability: 0.2,
            bomb_visual_distinctness: 1.0,
            combo_window_ms: 300,
            spawn_rate: 1000,
        }
    }
}

/// Derives reaction-game settings from the calibration profile.
///
/// Reaction time shifts fall speed and spawn pacing in opposite directions,
/// impulsivity makes bombs rarer and more distinct (while error-free players
/// see more of them), and tap duration sets the combo window.
pub fn reaction_settings(
    profile: &CalibrationProfile,
    sink: &dyn AdjustmentSink,
) -> ReactionSettings {
    let mut settings = ReactionSettings::default();

    if profile.response_latency_ms > 600.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Reaction, "latency_pace")
                .with_change("gravity", settings.gravity, 0.3)
                .with_change("spawnRate", settings.spawn_rate, 1200),
        );
        settings.gravity = 0.3;
        settings.spawn_rate = 1200;
    } else if profile.response_latency_ms < 300.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Reaction, "latency_pace")
                .with_change("gravity", settings.gravity, 0.7)
                .with_change("spawnRate", settings.spawn_rate, 800),
        );
        settings.gravity = 0.7;
        settings.spawn_rate = 800;
    }

    if profile.inhibition_errors > 2 {
        sink.record(
            AdjustmentEvent::new(GameKind::Reaction, "impulsivity_bombs")
                .with_change(
                    "bombVisualDistinctness",
                    settings.bomb_visual_distinctness,
                    1.5,
                )
                .with_change("bombProbability", settings.bomb_probability, 0.15),
        );
        settings.bomb_visual_distinctness = 1.5;
        settings.bomb_probability = 0.15;
    } else if profile.inhibition_errors == 0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Reaction, "impulsivity_bombs").with_change(
                "bombProbability",
                settings.bomb_probability,
                0.25,
            ),
        );
        settings.bomb_probability = 0.25;
    }

    if profile.avg_tap_duration_ms < 100.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Reaction, "tap_duration_combo_window").with_change(
                "comboWindowMs",
                settings.combo_window_ms,
                200,
            ),
        );
        settings.combo_window_ms = 200;
    } else if profile.avg_tap_duration_ms > 300.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Reaction, "tap_duration_combo_window").with_change(
                "comboWindowMs",
                settings.combo_window_ms,
                400,
            ),
        );
        settings.combo_window_ms = 400;
    }

    settings
}
