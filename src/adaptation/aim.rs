//! Aim / sustained-attention game: steer a water stream onto moving targets.

use serde::{Deserialize, Serialize};

use super::events::{AdjustmentEvent, AdjustmentSink};
use super::GameKind;
use crate::profiles::CalibrationProfile;

/// Density of decorative distractions around the play field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DistractionLevel {
    None,
    Low,
    Medium,
    High,
}

/// Parameters the aim game reads once at start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AimSettings {
    pub target_size: f64,
    pub water_stream_speed: f64,
    pub target_movement_speed: f64,
    pub distraction_level: DistractionLevel,
    pub game_speed: f64,
}

impl Default for AimSettings {
    fn default() -> Self {
        Self {
            target_size: 50.0,
            water_stream_speed: 10.0,
            target_movement_speed: 2.0,
            distraction_level: DistractionLevel::Low,
            game_speed: 1.0,
        }
    }
}

/// Derives aim-game settings from the calibration profile.
///
/// Tremor beyond 10px widens the targets proportionally, slow reactions slow
/// the whole game down (never below 60% pace), and markedly impulsive players
/// get the distractions removed entirely.
pub fn aim_settings(profile: &CalibrationProfile, sink: &dyn AdjustmentSink) -> AimSettings {
    let mut settings = AimSettings::default();

    if profile.avg_jitter_px > 10.0 {
        let widened = settings.target_size + (profile.avg_jitter_px - 10.0) * 2.0;
        sink.record(
            AdjustmentEvent::new(GameKind::Aim, "jitter_target_size").with_change(
                "targetSize",
                settings.target_size,
                widened,
            ),
        );
        settings.target_size = widened;
    }

    if profile.response_latency_ms > 500.0 {
        // Slowdown factor is bounded below at 0.6 so the game never drops
        // under 60% of its normal pace.
        let slowdown = (500.0 / profile.response_latency_ms).max(0.6);
        let slowed = settings.target_movement_speed * slowdown;
        sink.record(
            AdjustmentEvent::new(GameKind::Aim, "latency_slowdown")
                .with_change(
                    "targetMovementSpeed",
                    settings.target_movement_speed,
                    slowed,
                )
                .with_change("gameSpeed", settings.game_speed, slowdown),
        );
        settings.target_movement_speed = slowed;
        settings.game_speed = slowdown;
    }

    if profile.inhibition_errors > 3 {
        sink.record(
            AdjustmentEvent::new(GameKind::Aim, "impulsivity_distraction").with_change(
                "distractionLevel",
                settings.distraction_level,
                DistractionLevel::None,
            ),
        );
        settings.distraction_level = DistractionLevel::None;
    } else if profile.inhibition_errors > 1 {
        settings.distraction_level = DistractionLevel::Low;
    }

    settings
}
