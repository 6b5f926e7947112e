//! Gaze / visual-attention game: follow and swat a fly with eye tracking.

use serde::{Deserialize, Serialize};

use super::events::{AdjustmentEvent, AdjustmentSink};
use super::GameKind;
use crate::profiles::{CalibrationProfile, VisualProcessingSpeed};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlyMovementPattern {
    Smooth,
    Predictable,
    Erratic,
}

/// Parameters the gaze game reads once at start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GazeSettings {
    pub fly_size: f64,
    pub fly_speed: f64,
    /// Tolerance zone around the fly compensating for eye-tracking offset.
    pub gaze_assist_radius: f64,
    pub fly_movement_pattern: FlyMovementPattern,
    pub multiply_flies: u32,
}

impl Default for GazeSettings {
    fn default() -> Self {
        Self {
            fly_size: 40.0,
            fly_speed: 5.0,
            gaze_assist_radius: 30.0,
            fly_movement_pattern: FlyMovementPattern::Smooth,
            multiply_flies: 1,
        }
    }
}

/// Derives gaze-game settings from the calibration profile.
///
/// Poor eye-tracking accuracy grows the assist radius (and very accurate
/// tracking shrinks it), visual pace picks one of two branches with the slow
/// branch checked first, and players who are both accurate and quick get a
/// second fly. The assist and multiplier rules are independent of the pace
/// branch and may apply together.
pub fn gaze_settings(profile: &CalibrationProfile, sink: &dyn AdjustmentSink) -> GazeSettings {
    let mut settings = GazeSettings::default();

    if profile.gaze_accuracy_px > 30.0 {
        let scaled = profile.gaze_accuracy_px * 1.2;
        sink.record(
            AdjustmentEvent::new(GameKind::Gaze, "gaze_assist_radius").with_change(
                "gazeAssistRadius",
                settings.gaze_assist_radius,
                scaled,
            ),
        );
        settings.gaze_assist_radius = scaled;
    } else if profile.gaze_accuracy_px < 15.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Gaze, "gaze_assist_radius").with_change(
                "gazeAssistRadius",
                settings.gaze_assist_radius,
                20.0,
            ),
        );
        settings.gaze_assist_radius = 20.0;
    }

    let needs_slow_pace = profile.response_latency_ms > 500.0
        || profile.visual_processing_speed == VisualProcessingSpeed::Slow;
    let handles_fast_pace = profile.response_latency_ms < 300.0
        || profile.visual_processing_speed == VisualProcessingSpeed::Fast;
    // Slow branch is checked first: a profile that is slow by latency but
    // fast by processing speed stays on the slow branch.
    if needs_slow_pace {
        sink.record(
            AdjustmentEvent::new(GameKind::Gaze, "visual_pace")
                .with_change("flySpeed", settings.fly_speed, 3.0)
                .with_change("flySize", settings.fly_size, 60.0)
                .with_change(
                    "flyMovementPattern",
                    settings.fly_movement_pattern,
                    FlyMovementPattern::Predictable,
                ),
        );
        settings.fly_speed = 3.0;
        settings.fly_size = 60.0;
        settings.fly_movement_pattern = FlyMovementPattern::Predictable;
    } else if handles_fast_pace {
        sink.record(
            AdjustmentEvent::new(GameKind::Gaze, "visual_pace")
                .with_change("flySpeed", settings.fly_speed, 7.0)
                .with_change("flySize", settings.fly_size, 30.0)
                .with_change(
                    "flyMovementPattern",
                    settings.fly_movement_pattern,
                    FlyMovementPattern::Erratic,
                ),
        );
        settings.fly_speed = 7.0;
        settings.fly_size = 30.0;
        settings.fly_movement_pattern = FlyMovementPattern::Erratic;
    }

    if profile.gaze_accuracy_px < 20.0 && profile.response_latency_ms < 400.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Gaze, "fly_multiplier").with_change(
                "multiplyFlies",
                settings.multiply_flies,
                2,
            ),
        );
        settings.multiply_flies = 2;
    }

    settings
}
