//! Steadiness / motor-inhibition game: trace a maze path, honor stop signals.

use serde::{Deserialize, Serialize};

use super::events::{AdjustmentEvent, AdjustmentSink};
use super::GameKind;
use crate::profiles::CalibrationProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MazeComplexity {
    Easy,
    Medium,
    Hard,
}

/// Parameters the steadiness game reads once at start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SteadinessSettings {
    pub path_width: f64,
    pub tremor_tolerance: f64,
    /// How long a stop signal stays on screen, in milliseconds.
    pub stop_signal_duration: u32,
    pub maze_complexity: MazeComplexity,
}

impl Default for SteadinessSettings {
    fn default() -> Self {
        Self {
            path_width: 60.0,
            tremor_tolerance: 5.0,
            stop_signal_duration: 2000,
            maze_complexity: MazeComplexity::Medium,
        }
    }
}

/// Derives steadiness-game settings from the calibration profile.
///
/// Tremor beyond 5px widens the traced path, tap duration shifts the stop
/// signal window (short and long taps are mutually exclusive branches), and
/// firm pressure earns extra tremor tolerance.
pub fn steadiness_settings(
    profile: &CalibrationProfile,
    sink: &dyn AdjustmentSink,
) -> SteadinessSettings {
    let mut settings = SteadinessSettings::default();

    if profile.avg_jitter_px > 5.0 {
        let widened = settings.path_width + profile.avg_jitter_px * 3.0;
        sink.record(
            AdjustmentEvent::new(GameKind::Steadiness, "jitter_path_width").with_change(
                "pathWidth",
                settings.path_width,
                widened,
            ),
        );
        settings.path_width = widened;
    }

    if profile.avg_tap_duration_ms < 100.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Steadiness, "tap_duration_stop_signal").with_change(
                "stopSignalDuration",
                settings.stop_signal_duration,
                1500,
            ),
        );
        settings.stop_signal_duration = 1500;
    } else if profile.avg_tap_duration_ms > 300.0 {
        sink.record(
            AdjustmentEvent::new(GameKind::Steadiness, "tap_duration_stop_signal").with_change(
                "stopSignalDuration",
                settings.stop_signal_duration,
                2500,
            ),
        );
        settings.stop_signal_duration = 2500;
    }

    if profile.avg_pressure > 0.7 {
        let raised = settings.tremor_tolerance + 5.0;
        sink.record(
            AdjustmentEvent::new(GameKind::Steadiness, "pressure_tremor_tolerance").with_change(
                "tremorTolerance",
                settings.tremor_tolerance,
                raised,
            ),
        );
        settings.tremor_tolerance = raised;
    }

    settings
}
