//! Data structures describing a child's calibration baseline.
//!
//! The profile is measured once per session by the calibration activities and
//! then read any number of times by the per-game settings getters and the
//! report builder. It is replaced on recalibration, never mutated in place.

use serde::{Deserialize, Serialize};

/// Qualitative visual processing speed bucket assigned during calibration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VisualProcessingSpeed {
    Slow,
    Medium,
    Fast,
}

impl Default for VisualProcessingSpeed {
    fn default() -> Self {
        Self::Medium
    }
}

/// Measured motor/cognitive/visual baseline for one user.
///
/// Serialized with the camelCase field names the persisted JSON document and
/// the game clients use. Missing fields deserialize to the baseline defaults,
/// so a partial document degrades field-by-field instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CalibrationProfile {
    /// Mean press duration in milliseconds.
    pub avg_tap_duration_ms: f64,
    /// Positional tremor magnitude in pixels.
    pub avg_jitter_px: f64,
    /// Mean touch/contact force, 0 to 1.
    pub avg_pressure: f64,
    /// Mean reaction time in milliseconds.
    pub response_latency_ms: f64,
    /// Count of impulsive wrong responses during calibration.
    pub inhibition_errors: u32,
    /// Mean eye-tracking offset in pixels.
    pub gaze_accuracy_px: f64,
    pub visual_processing_speed: VisualProcessingSpeed,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            avg_tap_duration_ms: 150.0,
            avg_jitter_px: 8.0,
            avg_pressure: 0.6,
            response_latency_ms: 400.0,
            inhibition_errors: 1,
            gaze_accuracy_px: 30.0,
            visual_processing_speed: VisualProcessingSpeed::Medium,
        }
    }
}

/// Transient calibration result produced earlier in the session, before any
/// profile has been persisted. Field names follow the calibration activities'
/// own output; each maps onto the corresponding profile field, with the
/// baseline default substituted when a measurement is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalibrationSnapshot {
    pub avg_tap_duration: Option<f64>,
    pub avg_jitter: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub avg_response_time: Option<f64>,
    pub inhibition_errors: Option<u32>,
    pub gaze_accuracy: Option<f64>,
    pub visual_processing_speed: Option<VisualProcessingSpeed>,
}

impl CalibrationSnapshot {
    /// Completes the snapshot into a full profile, field by field.
    pub fn into_profile(self) -> CalibrationProfile {
        let defaults = CalibrationProfile::default();
        CalibrationProfile {
            avg_tap_duration_ms: self.avg_tap_duration.unwrap_or(defaults.avg_tap_duration_ms),
            avg_jitter_px: self.avg_jitter.unwrap_or(defaults.avg_jitter_px),
            avg_pressure: self.avg_pressure.unwrap_or(defaults.avg_pressure),
            response_latency_ms: self.avg_response_time.unwrap_or(defaults.response_latency_ms),
            inhibition_errors: self.inhibition_errors.unwrap_or(defaults.inhibition_errors),
            gaze_accuracy_px: self.gaze_accuracy.unwrap_or(defaults.gaze_accuracy_px),
            visual_processing_speed: self
                .visual_processing_speed
                .unwrap_or(defaults.visual_processing_speed),
        }
    }
}
