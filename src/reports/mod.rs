//! Profile summary labels and the aggregated adaptation report.

pub mod render;

pub use render::render_report_text;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adaptation::{
    aim_settings, gaze_settings, reaction_settings, steadiness_settings, AdjustmentSink,
    AimSettings, GazeSettings, ReactionSettings, SteadinessSettings,
};
use crate::profiles::CalibrationProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MotorStability {
    Excellent,
    Good,
    #[serde(rename = "Needs Support")]
    NeedsSupport,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseSpeed {
    Fast,
    Average,
    Slow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImpulseControl {
    Excellent,
    Good,
    Developing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VisualTracking {
    Excellent,
    Good,
    #[serde(rename = "Needs Support")]
    NeedsSupport,
}

/// Qualitative read of the raw profile, bundled with it for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub motor_stability: MotorStability,
    pub response_speed: ResponseSpeed,
    pub impulse_control: ImpulseControl,
    pub visual_tracking: VisualTracking,
    pub profile: CalibrationProfile,
}

/// One settings object per game, derived from the same profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSettingsBundle {
    pub aim: AimSettings,
    pub steadiness: SteadinessSettings,
    pub reaction: ReactionSettings,
    pub gaze: GazeSettings,
}

/// Full report handed to the summary/dashboard view. Built fresh per call,
/// never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationReport {
    pub profile_summary: ProfileSummary,
    pub game_settings: GameSettingsBundle,
    pub generated_at: DateTime<Utc>,
}

/// Buckets the raw profile into the four qualitative labels. The profile
/// itself is never mutated.
pub fn summarize_profile(profile: &CalibrationProfile) -> ProfileSummary {
    ProfileSummary {
        motor_stability: motor_stability(profile.avg_jitter_px),
        response_speed: response_speed(profile.response_latency_ms),
        impulse_control: impulse_control(profile.inhibition_errors),
        visual_tracking: visual_tracking(profile.gaze_accuracy_px),
        profile: profile.clone(),
    }
}

/// Builds the full report: summary labels plus one settings object per game,
/// each getter invoked exactly once, stamped with the build time.
pub fn build_report(profile: &CalibrationProfile, sink: &dyn AdjustmentSink) -> AdaptationReport {
    AdaptationReport {
        profile_summary: summarize_profile(profile),
        game_settings: GameSettingsBundle {
            aim: aim_settings(profile, sink),
            steadiness: steadiness_settings(profile, sink),
            reaction: reaction_settings(profile, sink),
            gaze: gaze_settings(profile, sink),
        },
        generated_at: Utc::now(),
    }
}

fn motor_stability(jitter_px: f64) -> MotorStability {
    if jitter_px < 8.0 {
        MotorStability::Excellent
    } else if jitter_px < 15.0 {
        MotorStability::Good
    } else {
        MotorStability::NeedsSupport
    }
}

fn response_speed(latency_ms: f64) -> ResponseSpeed {
    if latency_ms < 350.0 {
        ResponseSpeed::Fast
    } else if latency_ms < 550.0 {
        ResponseSpeed::Average
    } else {
        ResponseSpeed::Slow
    }
}

fn impulse_control(errors: u32) -> ImpulseControl {
    if errors == 0 {
        ImpulseControl::Excellent
    } else if errors < 2 {
        ImpulseControl::Good
    } else {
        ImpulseControl::Developing
    }
}

fn visual_tracking(gaze_accuracy_px: f64) -> VisualTracking {
    if gaze_accuracy_px < 25.0 {
        VisualTracking::Excellent
    } else if gaze_accuracy_px < 40.0 {
        VisualTracking::Good
    } else {
        VisualTracking::NeedsSupport
    }
}
