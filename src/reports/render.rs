//! Plain-text rendering of an adaptation report for the dashboard view.

use std::fmt;

use super::{AdaptationReport, ImpulseControl, MotorStability, ResponseSpeed, VisualTracking};

impl fmt::Display for MotorStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MotorStability::Excellent => "Excellent",
            MotorStability::Good => "Good",
            MotorStability::NeedsSupport => "Needs Support",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ResponseSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResponseSpeed::Fast => "Fast",
            ResponseSpeed::Average => "Average",
            ResponseSpeed::Slow => "Slow",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ImpulseControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImpulseControl::Excellent => "Excellent",
            ImpulseControl::Good => "Good",
            ImpulseControl::Developing => "Developing",
        };
        f.write_str(label)
    }
}

impl fmt::Display for VisualTracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VisualTracking::Excellent => "Excellent",
            VisualTracking::Good => "Good",
            VisualTracking::NeedsSupport => "Needs Support",
        };
        f.write_str(label)
    }
}

/// Renders the report as display lines: the four labels, then the headline
/// parameters of each game.
pub fn render_report_text(report: &AdaptationReport) -> String {
    let summary = &report.profile_summary;
    let games = &report.game_settings;
    let mut lines = Vec::new();
    lines.push(format!(
        "Adaptation report ({})",
        report.generated_at.to_rfc3339()
    ));
    lines.push(format!("Motor stability: {}", summary.motor_stability));
    lines.push(format!("Response speed: {}", summary.response_speed));
    lines.push(format!("Impulse control: {}", summary.impulse_control));
    lines.push(format!("Visual tracking: {}", summary.visual_tracking));
    lines.push(format!(
        "Aim: target size {:.0}, pace {:.2}, distractions {:?}",
        games.aim.target_size, games.aim.game_speed, games.aim.distraction_level
    ));
    lines.push(format!(
        "Steadiness: path width {:.0}, tolerance {:.0}, stop signal {} ms",
        games.steadiness.path_width,
        games.steadiness.tremor_tolerance,
        games.steadiness.stop_signal_duration
    ));
    lines.push(format!(
        "Reaction: gravity {:.2}, bomb probability {:.2}, combo window {} ms",
        games.reaction.gravity, games.reaction.bomb_probability, games.reaction.combo_window_ms
    ));
    lines.push(format!(
        "Gaze: fly size {:.0}, assist radius {:.0}, pattern {:?}, flies {}",
        games.gaze.fly_size,
        games.gaze.gaze_assist_radius,
        games.gaze.fly_movement_pattern,
        games.gaze.multiply_flies
    ));
    lines.join("\n")
}
