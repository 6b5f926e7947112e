pub mod aim;
pub mod events;
pub mod gaze;
pub mod reaction;
pub mod steadiness;

pub use aim::{aim_settings, AimSettings, DistractionLevel};
pub use events::{
    AdjustmentEvent, AdjustmentLog, AdjustmentSink, FieldChange, MemorySink, NullSink,
};
pub use gaze::{gaze_settings, FlyMovementPattern, GazeSettings};
pub use reaction::{reaction_settings, ReactionSettings};
pub use steadiness::{steadiness_settings, MazeComplexity, SteadinessSettings};

use serde::{Deserialize, Serialize};

/// Mini-game a settings getter or adjustment decision belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Aim,
    Steadiness,
    Reaction,
    Gaze,
}
