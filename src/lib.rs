pub mod adaptation;
pub mod config;
pub mod profiles;
pub mod reports;

// Re-export commonly used types for convenience.
pub use adaptation::{AdjustmentEvent, AdjustmentSink, MemorySink, NullSink};
pub use config::AppConfig;
pub use profiles::{resolve_profile, CalibrationProfile, CalibrationSnapshot, ProfileStore};
pub use reports::{build_report, AdaptationReport};
