pub mod model;
pub mod resolve;
pub mod store;

pub use model::{CalibrationProfile, CalibrationSnapshot, VisualProcessingSpeed};
pub use resolve::{load_profile, resolve_profile, save_profile, PROFILE_STORAGE_KEY};
pub use store::{FileProfileStore, MemoryProfileStore, ProfileStore};
