//! Boundary operations resolving a calibration profile for the session.
//!
//! Calibration availability is non-critical to playability, so nothing here
//! raises: a missing or unreadable stored profile resolves to the baseline
//! defaults, and a failed save is ignored.

use super::model::{CalibrationProfile, CalibrationSnapshot};
use super::store::ProfileStore;

/// Fixed key the profile document is stored under.
pub const PROFILE_STORAGE_KEY: &str = "calibrationProfile";

/// Resolves the profile for this session.
///
/// A transient calibration snapshot produced earlier in the session takes
/// precedence over persisted data (it is fresher); otherwise the stored
/// profile is loaded, falling back to defaults.
pub fn resolve_profile(
    store: &dyn ProfileStore,
    snapshot: Option<CalibrationSnapshot>,
) -> CalibrationProfile {
    match snapshot {
        Some(snapshot) => snapshot.into_profile(),
        None => load_profile(store),
    }
}

/// Loads the persisted profile, or the defaults when the key is missing or
/// the stored document does not parse.
pub fn load_profile(store: &dyn ProfileStore) -> CalibrationProfile {
    store
        .get(PROFILE_STORAGE_KEY)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Best-effort write of the profile under the fixed key. Storage failures
/// are swallowed; the next session simply resolves to defaults again.
pub fn save_profile(store: &dyn ProfileStore, profile: &CalibrationProfile) {
    if let Ok(value) = serde_json::to_value(profile) {
        let _ = store.put(PROFILE_STORAGE_KEY, value);
    }
}
