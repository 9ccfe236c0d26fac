//! Windows implementation.
//!
//! Classic desktop processes get microphone access without a runtime consent
//! dialog; the per-app toggle in Settings > Privacy applies to packaged
//! (UWP) apps only. This module reports that implicit grant and points
//! `open_settings` at the microphone privacy page.

use crate::PermissionState;

pub(crate) fn check() -> PermissionState {
    PermissionState::Granted
}

pub(crate) fn request(on_result: super::RequestCallback) {
    // Already resolved; no dialog exists to show.
    on_result(true);
}

pub(crate) fn open_settings() -> std::io::Result<()> {
    std::process::Command::new("cmd")
        .args(["/C", "start", "ms-settings:privacy-microphone"])
        .spawn()
        .map(|_| ())
}
