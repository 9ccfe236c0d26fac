//! Linux implementation.
//!
//! There is no runtime microphone consent on traditional Linux: access is
//! governed by device-node permissions (the `audio` group) and, for
//! sandboxed apps, by Flatpak/Snap portals that front their own dialogs.
//! Outside a sandbox the process either can open the capture device or it
//! cannot, so this module reports the implicit grant.

use crate::PermissionState;

pub(crate) fn check() -> PermissionState {
    PermissionState::Granted
}

pub(crate) fn request(on_result: super::RequestCallback) {
    // No prompt to show; the decision was made at the OS level.
    on_result(true);
}

pub(crate) fn open_settings() -> std::io::Result<()> {
    // No desktop-agnostic microphone privacy page exists.
    Ok(())
}
