//! Cross-platform microphone permission handling.
//!
//! This crate provides a unified API for checking and requesting microphone
//! access across iOS, macOS, Android, Windows, and Linux. The OS owns the
//! permission: it persists the user's decision and shows its consent dialog
//! at most once per app lifetime, so this crate is a thin adapter over the
//! native tri-state value.
//!
//! # Usage
//!
//! ```ignore
//! use mic_permission::PermissionState;
//!
//! match mic_permission::check() {
//!     PermissionState::Granted => { /* start recording */ }
//!     PermissionState::Undetermined => {
//!         mic_permission::request(|granted| {
//!             // runs exactly once, on a thread chosen by the OS
//!             println!("granted: {granted}");
//!         });
//!     }
//!     PermissionState::Denied => {
//!         // the OS will not re-prompt; send the user to settings instead
//!         mic_permission::open_settings().ok();
//!     }
//! }
//! ```

#![warn(missing_docs)]

/// Platform-specific implementations.
pub mod sys;

/// The current microphone authorization status, as reported by the OS.
///
/// This is a transient value re-read from the OS on every query; nothing is
/// cached. The transition `Undetermined -> {Denied, Granted}` is one-way and
/// performed entirely by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionState {
    /// The user has not been asked yet; a request will show the consent dialog.
    Undetermined,
    /// Access is not authorized: user denial, a platform restriction, or any
    /// OS-level failure to present the dialog.
    Denied,
    /// The user has granted access.
    Granted,
}

impl PermissionState {
    /// Whether microphone access is currently authorized.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Check the current microphone permission without prompting the user.
///
/// Reads the live OS value synchronously; never blocks and never shows UI.
#[must_use]
pub fn check() -> PermissionState {
    let state = sys::check();
    log::debug!("microphone permission: {state:?}");
    state
}

/// Request microphone permission from the user.
///
/// If the OS has already resolved the permission, `on_result` is invoked with
/// that resolution and no dialog is shown. Otherwise the OS presents its
/// consent dialog once and reports the user's choice. Either way the callback
/// runs exactly once, with `true` iff access is authorized.
///
/// The callback executes on a thread chosen by the OS; hand off to your own
/// executor or UI context inside the callback if you need one. There is no
/// cancellation and no timeout: user interaction is unbounded.
pub fn request<F>(on_result: F)
where
    F: FnOnce(bool) + Send + 'static,
{
    sys::request(Box::new(on_result));
}

/// Request microphone permission and await the outcome.
///
/// Equivalent to [`request`], with the single resolution delivered through a
/// oneshot channel instead of a callback.
pub async fn request_async() -> bool {
    let (tx, rx) = futures::channel::oneshot::channel();
    request(move |granted| {
        let _ = tx.send(granted);
    });
    rx.await.unwrap_or(false)
}

/// Open the OS settings page for microphone privacy.
///
/// The OS never re-prompts after a denial; this is the supported path for the
/// user to reverse one. No-op on platforms without a per-app microphone
/// setting.
///
/// # Errors
/// Returns an error if the settings process could not be spawned.
pub fn open_settings() -> std::io::Result<()> {
    sys::open_settings()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_granted_only_for_granted() {
        assert!(PermissionState::Granted.is_granted());
        assert!(!PermissionState::Denied.is_granted());
        assert!(!PermissionState::Undetermined.is_granted());
    }

    #[test]
    fn check_is_idempotent() {
        assert_eq!(check(), check());
    }

    // Platforms without a runtime consent dialog resolve requests
    // immediately, which makes the exactly-once contract observable.
    #[cfg(any(target_os = "linux", target_os = "windows"))]
    mod implicit_grant {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        use super::super::*;

        #[test]
        fn request_fires_callback_once_with_true() {
            let calls = Arc::new(AtomicUsize::new(0));
            let seen = Arc::clone(&calls);
            request(move |granted| {
                assert!(granted);
                seen.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn request_async_resolves_true() {
            assert!(request_async().await);
        }

        #[test]
        fn check_after_request_is_determined() {
            request(|_| {});
            assert_ne!(check(), PermissionState::Undetermined);
        }
    }
}
