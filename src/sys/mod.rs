//! Platform-specific microphone permission implementations.

#[cfg(any(target_os = "ios", target_os = "macos"))]
mod apple;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
mod linux;

/// Boxed one-shot completion callback handed to the platform layer.
pub(crate) type RequestCallback = Box<dyn FnOnce(bool) + Send + 'static>;

// Re-export platform implementations
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub(crate) use apple::{check, open_settings, request};

#[cfg(target_os = "android")]
pub(crate) use android::{check, open_settings, request};

#[cfg(target_os = "windows")]
pub(crate) use windows::{check, open_settings, request};

#[cfg(target_os = "linux")]
pub(crate) use linux::{check, open_settings, request};

// Fallback for unsupported platforms (compile-time stub)
#[cfg(not(any(
    target_os = "ios",
    target_os = "macos",
    target_os = "android",
    target_os = "windows",
    target_os = "linux"
)))]
pub(crate) fn check() -> crate::PermissionState {
    crate::PermissionState::Undetermined
}

#[cfg(not(any(
    target_os = "ios",
    target_os = "macos",
    target_os = "android",
    target_os = "windows",
    target_os = "linux"
)))]
pub(crate) fn request(on_result: RequestCallback) {
    log::warn!("microphone permission is not supported on this platform");
    on_result(false);
}

#[cfg(not(any(
    target_os = "ios",
    target_os = "macos",
    target_os = "android",
    target_os = "windows",
    target_os = "linux"
)))]
pub(crate) fn open_settings() -> std::io::Result<()> {
    Ok(())
}
