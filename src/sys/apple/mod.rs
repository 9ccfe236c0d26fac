//! Apple platform (iOS/macOS) implementation over AVFoundation.
//!
//! iOS reads `AVAudioSession.recordPermission`; macOS goes through
//! `AVCaptureDevice` audio authorization. Both surface the same tri-state,
//! translated in one place so the OS raw codes never leak past this module.

use std::sync::Mutex;

use block::ConcreteBlock;
#[cfg(target_os = "ios")]
use objc::runtime::Object;
use objc::runtime::{BOOL, YES};
use objc::{class, msg_send, sel, sel_impl};
#[cfg(target_os = "macos")]
use objc_foundation::{INSString, NSString};

use super::RequestCallback;
use crate::PermissionState;

#[link(name = "AVFoundation", kind = "framework")]
unsafe extern "C" {}

/// `AVAudioSession.RecordPermission` raw values (FourCC codes).
#[cfg(target_os = "ios")]
mod record_permission {
    use crate::PermissionState;

    pub const UNDETERMINED: i64 = 0x756e_6474; // 'undt'
    pub const DENIED: i64 = 0x6465_6e79; // 'deny'
    pub const GRANTED: i64 = 0x6772_6e74; // 'grnt'

    pub const fn to_state(raw: i64) -> PermissionState {
        match raw {
            UNDETERMINED => PermissionState::Undetermined,
            GRANTED => PermissionState::Granted,
            DENIED => PermissionState::Denied,
            // Unknown future values: no access, and asking will not help.
            _ => PermissionState::Denied,
        }
    }
}

/// `AVAuthorizationStatus` values for `+authorizationStatusForMediaType:`.
#[cfg(target_os = "macos")]
mod authorization_status {
    use crate::PermissionState;

    pub const NOT_DETERMINED: i64 = 0;
    pub const RESTRICTED: i64 = 1;
    pub const DENIED: i64 = 2;
    pub const AUTHORIZED: i64 = 3;

    pub const fn to_state(raw: i64) -> PermissionState {
        match raw {
            NOT_DETERMINED => PermissionState::Undetermined,
            AUTHORIZED => PermissionState::Granted,
            // Restricted (parental controls, MDM) folds into Denied: the
            // dialog cannot be shown and access will not be granted.
            RESTRICTED | DENIED => PermissionState::Denied,
            _ => PermissionState::Denied,
        }
    }
}

#[cfg(target_os = "ios")]
pub(crate) fn check() -> PermissionState {
    let raw: i64 = unsafe {
        let session: *mut Object = msg_send![class!(AVAudioSession), sharedInstance];
        msg_send![session, recordPermission]
    };
    record_permission::to_state(raw)
}

#[cfg(target_os = "macos")]
pub(crate) fn check() -> PermissionState {
    let raw: i64 = unsafe {
        let media_type = NSString::from_str("soun");
        msg_send![
            class!(AVCaptureDevice),
            authorizationStatusForMediaType: media_type
        ]
    };
    authorization_status::to_state(raw)
}

pub(crate) fn request(on_result: RequestCallback) {
    // Blocks are Fn and may outlive this frame; the Mutex<Option<..>> slot
    // turns the FnOnce into a take-once so the caller sees at most one
    // completion even if the OS were to misbehave.
    let slot = Mutex::new(Some(on_result));
    let block = ConcreteBlock::new(move |granted: BOOL| {
        if let Some(on_result) = slot.lock().ok().and_then(|mut s| s.take()) {
            on_result(granted == YES);
        }
    });
    let block = block.copy();

    unsafe {
        #[cfg(target_os = "ios")]
        {
            let session: *mut Object = msg_send![class!(AVAudioSession), sharedInstance];
            let _: () = msg_send![session, requestRecordPermission: &*block];
        }

        #[cfg(target_os = "macos")]
        {
            let media_type = NSString::from_str("soun");
            let _: () = msg_send![
                class!(AVCaptureDevice),
                requestAccessForMediaType: media_type
                completionHandler: &*block
            ];
        }
    }
}

#[cfg(target_os = "macos")]
pub(crate) fn open_settings() -> std::io::Result<()> {
    std::process::Command::new("open")
        .arg("x-apple.systempreferences:com.apple.preference.security?Privacy_Microphone")
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "ios")]
pub(crate) fn open_settings() -> std::io::Result<()> {
    // Opening app settings needs UIApplication on the main thread; the
    // embedding app is better placed to do that itself.
    Ok(())
}

#[cfg(test)]
mod tests {
    #[cfg(target_os = "ios")]
    mod record_permission {
        use crate::PermissionState;
        use crate::sys::apple::record_permission::*;

        #[test]
        fn maps_every_known_raw_code() {
            assert_eq!(to_state(UNDETERMINED), PermissionState::Undetermined);
            assert_eq!(to_state(DENIED), PermissionState::Denied);
            assert_eq!(to_state(GRANTED), PermissionState::Granted);
        }

        #[test]
        fn fourcc_raw_values() {
            assert_eq!(UNDETERMINED, 1_970_168_948);
            assert_eq!(DENIED, 1_684_369_017);
            assert_eq!(GRANTED, 1_735_552_628);
        }

        #[test]
        fn unknown_raw_code_is_denied() {
            assert_eq!(to_state(0), PermissionState::Denied);
            assert_eq!(to_state(-1), PermissionState::Denied);
        }
    }

    #[cfg(target_os = "macos")]
    mod authorization_status {
        use crate::PermissionState;
        use crate::sys::apple::authorization_status::*;

        #[test]
        fn maps_every_known_raw_code() {
            assert_eq!(to_state(NOT_DETERMINED), PermissionState::Undetermined);
            assert_eq!(to_state(RESTRICTED), PermissionState::Denied);
            assert_eq!(to_state(DENIED), PermissionState::Denied);
            assert_eq!(to_state(AUTHORIZED), PermissionState::Granted);
        }

        #[test]
        fn unknown_raw_code_is_denied() {
            assert_eq!(to_state(4), PermissionState::Denied);
            assert_eq!(to_state(-1), PermissionState::Denied);
        }
    }
}
