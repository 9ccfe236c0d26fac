//! Android implementation over the `RECORD_AUDIO` runtime permission.
//!
//! Every JNI call needs an Activity, which only the embedding application
//! holds. The plain `check`/`request` entry points therefore degrade: without
//! an Activity the OS cannot be reached, so `check` reports `Undetermined`
//! and `request` completes with `false`. Applications drive the real flow
//! with [`check_with_activity`] and [`request_with_activity`], and forward
//! `Activity.onRequestPermissionsResult` to [`notify_request_result`].

use std::sync::Mutex;

use jni::JNIEnv;
use jni::objects::{JObject, JValue};

use super::RequestCallback;
use crate::PermissionState;

const RECORD_AUDIO: &str = "android.permission.RECORD_AUDIO";

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: i32 = 0;

/// Request code passed to `Activity.requestPermissions`; echoed back in
/// `onRequestPermissionsResult`.
pub const REQUEST_CODE: i32 = 0x4d49_4352;

/// Callback parked between `requestPermissions` and the Activity round-trip.
static PENDING: Mutex<Option<RequestCallback>> = Mutex::new(None);

pub(crate) fn check() -> PermissionState {
    // Without an Activity the permission cannot be read.
    PermissionState::Undetermined
}

pub(crate) fn request(on_result: RequestCallback) {
    log::warn!("microphone permission requested without an Activity; use request_with_activity");
    on_result(false);
}

pub(crate) fn open_settings() -> std::io::Result<()> {
    // Needs an Activity to fire ACTION_APPLICATION_DETAILS_SETTINGS; the
    // embedding app is better placed to launch that intent itself.
    Ok(())
}

/// Check the `RECORD_AUDIO` permission through an Activity.
///
/// `checkSelfPermission` cannot tell a prior denial from a never-asked state;
/// the rationale flag disambiguates the two the same way the platform's own
/// permission helpers do. One gap is inherent to Android: after a permanent
/// denial ("don't ask again") the rationale flag is `false` again, so that
/// state also reads as `Undetermined`. A request from it resolves `false`
/// without a dialog, which is how the resolved state becomes observable.
///
/// # Errors
/// Returns a JNI error when the Activity calls fail.
pub fn check_with_activity(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
) -> jni::errors::Result<PermissionState> {
    let permission = env.new_string(RECORD_AUDIO)?;
    let granted = env
        .call_method(
            activity,
            "checkSelfPermission",
            "(Ljava/lang/String;)I",
            &[JValue::Object(&permission)],
        )?
        .i()?;
    if granted == PERMISSION_GRANTED {
        return Ok(PermissionState::Granted);
    }

    let rationale = env
        .call_method(
            activity,
            "shouldShowRequestPermissionRationale",
            "(Ljava/lang/String;)Z",
            &[JValue::Object(&permission)],
        )?
        .z()?;
    Ok(if rationale {
        PermissionState::Denied
    } else {
        PermissionState::Undetermined
    })
}

/// Request the `RECORD_AUDIO` permission through an Activity.
///
/// When the permission is already resolved the callback completes
/// immediately from the current state and no dialog is shown. Otherwise the
/// system dialog is triggered and the outcome arrives in
/// `Activity.onRequestPermissionsResult`, which the application must forward
/// to [`notify_request_result`] for the callback to fire.
///
/// # Errors
/// Returns a JNI error when the Activity calls fail; the callback is then
/// completed with `false` before the error is returned.
pub fn request_with_activity<F>(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
    on_result: F,
) -> jni::errors::Result<()>
where
    F: FnOnce(bool) + Send + 'static,
{
    let state = match check_with_activity(env, activity) {
        Ok(state) => state,
        Err(e) => {
            // The permission could not even be read; the caller still gets
            // its one completion.
            on_result(false);
            return Err(e);
        }
    };
    match state {
        PermissionState::Granted => {
            on_result(true);
            return Ok(());
        }
        PermissionState::Denied => {
            on_result(false);
            return Ok(());
        }
        PermissionState::Undetermined => {}
    }

    // A superseded in-flight request still owes its caller a completion;
    // resolve it as a denial outside the lock.
    let stale = PENDING
        .lock()
        .ok()
        .and_then(|mut pending| pending.replace(Box::new(on_result)));
    if let Some(stale) = stale {
        stale(false);
    }

    let result = (|| {
        let permission = env.new_string(RECORD_AUDIO)?;
        let string_class = env.find_class("java/lang/String")?;
        let permissions = env.new_object_array(1, string_class, &permission)?;
        env.call_method(
            activity,
            "requestPermissions",
            "([Ljava/lang/String;I)V",
            &[JValue::Object(&permissions), JValue::Int(REQUEST_CODE)],
        )?;
        Ok(())
    })();

    if result.is_err() {
        // The dialog never went up; resolve the callback as a denial.
        notify_request_result(false);
    }
    result
}

/// Deliver the outcome of `Activity.onRequestPermissionsResult`.
///
/// Fires the callback registered by [`request_with_activity`] exactly once;
/// further calls with no request in flight are no-ops.
pub fn notify_request_result(granted: bool) {
    if let Some(on_result) = PENDING.lock().ok().and_then(|mut p| p.take()) {
        on_result(granted);
    }
}
