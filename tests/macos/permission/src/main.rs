//! macOS test for mic-permission
//!
//! Run with: cargo run -p mic-permission-test

use mic_permission::PermissionState;

#[tokio::main]
async fn main() {
    println!("=== Microphone Permission Test ===\n");

    let before = mic_permission::check();
    println!("Current state: {before:?}");

    if before == PermissionState::Denied {
        println!("Access was denied earlier; opening the privacy settings pane");
        if let Err(e) = mic_permission::open_settings() {
            println!("Failed to open settings: {e}");
        }
        return;
    }

    println!("Requesting access (dialog appears only when undetermined)...");
    let granted = mic_permission::request_async().await;
    println!("Request resolved: granted = {granted}");

    let after = mic_permission::check();
    println!("State after request: {after:?}");
    assert_ne!(after, PermissionState::Undetermined, "request must settle the state");
    assert_eq!(after.is_granted(), granted, "query and callback must agree");

    println!("\n=== Test Complete ===");
}
