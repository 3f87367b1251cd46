// File: src/timer.rs
// Purpose: Auto-hide for response messages on native hosts (tokio)

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::controller::FormController;
use crate::feedback::HideTicket;

/// Hide the ticket's message once the configured delay has passed
///
/// Resolves to whether the message was hidden; a newer message or a poisoned
/// lock leaves the region untouched.
pub fn schedule_auto_hide(
    controller: Arc<Mutex<FormController>>,
    ticket: HideTicket,
) -> JoinHandle<bool> {
    let delay = match controller.lock() {
        Ok(guard) => guard.config().auto_hide(),
        Err(poisoned) => poisoned.into_inner().config().auto_hide(),
    };

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match controller.lock() {
            Ok(mut guard) => guard.expire_message(ticket),
            Err(_) => {
                tracing::warn!("Controller lock poisoned; message left visible");
                false
            }
        }
    })
}
