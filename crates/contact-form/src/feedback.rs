//! Feedback state: the response message region and the submit control.
//!
//! A shown message stays visible until it is replaced, hidden, or its
//! [`HideTicket`] expires. Tickets carry the generation of the message they
//! were issued for, so a timer started for an older message never hides a
//! newer one.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Success,
    Error,
}

impl MessageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageCategory::Success => "success",
            MessageCategory::Error => "error",
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message currently held by the response region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    pub text: String,
    pub category: MessageCategory,
    pub visible: bool,
}

/// Token for hiding a specific message once its display time is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Feedback {
    message: Option<ResponseMessage>,
    generation: u64,
}

impl Feedback {
    pub fn message(&self) -> Option<&ResponseMessage> {
        self.message.as_ref()
    }

    /// Visible message text, if any
    pub fn visible_text(&self) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| m.visible)
            .map(|m| m.text.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.visible_text().is_some()
    }

    /// Replace the current message and make it visible
    pub fn show(&mut self, text: impl Into<String>, category: MessageCategory) -> HideTicket {
        self.generation += 1;
        self.message = Some(ResponseMessage {
            text: text.into(),
            category,
            visible: true,
        });
        HideTicket(self.generation)
    }

    /// Hide whatever is shown; text and category stay for the fade-out
    pub fn hide(&mut self) {
        if let Some(message) = self.message.as_mut() {
            message.visible = false;
        }
    }

    /// Hide the message the ticket was issued for
    ///
    /// Returns false when a newer message has replaced it.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Ignoring stale auto-hide"
            );
            return false;
        }
        self.hide();
        true
    }

    /// CSS class list for the region, e.g. `message error show`
    pub fn class_name(&self) -> String {
        match &self.message {
            Some(m) if m.visible => format!("message {} show", m.category),
            Some(m) => format!("message {}", m.category),
            None => "message".to_string(),
        }
    }
}

/// Submit button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitControl {
    loading: bool,
}

impl SubmitControl {
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_disabled(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut feedback = Feedback::default();
        let ticket = feedback.show("Message sent successfully!", MessageCategory::Success);
        assert_eq!(feedback.visible_text(), Some("Message sent successfully!"));
        assert_eq!(feedback.class_name(), "message success show");

        assert!(feedback.expire(ticket));
        assert!(!feedback.is_visible());
        assert_eq!(feedback.class_name(), "message success");
    }

    #[test]
    fn test_stale_ticket_keeps_newer_message() {
        let mut feedback = Feedback::default();
        let first = feedback.show("Please correct the errors above", MessageCategory::Error);
        let second = feedback.show("Message sent successfully!", MessageCategory::Success);

        assert!(!feedback.expire(first));
        assert_eq!(feedback.visible_text(), Some("Message sent successfully!"));

        assert!(feedback.expire(second));
        assert!(!feedback.is_visible());
    }

    #[test]
    fn test_empty_region_class() {
        assert_eq!(Feedback::default().class_name(), "message");
    }

    #[test]
    fn test_submit_control() {
        let mut submit = SubmitControl::default();
        assert!(!submit.is_disabled());
        submit.set_loading(true);
        assert!(submit.is_loading() && submit.is_disabled());
        submit.set_loading(false);
        assert!(!submit.is_loading() && !submit.is_disabled());
    }
}
