//! Outbound assignment notifications.
//!
//! Notifiers only format and record messages; delivery is out of scope.
//! The orchestrator calls every channel after a successful decision.

mod email;
mod message;

pub use email::EmailNotifier;
pub use message::MessageNotifier;

use crate::model::{Assignment, Employee};

/// A notification channel.
pub trait Notifier {
    /// Channel name used in logs.
    fn channel(&self) -> &str;

    /// Formats and records the message for one assignment.
    fn send_seat_assignment(&mut self, employee: &Employee, assignment: &Assignment);

    /// Every message sent so far, oldest first.
    fn sent_messages(&self) -> &[String];
}
