use super::Notifier;
use crate::model::{Assignment, Employee};

/// SMS channel. The message names floor and zone only.
#[derive(Debug, Clone, Default)]
pub struct MessageNotifier {
    sent: Vec<String>,
}

impl MessageNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(employee: &Employee, assignment: &Assignment) -> String {
        format!(
            "SMS to {}: Seat {} allocated in {}/{}.",
            employee.phone, assignment.seat_id, assignment.location.floor, assignment.location.zone
        )
    }
}

impl Notifier for MessageNotifier {
    fn channel(&self) -> &str {
        "sms"
    }

    fn send_seat_assignment(&mut self, employee: &Employee, assignment: &Assignment) {
        self.sent.push(Self::format(employee, assignment));
    }

    fn sent_messages(&self) -> &[String] {
        &self.sent
    }
}
