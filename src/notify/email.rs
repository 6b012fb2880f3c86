use super::Notifier;
use crate::model::{Assignment, Employee};

/// Email channel.
#[derive(Debug, Clone, Default)]
pub struct EmailNotifier {
    sent: Vec<String>,
}

impl EmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(employee: &Employee, assignment: &Assignment) -> String {
        format!(
            "Email to {}: Hi {}, your seat is {} ({}).",
            employee.email, employee.name, assignment.seat_id, assignment.location
        )
    }
}

impl Notifier for EmailNotifier {
    fn channel(&self) -> &str {
        "email"
    }

    fn send_seat_assignment(&mut self, employee: &Employee, assignment: &Assignment) {
        self.sent.push(Self::format(employee, assignment));
    }

    fn sent_messages(&self) -> &[String] {
        &self.sent
    }
}
