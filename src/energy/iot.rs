//! Device command delivery.

use crate::model::DeviceCommand;

/// Sink for zone power commands.
pub trait DeviceGateway {
    fn send_command(&mut self, command: DeviceCommand);
}

/// Records every command it is sent.
#[derive(Debug, Clone, Default)]
pub struct IoTDeviceClient {
    history: Vec<DeviceCommand>,
}

impl IoTDeviceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command_history(&self) -> &[DeviceCommand] {
        &self.history
    }
}

impl DeviceGateway for IoTDeviceClient {
    fn send_command(&mut self, command: DeviceCommand) {
        tracing::trace!(zone = %command.location, command = %command.command, "device command");
        self.history.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PowerCommand, ZoneKey};

    #[test]
    fn test_history_keeps_order() {
        let mut client = IoTDeviceClient::new();
        for (zone, command) in [("A", PowerCommand::PowerOn), ("B", PowerCommand::PowerOff)] {
            client.send_command(DeviceCommand {
                location: ZoneKey::new("B1", "F1", zone),
                command,
                reason: String::new(),
            });
        }
        let zones: Vec<&str> = client
            .command_history()
            .iter()
            .map(|c| c.location.zone.as_str())
            .collect();
        assert_eq!(zones, vec!["A", "B"]);
    }
}
