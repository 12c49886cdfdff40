//! Host-provided commands reachable from the grid's context menu.
//!
//! These are pass-throughs, deliberately decoupled from drag handling: the
//! host injects the capability and the dispatcher forwards, nothing more.

use tracing::debug;

use super::types::Appointment;

/// Commands the host makes available on an appointment.
pub trait ScheduleCommands {
    /// Open the appointment edit dialog.
    fn edit(&self, appointment: &Appointment);
    /// Navigate to the client's record.
    fn navigate_to_client(&self, client_id: &str);
}

/// Forwards context-menu invocations to the injected capability.
pub struct CommandDispatcher<C: ScheduleCommands> {
    commands: C,
}

impl<C: ScheduleCommands> CommandDispatcher<C> {
    pub fn new(commands: C) -> Self {
        Self { commands }
    }

    /// Invoke the host's edit dialog for an appointment.
    pub fn edit_appointment(&self, appointment: &Appointment) {
        debug!("Dispatching edit for appointment {}", appointment.id);
        self.commands.edit(appointment);
    }

    /// Navigate to the client attached to an appointment, if any.
    pub fn open_client(&self, appointment: &Appointment) {
        if let Some(client) = &appointment.client {
            debug!("Dispatching navigation to client {}", client.id);
            self.commands.navigate_to_client(&client.id);
        }
    }
}
