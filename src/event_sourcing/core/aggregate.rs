// ============================================================================
// Aggregate Root Pattern - Command / Event Core
// ============================================================================
//
// Key Principles:
// 1. Commands are validated against current state without mutating it
// 2. Validation produces events describing what happened
// 3. Applying an event is the only way state changes
// 4. An accepted command may produce zero events (a no-op)
//
// This trait is GENERIC and knows nothing about orders or catalogs.
//
// ============================================================================

/// Generic Aggregate trait - in-memory aggregates driven by commands
///
/// Type Parameters:
/// - `Event`: The domain event type for this aggregate
/// - `Command`: The command type for this aggregate
/// - `Error`: The error type for business rule violations
pub trait Aggregate {
    type Event;
    type Command;
    type Error;

    /// Apply an event to update state. Events are facts, so this cannot fail.
    fn apply_event(&mut self, event: &Self::Event);

    /// Handle command and emit events (business logic, no mutation)
    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Handle a command and apply every event it produced, in order
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle_command(command)?;
        for event in &events {
            self.apply_event(event);
        }
        Ok(events)
    }
}

// ============================================================================
// Tests
// ============================================================================
