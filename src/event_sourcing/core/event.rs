use serde::{Deserialize, Serialize};

// ============================================================================
// Domain Event Trait
// ============================================================================

/// Generic Domain Event trait
///
/// Events carry a stable name so they can be logged and counted without
/// matching on every variant at the call site.
pub trait DomainEvent: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync {
    /// Stable name of this concrete event
    fn name(&self) -> &'static str;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug)]
    #[serde(tag = "type", content = "data")]
    enum TestEvent {
        Rang { times: u32 },
    }

    impl DomainEvent for TestEvent {
        fn name(&self) -> &'static str {
            match self {
                TestEvent::Rang { .. } => "Rang",
            }
        }
    }

    #[test]
    fn test_event_name() {
        let event = TestEvent::Rang { times: 2 };
        assert_eq!(event.name(), "Rang");
    }
}
