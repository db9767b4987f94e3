// ============================================================================
// Command/Event Infrastructure
// ============================================================================
//
// Generic, reusable aggregate infrastructure. Everything is in memory;
// domain-specific code is in src/domain/
//
// ============================================================================

mod core;

pub use self::core::*;
