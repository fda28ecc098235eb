//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod aggregate;
mod validate_rules;

pub use aggregate::Aggregate;
pub use validate_rules::ValidateRules;
