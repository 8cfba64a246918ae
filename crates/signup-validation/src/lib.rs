//! Signup Validation Core
//!
//! Field-agnostic validation predicates. They know nothing about the
//! registration form; `signup` composes them into per-field rules and
//! attaches the user-facing messages.

pub mod email;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use string::*;
