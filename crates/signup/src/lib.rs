// signup - registration form with declarative validation
// Form state, validation and Maud rendering; the HTTP surface lives in signup-server

pub mod config;
pub mod field;
pub mod form;
pub mod presenter;
pub mod state;
pub mod validation;

pub use config::{Config, FormConfig, LogConfig, ProjectConfig, ServerConfig};
pub use field::{Field, UnknownField};
pub use form::{ErrorSet, FieldSet, Snapshot, TouchedSet};
pub use state::{FormEvent, FormState, FormView, Phase, ResetPolicy, SubmitOutcome};
pub use validation::{validate, validate_field, Format, Validate, ValidationError};

// Re-export Maud for callers composing their own pages
pub use maud::{Markup, DOCTYPE};
