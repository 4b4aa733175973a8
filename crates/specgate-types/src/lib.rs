//! # specgate-types
//!
//! The authorization specification model: every data source a task may read,
//! every pattern it must never touch, every action it may perform, and the
//! execution scope bounding how long and how much it may run.
//!
//! ## Invariants
//!
//! - **No implicit allow**: anything not declared in an [`AuthorizationSpec`]
//!   is denied, both by static verification and at runtime.
//! - **Bounded scope**: an [`ExecutionScope`] with a zero bound cannot be
//!   built through [`ExecutionScope::new`] or deserialized from a spec file.
//! - **Immutability**: a built spec is shared read-only (`Arc`) by the
//!   verifier and every monitored context enforcing it.
//!
//! "Absent" and "explicitly empty" are distinct: `forbidden_inputs`,
//! `execution_scope` and `parameters_schema` are `Option`s so that an omitted
//! declaration can be reported by the completeness checks.

pub mod error;
pub mod model;
pub mod pattern;
pub mod spec;

pub use error::SpecError;
pub use model::{AllowedInput, ExecutionScope, PermittedAction, Schema};
pub use pattern::{ForbiddenPattern, PatternKind, PatternMatch};
pub use spec::{AuthorizationSpec, AuthorizationSpecBuilder};
