//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — new/plan/check.
//! - `templates.rs` — template catalog inspection.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod templates;

pub use runtime::handle_runtime_commands;
pub use templates::handle_template_commands;
