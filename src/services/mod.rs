//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `scaffold.rs` — project tree creation and template writes, plus dry-run plan.
//! - `verify.rs` — scaffold verification against the template catalog.
//! - `audit.rs` — best-effort append-only audit trail of mutating actions.
//! - `output.rs` — JSON/text output helpers and the error envelope.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod output;
pub mod scaffold;
pub mod verify;
