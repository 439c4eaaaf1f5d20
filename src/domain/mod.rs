//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep DTO/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs; integration tests in
//! `tests/` assert on the envelope shape.

pub mod models;
