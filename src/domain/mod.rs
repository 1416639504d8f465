//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — report and output envelope structs.
//!
//! ## Rule of thumb
//! Model types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the contracts under
//! `docs/contracts/*`. Keep schema-impacting changes synchronized.

pub mod models;
