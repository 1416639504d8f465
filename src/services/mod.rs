//! Service layer containing the page-processing logic.
//!
//! ## Service map
//! - `check.rs` — cross-reference validation and report/row assembly.
//! - `editing.rs` — invariant-preserving add/remove of bullet + definition.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; `editing` is text-to-text, the
//!   command layer owns the file write.
//! - Keep command handlers thin; delegate to services.

pub mod check;
pub mod editing;
pub mod output;
