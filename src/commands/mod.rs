//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `edit.rs` — add/remove commands that rewrite the page.
//! - `runtime.rs` — check/list/refs/show read-only commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate page logic to `services/*` and `document`.
//! - Keep behavior and output schema stable.

pub mod edit;
pub mod runtime;

pub use edit::handle_edit_commands;
pub use runtime::handle_runtime_commands;
