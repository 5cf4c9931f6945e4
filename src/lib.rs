// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive client.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the backend: the shared
//   transport client, the typed error taxonomy, and one thin wrapper per
//   resource (users, contacts).
// - `models`: Resource types, their wire (de)serialization, and the patch
//   types used by the update flows.
// - `input`: Validated interactive prompts and the pure grammar behind them.
// - `ui`: The menu loop and the per-resource flows, delegating to `api`.
//
// Keeping this separation makes the grammar and wire shapes testable
// without a terminal or a running server.
pub mod api;
pub mod input;
pub mod models;
pub mod ui;
