//! Terminal 2048 (workspace facade crate).
//!
//! The rule engine, key bindings and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `twenty48::{core,input,term,types}` and adds the screen flow and startup
//! configuration used by the binary.

pub mod app;
pub mod config;

pub use twenty48_core as core;
pub use twenty48_input as input;
pub use twenty48_term as term;
pub use twenty48_types as types;
