//! Application layer: the menu state machine and everything it renders.
//!
//! `UssdEngine` is the entry point. It loads the session, hands the input to the
//! handler for the current state, and persists or discards the session depending
//! on whether the dialogue continues.

pub mod engine;
pub mod format;
pub mod handlers;
pub mod reports;
pub mod screens;
pub mod sweeper;
