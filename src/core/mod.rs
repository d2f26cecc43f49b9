//! # Core Application Logic
//!
//! This module contains hrchat's business logic.
//! It knows nothing about any specific UI technology.
//!
//! - [`state`]: The `App` struct holding all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer; every state
//!   transition, including the whole send/reply exchange cycle
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;
