//! bitmapnft CLI library.
//!
//! This crate provides the command implementations behind the `bitmapnft`
//! binary: configuration loading, logging setup, and one module per command.

pub mod commands;
pub mod logging;
pub mod session;
