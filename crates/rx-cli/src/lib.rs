//! Library components for the `rxgen` prescription generator.

pub mod commands;
pub mod config;
pub mod logging;
pub mod session;
pub mod view;
