//! wp2md: configuration resolution for WordPress export conversion
//!
//! Resolves the effective conversion options from command-line flags and an
//! interactive wizard, both driven by a single declarative option schema.

pub mod cli;
pub mod options;
pub mod resolve;
pub mod settings;
pub mod utils;
