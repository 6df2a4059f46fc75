//! Console output helpers

mod styling;

pub use styling::*;
