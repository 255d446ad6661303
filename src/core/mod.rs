//! Fixed rule constants.

pub mod constants;

pub use constants::*;
