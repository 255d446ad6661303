//! The warrior and its rank tiers.

pub mod rank;
pub mod warrior;

pub use rank::*;
pub use warrior::*;
