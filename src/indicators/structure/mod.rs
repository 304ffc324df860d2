//! Market structure: swing support/resistance

pub mod support_resistance;

pub use support_resistance::*;
