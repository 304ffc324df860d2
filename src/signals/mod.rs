//! Signal evaluation interfaces.

pub mod conditions;
pub mod decision;
pub mod engine;

pub use conditions::{Comparison, Condition, Operand, Reference};
pub use decision::StopLossTakeProfit;
pub use engine::{Classification, SignalEngine};
