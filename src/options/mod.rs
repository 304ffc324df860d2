//! Option contract selection and symbol parsing.

pub mod selector;
pub mod symbol;

pub use selector::{select_contract, select_from_chain};
pub use symbol::parse_expiration;
