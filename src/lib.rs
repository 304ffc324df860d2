//! Signalscope: indicator computation and directional signal classification
//! for crypto, equity and option watchlists.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod options;
pub mod services;
pub mod signals;

pub use error::SignalError;
