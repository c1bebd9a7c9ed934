//! Command implementations for tomata.

mod log;

pub use log::log;
