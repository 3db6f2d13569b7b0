//! Cassettes: recorded port traffic for inspection and deterministic replay.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
