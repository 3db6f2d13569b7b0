//! Port implementations.

pub mod memory;
pub mod recording;
pub mod replaying;
