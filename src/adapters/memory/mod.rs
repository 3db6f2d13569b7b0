//! In-memory adapters that keep all state in process.

pub mod canvas;
pub mod graph;
pub mod id_gen;
pub mod input;

pub use canvas::MemoryCanvas;
pub use graph::MemoryGraph;
pub use id_gen::{SequentialIdGenerator, UuidIdGenerator};
pub use input::MemoryInputPanel;
