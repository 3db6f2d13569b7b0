//! Port traits defining the collaborator boundaries.
//!
//! Each trait represents a boundary between the navigation core and a
//! collaborator it drives (document graph, canvas layout, input panel,
//! id minting). Implementations live in `src/adapters/`.

pub mod canvas;
pub mod graph;
pub mod id_gen;
pub mod input;

pub use canvas::{CanvasLayout, Geometry, Item, ItemId, Side};
pub use graph::{DocContent, DocId, Document, DocumentGraph, Friends, Link, Suggestion};
pub use id_gen::IdGenerator;
pub use input::{InputPanel, StagedSuggestions};
