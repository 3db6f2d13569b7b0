//! Service context owning one instance of every collaborator port.

use std::path::Path;

use crate::adapters::memory::{
    MemoryCanvas, MemoryGraph, MemoryInputPanel, SequentialIdGenerator, UuidIdGenerator,
};
use crate::adapters::recording::{RecordingCanvas, RecordingGraph, RecordingInputPanel};
use crate::adapters::replaying::{ReplayingCanvas, ReplayingGraph, ReplayingInputPanel};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::ports::{CanvasLayout, DocumentGraph, IdGenerator, InputPanel};

/// Bundles the collaborator ports the navigator drives.
///
/// This is all of the state a navigation session has; it is passed
/// explicitly to the navigator rather than living in globals. Constructors
/// wire up different adapter implementations (in-memory, recording,
/// replaying).
pub struct ServiceContext {
    /// Document and link store.
    pub graph: Box<dyn DocumentGraph>,
    /// Visible items and their geometry.
    pub canvas: Box<dyn CanvasLayout>,
    /// Navigation input and suggestion list.
    pub input: Box<dyn InputPanel>,
}

impl ServiceContext {
    /// In-memory collaborators with random document ids.
    #[must_use]
    pub fn in_memory(settings: &Settings) -> Self {
        Self::in_memory_with(settings, Box::new(UuidIdGenerator::new()))
    }

    /// In-memory collaborators with ids `doc-1`, `doc-2`, ...
    #[must_use]
    pub fn deterministic(settings: &Settings) -> Self {
        Self::in_memory_with(settings, Box::new(SequentialIdGenerator::new("doc")))
    }

    /// In-memory collaborators minting ids from `id_gen`.
    #[must_use]
    pub fn in_memory_with(settings: &Settings, id_gen: Box<dyn IdGenerator>) -> Self {
        Self {
            graph: Box::new(MemoryGraph::new(id_gen, settings.suggest_limit)),
            canvas: Box::new(MemoryCanvas::new(settings.layout.clone())),
            input: Box::new(MemoryInputPanel::new()),
        }
    }

    /// Wraps every port of `inner` so that its calls are recorded into `session`.
    #[must_use]
    pub fn recording(inner: Self, session: &RecordingSession) -> Self {
        Self {
            graph: Box::new(RecordingGraph::new(inner.graph, session.graph.clone())),
            canvas: Box::new(RecordingCanvas::new(inner.canvas, session.canvas.clone())),
            input: Box::new(RecordingInputPanel::new(inner.input, session.input.clone())),
        }
    }

    /// Starts a recording session under `root` around `inner`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(inner: Self, root: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let ctx = Self::recording(inner, &session);
        Ok((ctx, session))
    }

    /// Replays every port from one cassette holding all ports' calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::read_cassette(path)?;

        // Each port gets its own replayer so cursors stay independent.
        Ok(Self {
            graph: Box::new(ReplayingGraph::new(CassetteReplayer::new(&cassette))),
            canvas: Box::new(ReplayingCanvas::new(CassetteReplayer::new(&cassette))),
            input: Box::new(ReplayingInputPanel::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Replays from per-port cassette files; ports without one panic when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            graph: Box::new(
                replayers.graph.map_or_else(ReplayingGraph::unconfigured, ReplayingGraph::new),
            ),
            canvas: Box::new(
                replayers.canvas.map_or_else(ReplayingCanvas::unconfigured, ReplayingCanvas::new),
            ),
            input: Box::new(
                replayers
                    .input
                    .map_or_else(ReplayingInputPanel::unconfigured, ReplayingInputPanel::new),
            ),
        })
    }
}
