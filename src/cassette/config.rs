//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a path panic when called
/// during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the graph port cassette file.
    pub graph: Option<PathBuf>,
    /// Path to the canvas port cassette file.
    pub canvas: Option<PathBuf>,
    /// Path to the input port cassette file.
    pub input: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the graph port.
    pub graph: Option<CassetteReplayer>,
    /// Replayer for the canvas port.
    pub canvas: Option<CassetteReplayer>,
    /// Replayer for the input port.
    pub input: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Loads one cassette file into a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Ok(CassetteReplayer::new(&Self::read_cassette(path)?))
    }

    /// Configuration pointing at the per-port files a recording session
    /// writes into `dir`.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        Self {
            graph: Some(dir.join("graph.cassette.yaml")),
            canvas: Some(dir.join("canvas.cassette.yaml")),
            input: Some(dir.join("input.cassette.yaml")),
        }
    }

    /// Load all configured per-port cassette files.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            graph: self.graph.as_deref().map(Self::load_port_cassette).transpose()?,
            canvas: self.canvas.as_deref().map(Self::load_port_cassette).transpose()?,
            input: self.input.as_deref().map(Self::load_port_cassette).transpose()?,
        })
    }
}
