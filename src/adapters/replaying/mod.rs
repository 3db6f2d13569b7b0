//! Replaying adapters that serve recorded outputs instead of real state.
//!
//! Arguments are not compared against the recording: a replayed session is
//! deterministic as long as the navigator issues the same calls per method.

pub mod canvas;
pub mod graph;
pub mod input;

pub use canvas::ReplayingCanvas;
pub use graph::ReplayingGraph;
pub use input::ReplayingInputPanel;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::CanvasError;

/// Take the next recorded output for `port::method` and decode it.
///
/// # Panics
///
/// Panics if no cassette is loaded for the port, if the cassette is
/// exhausted, or if the recorded value does not decode as `T`.
pub(crate) fn next_output<T: DeserializeOwned>(
    replayer: Option<&Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> T {
    let Some(replayer) = replayer else {
        panic!("{port} port not configured for replay: no cassette loaded for {port}");
    };
    let output = replayer
        .lock()
        .expect("replayer lock poisoned")
        .next_interaction(port, method)
        .output;
    serde_json::from_value(output)
        .unwrap_or_else(|e| panic!("{port}::{method}: failed to decode recorded output: {e}"))
}

/// Decode a recorded `{"Ok": v}` / `{"Err": msg}` value.
///
/// # Panics
///
/// Panics if the value matches neither shape.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
) -> Result<T, CanvasError> {
    if let Some(ok) = output.get("Ok") {
        return Ok(serde_json::from_value(ok.clone())
            .unwrap_or_else(|e| panic!("failed to decode recorded Ok value: {e}")));
    }
    match output.get("Err").and_then(serde_json::Value::as_str) {
        Some(message) => Err(CanvasError::Replayed(message.to_string())),
        None => panic!("recorded result is neither Ok nor Err: {output}"),
    }
}
