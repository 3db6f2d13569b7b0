//! `rwweb demo` command.

use tracing::warn;

use crate::commands::report::{render_canvas, render_graph};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::navigator::{Navigator, WELCOME_DOC_ID};
use crate::ports::DocId;

/// Execute the `demo` command against `ctx`.
///
/// Initializes the canvas, taps the welcome note (when seeded) so its star
/// is revealed, then prints the canvas and the graph.
///
/// # Errors
///
/// Returns an error string if a gesture fails.
pub fn run_with_context(ctx: &ServiceContext, settings: &Settings) -> Result<(), String> {
    print!("{}", demo(ctx, settings)?);
    Ok(())
}

fn demo(ctx: &ServiceContext, settings: &Settings) -> Result<String, String> {
    let navigator = Navigator::new(ctx, &settings.navigator);
    navigator.init_canvas().map_err(|e| e.to_string())?;

    match ctx.canvas.get_item_id_for_doc_id(&DocId::new(WELCOME_DOC_ID)) {
        Ok(welcome) => navigator.handle_tap(welcome).map_err(|e| e.to_string())?,
        Err(_) => warn!("no welcome note to tap; seed_welcome is off"),
    }

    Ok(format!("{}\n{}", render_canvas(ctx), render_graph(ctx)))
}
