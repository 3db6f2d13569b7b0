//! `rwweb run` command.

use std::path::Path;

use crate::commands::report::{render_canvas, render_graph};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::script::{Script, ScriptRunner};

/// Execute the `run` command: replay the gesture script at `path` against
/// `ctx`, printing one line per step and then the final state.
///
/// # Errors
///
/// Returns an error string if the script cannot be loaded or a step fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    settings: &Settings,
    path: &Path,
) -> Result<(), String> {
    print!("{}", run_script(ctx, settings, path)?);
    Ok(())
}

fn run_script(ctx: &ServiceContext, settings: &Settings, path: &Path) -> Result<String, String> {
    let script = Script::load(path).map_err(|e| e.to_string())?;
    let lines = ScriptRunner::new(ctx, &settings.navigator)
        .run(&script)
        .map_err(|e| e.to_string())?;

    let mut out = String::new();
    if let Some(name) = &script.name {
        out.push_str(&format!("Script: {name}\n"));
    }
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&render_canvas(ctx));
    out.push('\n');
    out.push_str(&render_graph(ctx));
    Ok(out)
}
