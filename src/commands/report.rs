//! Plain-text tables of the canvas and graph state.

use crate::context::ServiceContext;
use crate::ports::DocContent;

const LABEL_WIDTH: usize = 60;

fn truncate(label: &str) -> String {
    let single_line = label.replace('\n', " ");
    if single_line.chars().count() <= LABEL_WIDTH {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(LABEL_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

/// Renders the visible items, one row each.
#[must_use]
pub fn render_canvas(ctx: &ServiceContext) -> String {
    let focused = ctx.canvas.focused_item();
    let rows: Vec<[String; 4]> = ctx
        .canvas
        .items()
        .into_iter()
        .filter(|item| !item.hidden)
        .map(|item| {
            let g = item.geometry;
            let mut flags = Vec::new();
            if item.centered {
                flags.push("centered");
            }
            if item.expanded {
                flags.push("expanded");
            }
            if focused == Some(item.id) {
                flags.push("focused");
            }
            [
                item.id.to_string(),
                item.doc_id.to_string(),
                format!("{:.0},{:.0} {:.0}x{:.0}", g.x, g.y, g.width, g.height),
                flags.join(" "),
            ]
        })
        .collect();

    if rows.is_empty() {
        return "Canvas is empty.\n".to_string();
    }

    let mut out = table(["ITEM", "DOC", "GEOMETRY", "FLAGS"], &rows);
    out.push_str(&format!("\n{} item(s) visible.\n", rows.len()));
    out
}

/// Renders every document and link.
#[must_use]
pub fn render_graph(ctx: &ServiceContext) -> String {
    let docs = ctx.graph.documents();
    if docs.is_empty() {
        return "Graph is empty.\n".to_string();
    }

    let rows: Vec<[String; 3]> = docs
        .iter()
        .map(|doc| {
            let kind = match doc.content {
                DocContent::Url { .. } => "url",
                DocContent::Note { .. } => "note",
            };
            [doc.id.to_string(), kind.to_string(), truncate(doc.label())]
        })
        .collect();
    let mut out = table(["DOC", "KIND", "LABEL"], &rows);

    let links = ctx.graph.links();
    out.push('\n');
    for link in &links {
        out.push_str(&format!("{} -> {}\n", link.source, link.target));
    }
    out.push_str(&format!("\n{} document(s), {} link(s).\n", docs.len(), links.len()));
    out
}

fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let widths: Vec<usize> = (0..N)
        .map(|col| {
            let widest = rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0);
            widest.max(headers[col].len())
        })
        .collect();

    let line = |cells: Vec<String>| -> String {
        let padded: Vec<String> =
            cells.iter().zip(&widths).map(|(cell, width)| format!("{cell:<width$}")).collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.iter().map(ToString::to_string).collect());
    out.push_str(&line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        out.push_str(&line(row.to_vec()));
    }
    out
}
