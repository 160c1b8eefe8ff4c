//! Output formatting.
//!
//! Renders return strings; the dispatcher decides where they go. Styling
//! goes through `console`, which drops colors when stdout is not a
//! terminal, so piped output stays plain.

use console::style;
use rezelapp::host::Render;
use rezelapp::projection::ProjectionEntry;
use rezelapp::registry::Registry;

const ABSENT: &str = "-";

pub fn render_text(render: &Render, show_absent: bool) -> String {
    let mut out = String::new();
    let projections = &render.projections;

    push_heading(&mut out, "classes");
    if projections.classes.is_empty() {
        out.push_str(&format!("  {}\n", style("(none)").dim()));
    }
    for class in &projections.classes {
        out.push_str(&format!("  {}\n", class));
    }

    push_heading(&mut out, "host attributes");
    push_entries(&mut out, &projections.host_attributes, show_absent);

    push_heading(&mut out, "css properties");
    push_entries(&mut out, &projections.host_css, show_absent);

    if let Some(container) = &render.container_class {
        push_heading(&mut out, "container");
        out.push_str(&format!("  {}\n", container));
    }
    out
}

pub fn render_json(render: &Render) -> rezelapp::error::Result<String> {
    let mut json = render.to_json()?;
    json.push('\n');
    Ok(json)
}

pub fn render_keys(registry: &Registry) -> String {
    let mut out = String::new();
    push_heading(&mut out, &format!("{} ({})", registry.kind(), registry.kind().tag()));
    let width = registry
        .specs()
        .iter()
        .map(|spec| spec.name.len())
        .max()
        .unwrap_or(0);
    for spec in registry.specs() {
        let css = if spec.css { " [css]" } else { "" };
        out.push_str(&format!(
            "  {:<width$}  {:<4} {}{}\n",
            spec.name,
            spec.alias,
            style(spec.domain.describe()).dim(),
            css,
            width = width
        ));
    }
    out
}

fn push_heading(out: &mut String, title: &str) {
    out.push_str(&format!("{}\n", style(title).bold()));
}

fn push_entries(out: &mut String, entries: &[ProjectionEntry], show_absent: bool) {
    let mut shown = 0;
    for entry in entries {
        match &entry.value {
            Some(value) => out.push_str(&format!("  {} = {}\n", entry.name, value)),
            None if show_absent => {
                out.push_str(&format!("  {} = {}\n", style(&entry.name).dim(), ABSENT))
            }
            None => continue,
        }
        shown += 1;
    }
    if shown == 0 {
        out.push_str(&format!("  {}\n", style("(none)").dim()));
    }
}
