//! One-way text export: `T1,..,Tk,c4,c2,c1,c0.5,c0.25,c0` per line.

use crate::engine::Histogram;
use anyhow::Context;

/// Line emitted when there is nothing to export.
pub const EMPTY_EXPORT: &str = "0,0,0,0,0,0";

/// Type names followed by the six bucket counts. With no types the leading
/// list and its comma are omitted.
pub fn format_line<S: AsRef<str>>(types: &[S], histogram: &Histogram) -> String {
    let mut out = String::new();
    for t in types {
        out.push_str(t.as_ref());
        out.push(',');
    }
    let counts: Vec<String> = histogram.counts().iter().map(|c| c.to_string()).collect();
    out.push_str(&counts.join(","));
    out
}

/// Joins committed lines and the in-progress line, one per line.
pub fn export_text<S: AsRef<str>>(row_lines: &[S], current: Option<&str>) -> String {
    let mut lines: Vec<&str> = row_lines.iter().map(|l| l.as_ref()).collect();
    if let Some(current) = current {
        lines.push(current);
    }
    if lines.is_empty() {
        return EMPTY_EXPORT.to_string();
    }
    lines.join("\n")
}

pub fn write_export(text: &str, path: &std::path::Path) -> anyhow::Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    Ok(())
}
