use crate::chart::TypeChart;
use crate::engine::CoverageMatrix;
use anyhow::Context;

/// n×n grid with type names on the first row and column. Cells below the
/// diagonal stay blank; they mirror the canonical half.
pub fn grid_rows(chart: &TypeChart, matrix: &CoverageMatrix) -> Vec<Vec<String>> {
    let mut header = vec![String::new()];
    header.extend(chart.types().map(|(_, name)| name.to_string()));
    let mut rows = vec![header];
    for (d1, name) in chart.types() {
        let mut row = vec![name.to_string()];
        for d2 in chart.ids() {
            if d1 > d2 {
                row.push(String::new());
            } else {
                row.push(matrix.get(d1, d2).to_string());
            }
        }
        rows.push(row);
    }
    rows
}

pub fn render_csv(chart: &TypeChart, matrix: &CoverageMatrix) -> String {
    let rows = grid_rows(chart, matrix);
    let mut out = String::new();
    for (row_idx, row) in rows.iter().enumerate() {
        out.push_str(&row.join(","));
        if row_idx + 1 < rows.len() {
            out.push('\n');
        }
    }
    out
}

/// Fixed-width table for terminals.
pub fn render_text(chart: &TypeChart, matrix: &CoverageMatrix) -> String {
    let rows = grid_rows(chart, matrix);
    let width = rows
        .iter()
        .flat_map(|r| r.iter().map(|c| c.chars().count()))
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

pub fn write_csv(
    chart: &TypeChart,
    matrix: &CoverageMatrix,
    path: &std::path::Path,
) -> anyhow::Result<()> {
    std::fs::write(path, render_csv(chart, matrix))
        .with_context(|| format!("Failed to write coverage grid to {}", path.display()))?;
    Ok(())
}
