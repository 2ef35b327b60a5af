use crate::chart::TypeChart;
use crate::rows::{Mode, Workbench};
use crate::selection::AttackSet;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Saved workbench state. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub editing: Option<usize>,
    #[serde(default)]
    pub include_current_row: bool,
}

impl SessionFile {
    pub fn into_workbench(self, chart: &TypeChart) -> anyhow::Result<Workbench> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, names)| {
                AttackSet::from_names(chart, names.as_slice())
                    .with_context(|| format!("Invalid row {}", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let selected = AttackSet::from_names(chart, self.selected.as_slice())
            .context("Invalid selected types")?;
        Ok(Workbench::restore(
            chart,
            self.mode,
            rows,
            selected,
            self.editing,
            self.include_current_row,
        )?)
    }
}

pub fn load_session(path: &Path, chart: &TypeChart) -> anyhow::Result<Workbench> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file at {}", path.display()))?;
    let parsed: SessionFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    let workbench = parsed
        .into_workbench(chart)
        .with_context(|| format!("Invalid session in {}", path.display()))?;
    info!(
        rows = workbench.rows().len(),
        mode = ?workbench.mode(),
        "loaded session"
    );
    Ok(workbench)
}
