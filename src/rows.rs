//! Committed rows, the edit state machine, and merging rows into the
//! attacking set handed to the engine.

use crate::chart::{TypeChart, TypeId};
use crate::engine::effectiveness_histogram;
use crate::export::{export_text, format_line};
use crate::selection::AttackSet;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Each row stands alone.
    #[default]
    Compare,
    /// Rows and the working selection merge into one attacking set.
    Total,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    /// The working selection will replace the row at this index on commit.
    Editing(usize),
}

impl EditState {
    pub fn index(self) -> Option<usize> {
        match self {
            EditState::Idle => None,
            EditState::Editing(idx) => Some(idx),
        }
    }
}

/// A committed selection and its export line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub types: Vec<TypeId>,
    pub summary_line: String,
}

impl Row {
    pub fn new(chart: &TypeChart, selection: &AttackSet) -> Self {
        let histogram = effectiveness_histogram(chart, selection);
        Self {
            types: selection.as_slice().to_vec(),
            summary_line: format_line(&selection.names(chart), &histogram),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row {index} does not exist ({len} rows committed)")]
    OutOfBounds { index: usize, len: usize },
}

/// Attacking set the engine should evaluate.
///
/// Compare mode uses the working selection alone. Total mode merges every
/// row's types, then the selection, keeping first-seen order. The row being
/// edited is left out unless `include_current_row` is set.
pub fn effective_attackers(
    selected: &AttackSet,
    rows: &[Row],
    mode: Mode,
    edit: EditState,
    include_current_row: bool,
) -> AttackSet {
    match mode {
        Mode::Compare => selected.clone(),
        Mode::Total => {
            let mut merged = AttackSet::new();
            for (idx, row) in rows.iter().enumerate() {
                if edit.index() == Some(idx) && !include_current_row {
                    continue;
                }
                merged.extend(row.types.iter().copied());
            }
            merged.extend(selected.iter());
            merged
        }
    }
}

/// Caller-side storage: the working selection, committed rows and edit state.
#[derive(Clone, Debug, Default)]
pub struct Workbench {
    rows: Vec<Row>,
    selected: AttackSet,
    edit: EditState,
    mode: Mode,
    include_current_row: bool,
}

impl Workbench {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selected(&self) -> &AttackSet {
        &self.selected
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn include_current_row(&self) -> bool {
        self.include_current_row
    }

    pub fn set_include_current_row(&mut self, include: bool) {
        self.include_current_row = include;
    }

    pub fn toggle(&mut self, t: TypeId) {
        self.selected.toggle(t);
    }

    pub fn set_selection(&mut self, selection: AttackSet) {
        self.selected = selection;
    }

    pub fn reset_selection(&mut self) {
        self.selected.clear();
    }

    /// Stores the working selection: replaces the edited row, or appends.
    /// Clears the selection and leaves edit mode. Returns the row index.
    pub fn commit(&mut self, chart: &TypeChart) -> usize {
        let row = Row::new(chart, &self.selected);
        let index = match self.edit {
            EditState::Editing(idx) => {
                self.rows[idx] = row;
                debug!(index = idx, "replaced row");
                idx
            }
            EditState::Idle => {
                self.rows.push(row);
                debug!(index = self.rows.len() - 1, "appended row");
                self.rows.len() - 1
            }
        };
        self.selected.clear();
        self.edit = EditState::Idle;
        index
    }

    /// Appends `selection` as a new row, leaving the working selection and
    /// edit state alone. Returns the row index.
    pub fn append(&mut self, chart: &TypeChart, selection: &AttackSet) -> usize {
        self.rows.push(Row::new(chart, selection));
        debug!(index = self.rows.len() - 1, "appended row");
        self.rows.len() - 1
    }

    /// Loads a row's types into the working selection for editing.
    pub fn select_for_edit(&mut self, index: usize) -> Result<(), RowError> {
        let row = self.rows.get(index).ok_or(RowError::OutOfBounds {
            index,
            len: self.rows.len(),
        })?;
        self.selected = AttackSet::from_types(row.types.iter().copied());
        self.edit = EditState::Editing(index);
        debug!(index, "editing row");
        Ok(())
    }

    /// Leaves edit mode without touching the rows.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
        self.selected.clear();
    }

    /// Removes a row. Deleting the edited row also drops the working
    /// selection; deleting an earlier row shifts the edit index down.
    pub fn delete(&mut self, index: usize) -> Result<Row, RowError> {
        if index >= self.rows.len() {
            return Err(RowError::OutOfBounds {
                index,
                len: self.rows.len(),
            });
        }
        let removed = self.rows.remove(index);
        self.edit = match self.edit {
            EditState::Editing(current) if current == index => {
                self.selected.clear();
                EditState::Idle
            }
            EditState::Editing(current) if current > index => EditState::Editing(current - 1),
            other => other,
        };
        debug!(index, remaining = self.rows.len(), "deleted row");
        Ok(removed)
    }

    pub fn effective_attackers(&self) -> AttackSet {
        effective_attackers(
            &self.selected,
            &self.rows,
            self.mode,
            self.edit,
            self.include_current_row,
        )
    }

    /// Export line for what is being worked on right now, if anything.
    ///
    /// Compare mode shows the selection; total mode shows the merged set.
    pub fn current_line(&self, chart: &TypeChart) -> Option<String> {
        let shown = self.effective_attackers();
        if shown.is_empty() {
            return None;
        }
        let histogram = effectiveness_histogram(chart, &shown);
        Some(format_line(&shown.names(chart), &histogram))
    }

    /// Full export text.
    ///
    /// Compare mode lists each committed row, then the in-progress line.
    /// Total mode is a single line over the merged set.
    pub fn export(&self, chart: &TypeChart) -> String {
        let current = self.current_line(chart);
        debug!(
            mode = ?self.mode,
            rows = self.rows.len(),
            in_progress = current.is_some(),
            "assembling export"
        );
        match self.mode {
            Mode::Compare => {
                let lines: Vec<&str> = self.rows.iter().map(|r| r.summary_line.as_str()).collect();
                export_text(&lines, current.as_deref())
            }
            Mode::Total => export_text::<&str>(&[], current.as_deref()),
        }
    }

    /// Builds a workbench from already-resolved parts, validating the edit index.
    pub fn restore(
        chart: &TypeChart,
        mode: Mode,
        rows: Vec<AttackSet>,
        selected: AttackSet,
        editing: Option<usize>,
        include_current_row: bool,
    ) -> Result<Self, RowError> {
        let rows: Vec<Row> = rows.iter().map(|r| Row::new(chart, r)).collect();
        let edit = match editing {
            Some(index) if index >= rows.len() => {
                return Err(RowError::OutOfBounds {
                    index,
                    len: rows.len(),
                })
            }
            Some(index) => EditState::Editing(index),
            None => EditState::Idle,
        };
        Ok(Self {
            rows,
            selected,
            edit,
            mode,
            include_current_row,
        })
    }
}
