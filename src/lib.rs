//! Offensive type-coverage analysis.
//!
//! Pick attacking types and see, for every one- or two-type defender, the
//! best multiplier any of them deals, grouped into buckets and exported as
//! compact count lines.

pub mod chart;
pub mod engine;
pub mod export;
pub mod matrix;
pub mod multiplier;
pub mod report;
pub mod rows;
pub mod selection;
pub mod session;
pub mod types;

use crate::chart::{load_chart_or_standard, TypeChart};
use crate::engine::{bucket_listings, coverage_matrix, effectiveness_histogram};
pub use crate::multiplier::{Coverage, Multiplier};
pub use crate::rows::{Mode, Workbench};
use crate::selection::AttackSet;
use crate::session::load_session;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Command {
    Matrix { csv: Option<PathBuf> },
    Buckets,
    Histogram { json: bool },
    Export { output: Option<PathBuf> },
    Types,
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub chart_path: Option<PathBuf>,
    pub session_path: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub rows: Vec<Vec<String>>,
    pub selected: Vec<String>,
    pub include_current_row: bool,
    pub command: Command,
}

/// Session file first, then rows and selection from the command line on top.
///
/// Command-line rows are appended after the session's rows; the session's
/// selection and edit state survive unless `--select` replaces the selection.
pub fn build_workbench(chart: &TypeChart, opts: &CliOptions) -> anyhow::Result<Workbench> {
    let mut workbench = match &opts.session_path {
        Some(path) => load_session(path, chart)?,
        None => Workbench::default(),
    };
    if let Some(mode) = opts.mode {
        workbench.set_mode(mode);
    }
    if opts.include_current_row {
        workbench.set_include_current_row(true);
    }
    for row in &opts.rows {
        workbench.append(chart, &AttackSet::from_names(chart, row.as_slice())?);
    }
    if !opts.selected.is_empty() {
        workbench.set_selection(AttackSet::from_names(chart, opts.selected.as_slice())?);
    }
    Ok(workbench)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let chart = load_chart_or_standard(opts.chart_path.as_deref())?;
    let workbench = build_workbench(&chart, &opts)?;
    let attackers = workbench.effective_attackers();
    debug!(attackers = ?attackers.names(&chart), "effective attacking set");

    match opts.command {
        Command::Matrix { csv } => {
            let matrix = coverage_matrix(&chart, &attackers);
            match csv {
                Some(path) => {
                    matrix::write_csv(&chart, &matrix, &path)?;
                    println!(
                        "Wrote {}x{} coverage grid to {}",
                        chart.len(),
                        chart.len(),
                        path.display()
                    );
                }
                None => print!("{}", matrix::render_text(&chart, &matrix)),
            }
        }
        Command::Buckets => {
            let listings = bucket_listings(&chart, &attackers);
            if listings.is_empty() {
                println!("No attacking types selected.");
            } else {
                print!("{}", report::render_buckets(&chart, &listings));
            }
        }
        Command::Histogram { json } => {
            let histogram = effectiveness_histogram(&chart, &attackers);
            if json {
                println!("{}", serde_json::to_string_pretty(&histogram.to_json())?);
            } else {
                print!("{}", report::render_histogram(&histogram));
            }
        }
        Command::Export { output } => {
            let text = workbench.export(&chart);
            match output {
                Some(path) => {
                    export::write_export(&text, &path)?;
                    println!("Wrote export to {}", path.display());
                }
                None => println!("{text}"),
            }
        }
        Command::Types => print!("{}", report::render_types(&chart)),
    }
    Ok(())
}
