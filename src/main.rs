use clap::{Parser, Subcommand, ValueEnum};
use pokemon_type_coverage::{run, CliOptions, Command, Mode};
use std::path::PathBuf;

/// Offensive type coverage: which defenders can still take your attacks.
#[derive(Parser, Debug)]
#[command(name = "type-coverage", about = "Offensive type coverage analysis")]
struct CliArgs {
    /// Type chart JSON (defaults to the standard 18-type chart)
    #[arg(long, global = true)]
    chart: Option<PathBuf>,

    /// Session JSON with saved rows and selection
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// compare: rows stand alone; total: rows merge into one attacking set
    #[arg(long, value_enum, global = true)]
    mode: Option<ModeArg>,

    /// Committed row, comma separated (repeatable, committed in order)
    #[arg(long = "row", global = true)]
    rows: Vec<String>,

    /// Working selection, comma separated
    #[arg(long, value_delimiter = ',', global = true)]
    select: Vec<String>,

    /// In total mode, keep counting the row being edited
    #[arg(long, global = true)]
    include_current_row: bool,

    #[command(subcommand)]
    command: CommandArg,
}

#[derive(Subcommand, Debug)]
enum CommandArg {
    /// Coverage grid over every defender combination
    Matrix {
        /// Write the grid as CSV instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Defenders taking 0.25x, 0.5x or 1x, with their weaknesses
    Buckets,
    /// Defender counts per multiplier
    Histogram {
        #[arg(long)]
        json: bool,
    },
    /// Export lines for the rows and the current selection
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the type catalog
    Types,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Compare,
    Total,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Compare => Mode::Compare,
            ModeArg::Total => Mode::Total,
        }
    }
}

fn split_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let command = match args.command {
        CommandArg::Matrix { csv } => Command::Matrix { csv },
        CommandArg::Buckets => Command::Buckets,
        CommandArg::Histogram { json } => Command::Histogram { json },
        CommandArg::Export { output } => Command::Export { output },
        CommandArg::Types => Command::Types,
    };
    run(CliOptions {
        chart_path: args.chart,
        session_path: args.session,
        mode: args.mode.map(Mode::from),
        rows: args.rows.iter().map(|r| split_types(r)).collect(),
        selected: args.select,
        include_current_row: args.include_current_row,
        command,
    })
}
