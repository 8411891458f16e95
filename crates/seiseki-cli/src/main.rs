//! seiseki CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "seiseki",
    version,
    about = "Training-center scoring and scheduling toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a score sheet
    Evaluate {
        /// Path to a .toml score sheet or directory
        #[arg(long)]
        sheet: PathBuf,

        /// Output directory for report artifacts
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, html (comma-separated)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Compare two evaluation reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Exit code 1 if any student dropped to fail
        #[arg(long)]
        fail_on_drop: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate score sheet TOML files
    Validate {
        /// Path to a score sheet file or directory
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Parse a schedule or assignment string
    Schedule {
        /// The display string, e.g. "T2 - Tiết 3, T4 - Tiết 5"
        #[arg(long)]
        input: String,

        /// Treat the input as a teacher assignment string
        #[arg(long)]
        assignments: bool,
    },

    /// Render a task board as a text Gantt chart
    Timeline {
        /// Path to a JSON task list
        #[arg(long)]
        tasks: PathBuf,

        /// First day of the view window (default: earliest task start)
        #[arg(long)]
        window_start: Option<NaiveDate>,

        /// Evaluation date (default: the system date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Chart width in day columns
        #[arg(long, default_value = "28")]
        width: usize,
    },

    /// Create starter score sheet and task files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seiseki=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            sheet,
            output,
            format,
        } => commands::evaluate::execute(sheet, output, format),
        Commands::Compare {
            baseline,
            current,
            fail_on_drop,
            format,
        } => commands::compare::execute(baseline, current, fail_on_drop, format),
        Commands::Validate { sheet } => commands::validate::execute(sheet),
        Commands::Schedule { input, assignments } => {
            commands::schedule::execute(&input, assignments)
        }
        Commands::Timeline {
            tasks,
            window_start,
            today,
            width,
        } => commands::timeline::execute(tasks, window_start, today, width),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
