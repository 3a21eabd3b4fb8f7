//! Registrar - course catalog and enrollment manager
//!
//! Runs the interactive menu by default. The report subcommands work on the
//! state built from a seed file.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use registrar_core::config::SeedConfig;
use registrar_core::Registrar;

mod render;
mod shell;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "registrar",
    about = "Course catalog and enrollment manager",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    trace: bool,

    /// YAML file with students, courses and enrollments to start from
    #[clap(long, global = true)]
    seed: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Shell,

    /// List every course in code order
    Courses {
        /// Output results as JSON
        #[clap(long, conflicts_with = "table")]
        json: bool,

        /// Display results in a compact table format
        #[clap(short, long)]
        table: bool,
    },

    /// Show one student's schedule
    Schedule {
        /// Student identifier
        student_id: String,

        /// Output results as JSON
        #[clap(long, conflicts_with = "table")]
        json: bool,

        /// Display results in a compact table format
        #[clap(short, long)]
        table: bool,
    },

    /// Show course rosters for every enrolled student
    Rosters {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so reports on stdout stay clean.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.trace);

    let registrar = load_registrar(cli.seed.as_deref())?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => shell_command(registrar),
        Command::Courses { json, table } => courses_command(&registrar, json, table),
        Command::Schedule {
            student_id,
            json,
            table,
        } => schedule_command(&registrar, &student_id, json, table),
        Command::Rosters { json } => rosters_command(&registrar, json),
    }
}

fn load_registrar(seed: Option<&Path>) -> Result<Registrar> {
    let Some(path) = seed else {
        return Ok(Registrar::new());
    };

    let (registrar, rejected) = SeedConfig::load(path)?.build()?;
    for rejection in &rejected {
        warn!(
            "Seed enrollment {} -> {} skipped: {}",
            rejection.seed.student, rejection.seed.course, rejection.reason
        );
    }
    Ok(registrar)
}

fn shell_command(registrar: Registrar) -> Result<()> {
    let stdin = io::stdin();
    let mut shell = shell::Shell::new(registrar, stdin.lock(), io::stdout());
    shell.run()
}

fn courses_command(registrar: &Registrar, json: bool, table: bool) -> Result<()> {
    let catalog = registrar.catalog();
    debug!(
        courses = catalog.len(),
        height = catalog.height(),
        "Listing catalog"
    );

    if json {
        let courses: Vec<_> = catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&courses)?);
    } else if table {
        println!("{}", render::catalog_table(catalog));
    } else {
        print!("{}", render::catalog(catalog));
    }
    Ok(())
}

fn schedule_command(
    registrar: &Registrar,
    student_id: &str,
    json: bool,
    table: bool,
) -> Result<()> {
    let result = registrar.student_schedule(student_id);

    match (&result, json) {
        (Ok(entries), true) => println!("{}", serde_json::to_string_pretty(entries)?),
        (Err(err), true) => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "error": err.kind(),
                "message": err.to_string(),
            }))?
        ),
        (Ok(entries), false) if table => println!("{}", render::schedule_table(entries)),
        _ => print!("{}", render::schedule(registrar, student_id, &result)),
    }

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn rosters_command(registrar: &Registrar, json: bool) -> Result<()> {
    let rosters = registrar.course_rosters();
    if json {
        println!("{}", serde_json::to_string_pretty(&rosters)?);
    } else {
        print!("{}", render::rosters(&rosters));
    }
    Ok(())
}
