//! Gradeline - fills in overall grades on assignment feedback files.
//!
//! # Usage
//!
//! ```bash
//! gradeline --assignment a1 feedback/1234.txt
//! gradeline --assignment a3 --scenarios 6 --dry-run feedback/1234.txt
//! gradeline --assignment a3 --save
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use gradeline::command::{Assignment, GradeOptions, ScenarioCount, grade_file};
use gradeline::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use gradeline::{perf, ui};

/// Computes assignment grades from a feedback file and writes them back in place
#[derive(Parser, Debug)]
#[command(name = "gradeline", version, about, long_about = None)]
struct Cli {
    /// Feedback file to grade
    #[arg(value_name = "FILE", required_unless_present_any = ["save", "clear"])]
    file: Option<PathBuf>,

    /// Assignment rubric the file follows
    #[arg(short, long, value_enum)]
    assignment: Option<Assignment>,

    /// Number of test scenarios on the Assignment 3 rubric
    #[arg(long, value_enum)]
    scenarios: Option<ScenarioCount>,

    /// Print the updated document instead of saving it
    #[arg(long)]
    dry_run: bool,

    /// Print the grading report as JSON
    #[arg(long)]
    json: bool,

    /// Print timings for each grading step
    #[arg(long)]
    perf: bool,

    /// Write every diagnostic and insertion to a log file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// The flags given on this command line, as clap parsed them.
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            assignment: self.assignment,
            scenarios: self.scenarios,
            dry_run: self.dry_run,
            json: self.json,
            perf: self.perf,
            debug_log: self.debug_log.clone(),
        }
    }
}

fn effective_flags(cli: &Cli) -> Result<ConfigFlags> {
    let global_path = global_config_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
        eprintln!("Saved defaults to {}", global_path.display());
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_override_path())?;
        global_flags.union(&local_flags)
    };
    Ok(file_flags.union(&cli_flags))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let effective = effective_flags(&cli)?;
    let Some(file) = cli.file else {
        return Ok(ExitCode::SUCCESS);
    };

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("GRADELINE_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        tracing::warn!(error = %err, path = ?debug_log_path, "failed to initialize debug log");
    }

    let Some(assignment) = effective.assignment else {
        anyhow::bail!("No assignment selected; pass --assignment a1|a2|a3 or save one with --save");
    };
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }

    let options = GradeOptions {
        assignment,
        scenarios: effective.scenarios.unwrap_or_default(),
        dry_run: effective.dry_run,
    };
    let graded = grade_file(&file, &options)
        .with_context(|| format!("Grading {} failed", file.display()))?;
    let report = &graded.report;

    let mut stderr = std::io::stderr().lock();
    ui::write_diagnostics(&mut stderr, report, ui::stderr_supports_color())?;

    let mut stdout = std::io::stdout().lock();
    if effective.json {
        serde_json::to_writer_pretty(&mut stdout, report)?;
        writeln!(stdout)?;
    } else if options.dry_run {
        write!(stdout, "{}", graded.buffer.text())?;
    } else {
        ui::write_summary(&mut stdout, report)?;
    }

    Ok(if report.written {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    run(Cli::parse())
}
