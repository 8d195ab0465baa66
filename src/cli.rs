//! CLI: run a figure script and print the PRINT reports.
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::command::{ErrorPolicy, Interpreter, LineDiagnostic, RunSummary};
use crate::report::ReportFormat;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// interpret an ADD / REM / PRINT script over a collection of 3D figures
#[derive(Parser, Debug)]
#[command(name = "figure-script")]
pub struct CommandLineInterface {
    /// command script; blank lines and lines starting with '#' are ignored
    script: PathBuf,

    /// report format used by PRINT
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// write reports to this file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// abort on the first malformed line instead of skipping it
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// print a run summary to stderr when done
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    /// Parses argv. Usage errors exit with status 1; `--help` exits with 0.
    pub fn load() -> Self {
        match Self::try_parse() {
            Ok(x) => x,
            Err(error) => {
                let _ = error.print();
                std::process::exit(if error.use_stderr() { 1 } else { 0 });
            }
        }
    }
    pub fn is_no_op(&self) -> bool {
        self.no_op
    }
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
    pub fn run(&self) -> Result<()> {
        let started = Instant::now();
        eprintln!("Processing file: {}", self.script.display());

        let lines = crate::source::read_commands(&self.script)?;
        tracing::info!(lines = lines.len(), "script loaded");

        let policy = if self.strict { ErrorPolicy::FailFast } else { ErrorPolicy::Continue };
        let mut interpreter = Interpreter::new(self.open_output()?, self.format);
        let summary = interpreter
            .run(&lines, policy)
            .with_context(|| format!("failed to process {}", self.script.display()))?;

        let remaining = interpreter.collection().count();
        tracing::info!(
            executed = summary.executed,
            skipped = summary.skipped.len(),
            remaining,
            "run finished"
        );
        write_diagnostics(&summary.skipped, &mut std::io::stderr().lock())?;
        if self.summary {
            print_summary(&summary, remaining, started.elapsed().as_secs_f64());
        }
        Ok(())
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        let Some(out) = self.out.as_ref() else {
            return Ok(Box::new(std::io::stdout()));
        };
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = std::fs::File::create(out)
            .with_context(|| format!("failed to create {}", out.display()))?;
        Ok(Box::new(std::io::BufWriter::new(file)))
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// One stderr line per skipped command, independent of the log filter.
fn write_diagnostics(skipped: &[LineDiagnostic], out: &mut dyn Write) -> std::io::Result<()> {
    for diag in skipped {
        writeln!(out, "{}: `{}`: {}", format!("line {}", diag.line).yellow(), diag.text, diag.error)?;
    }
    Ok(())
}

fn print_summary(summary: &RunSummary, remaining: usize, elapsed_secs: f64) {
    eprintln!("{}", "—— summary ——".bold());
    eprintln!("  executed:  {}", summary.executed.to_string().green());
    eprintln!("  removed:   {}", summary.removed);
    eprintln!("  remaining: {remaining}");
    if summary.skipped.is_empty() {
        eprintln!("  skipped:   0");
    } else {
        eprintln!("  skipped:   {}", summary.skipped.len().to_string().yellow());
    }
    eprintln!("  elapsed:   {elapsed_secs:.3}s");
}

// ------------------------------- Tests ------------------------------------ //
