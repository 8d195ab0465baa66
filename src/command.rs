//! Command parsing and the interpreter loop.
//!
//! A line is parsed completely (figure built, condition compiled) before it
//! touches the collection, so a malformed command never half-applies.
use std::io::Write;

use crate::collection::Collection;
use crate::condition::Condition;
use crate::error::{CommandError, ParseError, RunError};
use crate::factory::{self, FigureType};
use crate::figure::Figure;
use crate::report::{self, ReportFormat};
use crate::source::ScriptLine;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Figure),
    Rem(Condition),
    Print,
}

/// What to do with a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// report and keep going
    #[default]
    Continue,
    /// abort the run on the first bad line
    FailFast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineDiagnostic {
    pub line: usize,
    pub text: String,
    pub error: CommandError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub executed: usize,
    pub skipped: Vec<LineDiagnostic>,
    pub removed: usize,
}

pub struct Interpreter<W: Write> {
    collection: Collection,
    format: ReportFormat,
    out: W,
}

// ————————————————————————————————————————————————————————————————————————————
// PARSING
// ————————————————————————————————————————————————————————————————————————————

const REM_USAGE: &str = "REM field operator value";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_uppercase();
    let args = parts.collect::<Vec<_>>();
    match verb.as_str() {
        "ADD" => {
            let (kind, params) = args.split_first().ok_or(ParseError::MissingFigureType)?;
            let kind = FigureType::parse(kind)?;
            Ok(Command::Add(factory::create(kind, params)?))
        }
        "REM" => {
            if args.len() < 3 {
                return Err(CommandError::Arity { usage: REM_USAGE });
            }
            // multi-word values are re-joined with single spaces
            let value = args[2..].join(" ");
            Ok(Command::Rem(Condition::compile(args[0], args[1], &value)?))
        }
        "PRINT" => Ok(Command::Print),
        _ => Err(CommandError::UnknownCommand(verb)),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERPRETER
// ————————————————————————————————————————————————————————————————————————————

impl<W: Write> Interpreter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { collection: Collection::new(), format, out }
    }
    pub fn collection(&self) -> &Collection {
        &self.collection
    }
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Applies an already-parsed command. Returns the number of figures removed.
    pub fn apply(&mut self, command: Command) -> std::io::Result<usize> {
        match command {
            Command::Add(figure) => {
                tracing::debug!(kind = figure.shape().kind(), owner = figure.owner(), "ADD");
                self.collection.append(figure);
                Ok(0)
            }
            Command::Rem(condition) => {
                let removed = self.collection.remove_where(|f| condition.matches(f));
                tracing::debug!(removed, remaining = self.collection.count(), "REM");
                Ok(removed)
            }
            Command::Print => {
                report::write_report(&self.collection, self.format, &mut self.out)?;
                self.out.flush()?;
                Ok(0)
            }
        }
    }

    pub fn run(&mut self, lines: &[ScriptLine], policy: ErrorPolicy) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();
        for line in lines {
            match parse_command(&line.text) {
                Ok(command) => {
                    summary.removed += self.apply(command).map_err(RunError::Output)?;
                    summary.executed += 1;
                }
                Err(error) => {
                    if policy == ErrorPolicy::FailFast {
                        return Err(RunError::Aborted { line: line.number, error });
                    }
                    tracing::warn!(line = line.number, error = %error, "skipping command");
                    summary.skipped.push(LineDiagnostic {
                        line: line.number,
                        text: line.text.clone(),
                        error,
                    });
                }
            }
        }
        Ok(summary)
    }
}

// ------------------------------- Tests ------------------------------------ //
