//! Error taxonomy for script interpretation.
//!
//! Everything except [`SourceError`] is per-line: the interpreter reports it
//! and moves on to the next line.
use std::path::PathBuf;

/// ADD parameter problems: bad arity, bad numeric token, bad figure type.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("missing figure type. Usage: ADD FIGURE_TYPE params...")]
    MissingFigureType,
    #[error("unknown figure type: {0}")]
    UnknownFigureType(String),
    #[error("invalid {kind} parameters. Usage: {usage}")]
    Arity { kind: &'static str, usage: &'static str },
    #[error("invalid {param}: `{token}` is not a valid number")]
    Number { param: &'static str, token: String },
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("ADD failed: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid REM command format. Usage: {usage}")]
    Arity { usage: &'static str },
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid operator for {field} field: {operator}")]
    InvalidOperator { field: &'static str, operator: String },
    #[error("invalid {field} value: `{value}`")]
    InvalidValue { field: &'static str, value: String },
}

/// Fatal: the script itself could not be opened or read.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("error opening file {}: {source}", .path.display())]
    Open { path: PathBuf, source: std::io::Error },
    #[error("error reading file {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
}

/// Conditions that end an interpreter run early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
    #[error("line {line}: {error}")]
    Aborted { line: usize, error: CommandError },
}
