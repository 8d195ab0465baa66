//! Script line source: trimmed, non-blank, non-`#` lines in file order.
use std::io::BufRead;
use std::path::Path;

use crate::error::SourceError;

/// One interpretable line, tagged with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub text: String,
}

pub fn read_commands(path: &Path) -> Result<Vec<ScriptLine>, SourceError> {
    let file = std::fs::File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    // bytes are split on '\n' and decoded lossily; only real I/O failures error
    let reader = std::io::BufReader::new(file);
    reader
        .split(b'\n')
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(bytes) => {
                let line = String::from_utf8_lossy(&bytes);
                let text = line.trim();
                if text.is_empty() || text.starts_with('#') {
                    None
                } else {
                    Some(Ok(ScriptLine { number: i + 1, text: text.to_string() }))
                }
            }
            Err(source) => Some(Err(SourceError::Read { path: path.to_path_buf(), source })),
        })
        .collect()
}

// ------------------------------- Tests ------------------------------------ //
