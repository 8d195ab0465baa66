//! PRINT output: numbered figure blocks (text) or a JSON array.
use std::io::{self, Write};
use serde::Serialize;

use crate::collection::Collection;
use crate::figure::Figure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Entry<'a> {
    index: usize,
    #[serde(flatten)]
    figure: &'a Figure,
}

pub fn write_report(collection: &Collection, format: ReportFormat, out: &mut dyn Write) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text(collection, out),
        ReportFormat::Json => write_json(collection, out),
    }
}

fn write_text(collection: &Collection, out: &mut dyn Write) -> io::Result<()> {
    if collection.is_empty() {
        return writeln!(out, "Container is empty");
    }
    for (i, figure) in collection.iter().enumerate() {
        writeln!(out, "Figure {}:", i + 1)?;
        write!(out, "{}", figure.render())?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_json(collection: &Collection, out: &mut dyn Write) -> io::Result<()> {
    let entries = collection
        .iter()
        .enumerate()
        .map(|(i, figure)| Entry { index: i + 1, figure })
        .collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn render(collection: &Collection, format: ReportFormat) -> String {
        let mut buf = Vec::new();
        write_report(collection, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_collection_prints_sentinel() {
        assert_eq!(render(&Collection::new(), ReportFormat::Text), "Container is empty\n");
        assert_eq!(render(&Collection::new(), ReportFormat::Json).trim(), "[]");
    }

    #[test]
    fn text_is_numbered_from_one() {
        let mut c = Collection::new();
        c.append(Figure::sphere(5, "Alice", 2.5));
        c.append(Figure::parallelepiped([2, 3, 4], "Carl", 1.5));
        let text = render(&c, ReportFormat::Text);
        assert!(text.starts_with("Figure 1:\n=Ball=\n"));
        assert!(text.contains("\n\nFigure 2:\n=Parallelepiped=\n"));
        assert!(!text.contains("Figure 3:"));
    }

    #[test]
    fn json_entries_carry_index_and_kind() {
        let mut c = Collection::new();
        c.append(Figure::sphere(5, "Alice", 2.5));
        let value: serde_json::Value = serde_json::from_str(&render(&c, ReportFormat::Json)).unwrap();
        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[0]["kind"], "sphere");
        assert_eq!(value[0]["radius"], 5);
        assert_eq!(value[0]["density"], 2.5);
    }
}
