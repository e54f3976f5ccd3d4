//! Output formatting for result records.
//!
//! Supports a plain-text result card, pretty JSON, and a debug dump.

use anyhow::Result;
use std::fmt::Write;
use tracing::debug;

use crate::calculator::ResultRecord;
use crate::services::Outcome;

const PLACEHOLDER: &str = "—";

fn or_placeholder(s: &str) -> &str {
    if s.trim().is_empty() { PLACEHOLDER } else { s }
}

/// Renders the result card shown after a submission.
pub fn render_card(record: &ResultRecord) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", or_placeholder(&record.name));
    let _ = writeln!(out, "{}", or_placeholder(&record.roll_number));
    let _ = writeln!(out, "  Total       {}", record.total);
    let _ = writeln!(out, "  Percentage  {:.2}%", record.percentage);
    let _ = writeln!(out, "  Grade       {}", record.grade);
    out
}

/// Logs a record using Rust's debug pretty-print format.
pub fn print_pretty(record: &ResultRecord) {
    debug!("{:#?}", record);
}

/// Serializes an outcome (record, source and timestamp) as pretty JSON.
pub fn render_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Identity, SubjectMarks, compute};
    use crate::form::FormPayload;

    fn record(name: &str, roll: &str, marks: [f64; 5]) -> ResultRecord {
        compute(&Identity::new(name, roll), &SubjectMarks::from_array(marks))
    }

    #[test]
    fn test_card_contents() {
        let card = render_card(&record("Alex Johnson", "23CS1005", [90.0, 85.0, 88.0, 78.0, 92.0]));
        let lines: Vec<_> = card.lines().collect();

        assert_eq!(lines[0], "Alex Johnson");
        assert_eq!(lines[1], "23CS1005");
        assert_eq!(lines[2], "  Total       433");
        assert_eq!(lines[3], "  Percentage  86.60%");
        assert_eq!(lines[4], "  Grade       A");
    }

    #[test]
    fn test_card_placeholders() {
        let card = render_card(&record("", "  ", [40.0; 5]));
        let lines: Vec<_> = card.lines().collect();

        assert_eq!(lines[0], "—");
        assert_eq!(lines[1], "—");
        assert_eq!(lines[3], "  Percentage  40.00%");
        assert_eq!(lines[4], "  Grade       F");
    }

    #[test]
    fn test_card_fractional_total() {
        let card = render_card(&record("A", "1", [72.5, 60.0, 60.0, 60.0, 60.0]));
        assert!(card.contains("Total       312.5"));
        assert!(card.contains("Percentage  62.50%"));
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&record("A", "1", [0.0; 5]));
    }

    #[test]
    fn test_render_json() {
        let outcome = Outcome::local(&FormPayload::new("Sam", "R7", ["60"; 5]));
        let json = render_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "local");
        assert_eq!(value["record"]["total"], 300.0);
        assert_eq!(value["record"]["grade"], "C");
        assert!(value["computed_at"].is_string());
    }
}
