//! Output formatting module for stampfmt
//!
//! This module provides renderers for a batch of formatted timestamps:
//! - Plain lines for shell pipelines (the default)
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use stampfmt::formatter::DateTimeFormatter;
//! use stampfmt::output::get_formatter;
//! use stampfmt::types::FormatStyle;
//!
//! let styles = [FormatStyle::Short];
//! let records = vec![DateTimeFormatter::utc().format_all("2023-01-15T10:30:00Z", &styles)];
//!
//! let formatter = get_formatter(false, false);
//! assert_eq!(formatter.format_records(&records, &styles), "1/15/2023, 10:30:00 AM");
//! ```

use crate::types::{FormatStyle, FormattedTimestamp};
use prettytable::{Cell, Row, Table, format};
use serde_json::json;

/// Trait for output formatters
///
/// `styles` lists the renderings that were requested, in display order.
pub trait OutputFormatter {
    /// Format a batch of records
    fn format_records(&self, records: &[FormattedTimestamp], styles: &[FormatStyle]) -> String;
}

/// One line per input, renderings separated by a tab
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_records(&self, records: &[FormattedTimestamp], styles: &[FormatStyle]) -> String {
        records
            .iter()
            .map(|record| {
                styles
                    .iter()
                    .filter_map(|style| record.get(*style))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    fn header(style: FormatStyle) -> &'static str {
        match style {
            FormatStyle::Short => "Short",
            FormatStyle::Detailed => "Detailed",
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_records(&self, records: &[FormattedTimestamp], styles: &[FormatStyle]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![Cell::new("Input").style_spec("b")];
        titles.extend(
            styles
                .iter()
                .map(|style| Cell::new(Self::header(*style)).style_spec("b")),
        );
        table.set_titles(Row::new(titles));

        for record in records {
            let mut cells = vec![Cell::new(&record.input)];
            cells.extend(styles.iter().map(|style| {
                let cell = Cell::new(record.get(*style).unwrap_or(""));
                if record.valid { cell } else { cell.style_spec("Fr") }
            }));
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_records(&self, records: &[FormattedTimestamp], _styles: &[FormatStyle]) -> String {
        let invalid = records.iter().filter(|r| !r.valid).count();
        let output = json!({
            "timestamps": records,
            "summary": {
                "total": records.len(),
                "invalid": invalid,
            }
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Factory function to get the appropriate formatter
///
/// JSON wins over the table; otherwise plain lines are produced.
pub fn get_formatter(json: bool, table: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else if table {
        Box::new(TableFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
