//! CLI interface for stampfmt
//!
//! Every positional argument is one timestamp. Without positional arguments,
//! timestamps are read from stdin, one per line; when stdin is a terminal the
//! current time is formatted instead.
//!
//! # Example
//!
//! ```bash
//! # Both renderings in the local timezone
//! stampfmt 2023-01-15T10:30:00Z
//!
//! # Short form in Tokyo time for epoch milliseconds
//! stampfmt --style short --timezone Asia/Tokyo --epoch-ms 1673778600000
//!
//! # Machine-readable output for a file of JSON values
//! stampfmt --json-input --json < stamps.jsonl
//! ```

use crate::error::{Result, StampfmtError};
use crate::types::{DateTimeInput, FormatStyle};
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use tracing::debug;

/// Render timestamps as short en-US or verbose display strings
#[derive(Parser, Debug, Clone)]
#[command(name = "stampfmt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Which rendering to print
    #[arg(long, short = 's', value_enum, default_value = "both")]
    pub style: StyleArg,

    /// Timezone to render in (e.g. "America/New_York", "Asia/Tokyo", "UTC")
    /// If not specified, uses the system's local timezone
    #[arg(long, short = 'z', env = "STAMPFMT_TIMEZONE")]
    pub timezone: Option<String>,

    /// Render in UTC (overrides --timezone)
    #[arg(long)]
    pub utc: bool,

    /// Treat every input as milliseconds since the Unix epoch
    #[arg(long, conflicts_with = "json_input")]
    pub epoch_ms: bool,

    /// Read stdin lines as JSON values (numbers are epoch milliseconds)
    #[arg(long)]
    pub json_input: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Output as a table
    #[arg(long)]
    pub table: bool,

    /// Exit with an error if any input is not a valid date-time
    #[arg(long)]
    pub strict: bool,

    /// Timestamps to format (read from stdin when omitted)
    pub inputs: Vec<String>,
}

/// Rendering selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// `1/15/2023, 10:30:00 AM`
    Short,
    /// `Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)`
    Detailed,
    /// Short and detailed
    Both,
}

impl StyleArg {
    /// The styles to render, in output order
    pub fn styles(self) -> &'static [FormatStyle] {
        match self {
            StyleArg::Short => &[FormatStyle::Short],
            StyleArg::Detailed => &[FormatStyle::Detailed],
            StyleArg::Both => &[FormatStyle::Short, FormatStyle::Detailed],
        }
    }
}

impl Cli {
    /// Convert one raw argument or stdin line into a formatter input
    ///
    /// Lines that fail to decode stay in the batch and render as invalid.
    pub fn to_input(&self, raw: &str) -> DateTimeInput {
        if self.json_input {
            return parse_json_arg(raw);
        }
        if self.epoch_ms {
            return parse_epoch_arg(raw);
        }
        DateTimeInput::from(raw)
    }

    /// Collect the inputs to format
    ///
    /// Positional arguments win. Otherwise non-empty lines are read from
    /// `reader`.
    pub fn collect_inputs(&self, reader: impl BufRead) -> Result<Vec<DateTimeInput>> {
        if !self.inputs.is_empty() {
            return Ok(self.inputs.iter().map(|raw| self.to_input(raw)).collect());
        }

        let mut inputs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            inputs.push(self.to_input(trimmed));
        }
        Ok(inputs)
    }
}

/// Parse an `--epoch-ms` argument; non-numeric text is kept as unrecognized
pub fn parse_epoch_arg(raw: &str) -> DateTimeInput {
    match raw.trim().parse::<f64>() {
        Ok(ms) => DateTimeInput::EpochMillis(ms),
        Err(_) => DateTimeInput::Unrecognized(raw.to_string()),
    }
}

/// Parse a `--json-input` line; anything but a JSON number or string is
/// kept as unrecognized
pub fn parse_json_arg(raw: &str) -> DateTimeInput {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        debug!("Not a JSON date-time value '{}': {}", raw, e);
        DateTimeInput::Unrecognized(raw.to_string())
    })
}

/// Error returned by `--strict` when some inputs did not parse
pub fn strict_failure(invalid: &[String]) -> Result<()> {
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(StampfmtError::InvalidDateTime(format!(
            "{} input(s) could not be parsed: {}",
            invalid.len(),
            invalid.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{DateTimeFormatter, INVALID_DATE};
    use std::io::Cursor;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["stampfmt", "2023-01-15T10:30:00Z"]).unwrap();
        assert_eq!(cli.style, StyleArg::Both);
        assert!(!cli.json && !cli.table && !cli.strict && !cli.utc);
        assert_eq!(cli.inputs, vec!["2023-01-15T10:30:00Z".to_string()]);
    }

    #[test]
    fn test_style_selection() {
        let cli = Cli::try_parse_from(["stampfmt", "--style", "detailed", "x"]).unwrap();
        assert_eq!(cli.style.styles(), &[FormatStyle::Detailed]);
        assert_eq!(
            StyleArg::Both.styles(),
            &[FormatStyle::Short, FormatStyle::Detailed]
        );
    }

    #[test]
    fn test_json_conflicts_with_table() {
        assert!(Cli::try_parse_from(["stampfmt", "--json", "--table", "x"]).is_err());
    }

    #[test]
    fn test_epoch_conflicts_with_json_input() {
        assert!(Cli::try_parse_from(["stampfmt", "--epoch-ms", "--json-input"]).is_err());
    }

    #[test]
    fn test_epoch_inputs() {
        let cli = Cli::try_parse_from(["stampfmt", "--epoch-ms", "1673778600000", "soon"]).unwrap();
        let inputs = cli.collect_inputs(Cursor::new("")).unwrap();
        assert_eq!(inputs[0], DateTimeInput::EpochMillis(1_673_778_600_000.0));
        assert_eq!(inputs[1], DateTimeInput::Unrecognized("soon".into()));
    }

    #[test]
    fn test_stdin_lines_skip_blanks() {
        let cli = Cli::try_parse_from(["stampfmt"]).unwrap();
        let inputs = cli
            .collect_inputs(Cursor::new("2023-01-15\n\n  garbage  \n"))
            .unwrap();
        assert_eq!(
            inputs,
            vec![DateTimeInput::from("2023-01-15"), DateTimeInput::from("garbage")]
        );
    }

    #[test]
    fn test_json_input_lines() {
        let cli = Cli::try_parse_from(["stampfmt", "--json-input"]).unwrap();
        let inputs = cli
            .collect_inputs(Cursor::new("1673778600000\n\"2023-01-15T10:30:00Z\"\n"))
            .unwrap();
        assert_eq!(inputs[0], DateTimeInput::EpochMillis(1_673_778_600_000.0));
        assert_eq!(inputs[1], DateTimeInput::from("2023-01-15T10:30:00Z"));

    }

    #[test]
    fn test_bad_json_line_keeps_batch_going() {
        let cli = Cli::try_parse_from(["stampfmt", "--json-input"]).unwrap();
        let inputs = cli
            .collect_inputs(Cursor::new("not json\n{\"at\": 1}\n1673778600000\n"))
            .unwrap();
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0], DateTimeInput::Unrecognized("not json".into()));
        assert_eq!(inputs[1], DateTimeInput::Unrecognized("{\"at\": 1}".into()));
        assert_eq!(inputs[2], DateTimeInput::EpochMillis(1_673_778_600_000.0));

        let record = DateTimeFormatter::utc().format_all(inputs[0].clone(), StyleArg::Both.styles());
        assert!(!record.valid);
        assert_eq!(record.input, "not json");
        assert_eq!(record.short.as_deref(), Some(INVALID_DATE));
    }

    #[test]
    fn test_strict_failure() {
        assert!(strict_failure(&[]).is_ok());
        let err = strict_failure(&["garbage".to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date-time: 1 input(s) could not be parsed: garbage"
        );
    }
}
