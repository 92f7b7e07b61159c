//! stampfmt - Render timestamps as short en-US or verbose display strings

use clap::Parser;
use stampfmt::{
    cli::{Cli, strict_failure},
    error::Result,
    formatter::DateTimeFormatter,
    output::get_formatter,
    timezone::TimezoneConfig,
    types::DateTimeInput,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The --verbose flag should override RUST_LOG.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("stampfmt=info,stampfmt_core=info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let tz_config = TimezoneConfig::from_cli(cli.timezone.as_deref(), cli.utc)?;
    info!("Using timezone: {}", tz_config.display_name());
    let formatter = DateTimeFormatter::new(tz_config);

    let inputs = if cli.inputs.is_empty() && is_terminal::is_terminal(std::io::stdin()) {
        info!("No inputs given, formatting the current time");
        vec![DateTimeInput::from(chrono::Utc::now())]
    } else {
        cli.collect_inputs(std::io::stdin().lock())?
    };
    info!("Formatting {} timestamp(s)", inputs.len());

    let styles = cli.style.styles();
    let records: Vec<_> = inputs
        .into_iter()
        .map(|input| formatter.format_all(input, styles))
        .collect();

    let invalid: Vec<String> = records
        .iter()
        .filter(|record| !record.valid)
        .map(|record| record.input.clone())
        .collect();
    if !invalid.is_empty() {
        warn!("{} input(s) are not valid date-times", invalid.len());
    }

    let output = get_formatter(cli.json, cli.table).format_records(&records, styles);
    if !output.is_empty() {
        println!("{}", output);
    }

    if cli.strict {
        strict_failure(&invalid)?;
    }
    Ok(())
}
