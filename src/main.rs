use anyhow::{Context, Result};
use clap::Parser;

use retype::cli::{CliArgs, Report};
use retype::config::{OutputFormat, RetypeConfig};
use retype::{Command, Dubeolsik};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = RetypeConfig::load();
    retype::tracing::init(config.file_logging);
    tracing::debug!("Using config {:?}", config);

    let request = args.into_request().map_err(anyhow::Error::msg)?;
    let json = request.json || config.output == OutputFormat::Json;
    let direction = request.direction;

    let mut session = request.into_session(Dubeolsik::new());
    let outcome = match direction {
        Some(direction) => session.replace_selection_as(direction),
        None => session.dispatch(Command::ReplaceText),
    }
    .context("Failed to replace selection")?;

    let report = Report::new(&session, &outcome).context("Failed to read back selection")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
