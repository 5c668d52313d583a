use crate::report::Report;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ha_api::fetch_lines;
use ha_parser::{find_deepest_text, parse_lines, ParseOptions};
use std::io::Write;
use tracing::trace;

#[derive(Clone, Debug, Parser)]
#[command(about = "Print the text found at the greatest nesting depth of a document")]
pub struct Cli {
    #[arg(help = "Location of the document, http(s):// or file:// url")]
    pub url: String,

    #[arg(
        long = "strict",
        help = "Fail when anything follows the root element instead of ignoring it",
        action = ArgAction::SetTrue,
    )]
    pub strict: bool,

    #[arg(
        long = "tree",
        help = "Print the parsed tree before the result",
        action = ArgAction::SetTrue,
    )]
    pub tree: bool,

    #[arg(
        long = "json",
        help = "Print the result as json, including the depth",
        action = ArgAction::SetTrue,
    )]
    pub json: bool,
}

/// Main entry: fetch, parse, search and write the result to `out`.
pub async fn run_command_with_args(cli: Cli, out: &mut impl Write) -> Result<()> {
    trace!("running with args: {cli:?}");

    let lines = fetch_lines(cli.url.as_str())
        .await
        .context("URL connection error")?;
    let root = parse_lines(&lines, ParseOptions { strict: cli.strict })
        .context("malformed HTML")?;

    if cli.tree {
        write!(out, "{}", root.dump())?;
    }

    let report = Report::new(cli.url.as_str(), find_deepest_text(&root));
    if cli.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else if let Some(text) = report.text {
        writeln!(out, "{text}")?;
    }
    out.flush()?;
    Ok(())
}
