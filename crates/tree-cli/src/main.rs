/// `tree_to_text` — convert a binary tree record on stdin into its
/// colon-delimited text form on stdout.
///
/// ```text
/// $ printf 'tree 0\0' | tree_to_text
/// tree:0
/// ```
///
/// The binary layout and its text encoding:
///
/// ```text
/// <header><size>\0{<perms> <filename>\0<20-byte hash>}*
///   → <token>:<size>\n{<perms>:<filename>:<40 hex chars>\n}*
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                          |
/// |------|--------------------------------------------------|
/// | 0    | Record decoded (including a record with no entries) |
/// | 1    | Usage error, malformed record, or I/O failure    |
///
/// Diagnostics go to stderr so stdout can be piped cleanly. Set `RUST_LOG`
/// (e.g. `RUST_LOG=tree_decoder=trace`) to see decoder progress on stderr.
use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: tree_to_text (reads binary tree file from stdin)";

/// The tool takes no arguments. Help and version flags are disabled so
/// that every argument is rejected the same way.
#[derive(Parser)]
#[command(
    name = "tree_to_text",
    about = "Convert a binary tree record to text",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = Cli::try_parse() {
        debug!(error = %e, "rejected command line");
        eprintln!("{USAGE}");
        process::exit(1);
    }

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let result = tree_decoder::decode(stdin, &mut stdout);
    // Whatever was decoded before a failure is still written out.
    let flushed = stdout.flush();

    let summary = result.context("cannot decode tree record")?;
    flushed.context("cannot write to stdout")?;

    debug!(entries = summary.entries, bytes_read = summary.bytes_read, "done");
    Ok(())
}
