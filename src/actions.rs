use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::paths::collect_candidates;
use crate::picker::pick;
use crate::process::{CommandRunner, SystemCommandRunner};
use crate::zellij::interface::{
    NESTED_SESSION_MESSAGE, attach_or_create, is_nested_session,
};
use crate::zellij::session::Session;

pub const USAGE_MESSAGE: &str = "No paths were specified, usage: ./zellij-sessionizer path1 path2/* etc...";
pub const NO_CANDIDATES_MESSAGE: &str =
    "No valid directories found to choose from.";

/// Runs the sessionizer for the parsed arguments and returns the exit code.
pub fn handle(args: Args) -> Result<i32> {
    let mut stdout = io::stdout().lock();

    if let Some(shell) = args.completions {
        print_completions(shell, &mut stdout);
        return Ok(0);
    }

    let config = Config::from_env(args.refuse_nested);
    debug!("using {config:?}");

    run(&args.paths, &config, &SystemCommandRunner, &mut stdout)
}

/// Validates `paths`, lets the user pick a candidate and attaches to its
/// session. User-facing messages are written to `out`.
pub fn run(
    paths: &[String],
    config: &Config,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<i32> {
    if config.refuse_nested && is_nested_session() {
        writeln!(out, "{NESTED_SESSION_MESSAGE}")?;
        return Ok(1);
    }

    if paths.is_empty() {
        writeln!(out, "{USAGE_MESSAGE}")?;
        return Ok(1);
    }

    let candidates = collect_candidates(paths);
    for path in &candidates.missing {
        writeln!(out, "Warning: Directory not found: {path}")?;
    }

    if candidates.list.is_empty() {
        writeln!(out, "{NO_CANDIDATES_MESSAGE}")?;
        return Ok(0);
    }

    let selected = match pick(runner, &config.picker, &candidates.list) {
        Ok(Some(selected)) => selected,
        Ok(None) => return Ok(0),
        Err(err) => {
            debug!("{err:?}");
            writeln!(out, "Error: {err}")?;
            return Ok(0);
        }
    };

    // the terminal belongs to the multiplexer from here on
    out.flush().context("Failed to flush output")?;

    let session = Session::for_dir(&selected);
    attach_or_create(runner, &config.multiplexer, &session)
}

fn print_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
