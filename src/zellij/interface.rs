use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use crate::process::CommandRunner;
use crate::zellij::session::Session;

/// Set by zellij inside every session it runs.
const ZELLIJ_ENV: &str = "ZELLIJ";

/// Exit code reported when the multiplexer was killed by a signal.
const SIGNALED_EXIT_CODE: i32 = 1;

pub const NESTED_SESSION_MESSAGE: &str = "Zellij environment detected!
Script only works outside of Zellij.

This is because nested Zellij sessions are not recommended,
and it is currently not possible to change Zellij sessions
from within a script.

Exit Zellij and try again,
or unset ZELLIJ env var to force this script to work.";

/// Returns `true` when running inside a zellij session.
pub fn is_nested_session() -> bool {
    env::var_os(ZELLIJ_ENV).is_some()
}

/// Attaches to `session`, creating it in its working directory if it does
/// not exist yet. Blocks until the client exits and returns its exit code.
pub fn attach_or_create(
    runner: &dyn CommandRunner,
    multiplexer: &str,
    session: &Session,
) -> Result<i32> {
    debug!(
        "attaching to session '{}' in {}",
        session.name,
        session.work_dir.display()
    );

    let code = runner
        .run_interactive(
            multiplexer,
            &["attach", &session.name, "-c"],
            &session.work_dir,
        )
        .with_context(|| {
            format!("Failed to launch zellij session '{}'", session.name)
        })?;

    Ok(code.unwrap_or(SIGNALED_EXIT_CODE))
}
