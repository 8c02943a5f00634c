use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

/// Output of a process whose stdout was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Whether the process exited with status zero.
    pub success: bool,
    pub stdout: String,
}

/// Launches the external programs the sessionizer hands off to.
pub trait CommandRunner {
    /// Runs `program`, writing `input` to its stdin and capturing its stdout.
    /// Stderr stays attached to the terminal so interactive programs can
    /// draw on it.
    fn capture(
        &self,
        program: &str,
        args: &[&str],
        input: &str,
    ) -> io::Result<Captured>;

    /// Runs `program` from `work_dir` on the current terminal and blocks
    /// until it exits, returning its exit code (`None` if killed by a signal).
    fn run_interactive(
        &self,
        program: &str,
        args: &[&str],
        work_dir: &Path,
    ) -> io::Result<Option<i32>>;
}

pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn capture(
        &self,
        program: &str,
        args: &[&str],
        input: &str,
    ) -> io::Result<Captured> {
        debug!("spawning {program} {args:?}");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // stdin is fed from its own thread so a picker that streams output
        // while reading cannot fill stdout and block the write
        let writer = child.stdin.take().map(|mut stdin| {
            let input = input.to_owned();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            let written = writer.join().map_err(|_| {
                io::Error::other("stdin writer thread panicked")
            })?;
            // the picker may exit before reading everything
            if let Err(err) = written {
                if err.kind() != io::ErrorKind::BrokenPipe {
                    return Err(err);
                }
            }
        }

        Ok(Captured {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn run_interactive(
        &self,
        program: &str,
        args: &[&str],
        work_dir: &Path,
    ) -> io::Result<Option<i32>> {
        env::set_current_dir(work_dir)?;
        debug!("running {program} {args:?} in {}", work_dir.display());

        let status = Command::new(program).args(args).status()?;
        Ok(status.code())
    }
}
