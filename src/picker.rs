use std::io;

use thiserror::Error;
use tracing::debug;

use crate::process::CommandRunner;

#[derive(Debug, Error)]
pub enum PickerError {
    /// The picker program could not be started at all.
    #[error("Failed to execute {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Offers `candidates` to the picker and returns the chosen line.
///
/// Returns `Ok(None)` when the picker exits abnormally (e.g. the user
/// pressed escape) or prints nothing.
pub fn pick(
    runner: &dyn CommandRunner,
    program: &str,
    candidates: &[String],
) -> Result<Option<String>, PickerError> {
    let mut input = candidates.join("\n");
    input.push('\n');

    let captured =
        runner
            .capture(program, &[], &input)
            .map_err(|source| PickerError::Launch {
                program: program.to_string(),
                source,
            })?;

    if !captured.success {
        debug!("{program} exited without a selection");
        return Ok(None);
    }

    let selection = captured.stdout.trim();
    if selection.is_empty() {
        return Ok(None);
    }

    Ok(Some(selection.to_string()))
}
