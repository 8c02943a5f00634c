use std::path::{Path, PathBuf};

/// Session name used for paths that reduce to nothing, such as `/`.
pub const ROOT_SESSION_NAME: &str = "root";

/// A zellij session rooted at a picked directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Name of the session.
    pub name: String,
    /// Working directory the session is created in.
    pub work_dir: PathBuf,
}

impl Session {
    /// Builds the session for a picked directory, naming it with
    /// [`session_name`].
    pub fn for_dir(path: &str) -> Self {
        Self {
            name: session_name(path),
            work_dir: PathBuf::from(path),
        }
    }
}

/// Derives a session name from the last segment of `path`, replacing only
/// the first `.` with `_`.
///
/// Trailing slashes are ignored. A path without a final segment (`..`) is
/// used whole with its slashes removed, and the filesystem root becomes
/// [`ROOT_SESSION_NAME`].
///
/// # Example
///
/// ```
/// # use zellij_sessionizer::zellij::session::session_name;
/// assert_eq!(session_name("/home/user/my.project"), "my_project");
/// assert_eq!(session_name("/home/user/a.b.c"), "a_b.c");
/// ```
pub fn session_name(path: &str) -> String {
    let segment = match Path::new(path).file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => path.replace('/', ""),
    };

    if segment.is_empty() {
        return ROOT_SESSION_NAME.to_string();
    }

    segment.replacen('.', "_", 1)
}
