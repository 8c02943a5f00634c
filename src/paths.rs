//! Candidate collection: directory checks and one-level `dir/*` expansion.
use std::fs;
use std::path::Path;

use dirs::home_dir;
use tracing::debug;

/// Suffix marking a specifier whose immediate subdirectories are offered.
pub const GLOB_SUFFIX: &str = "/*";

/// Ordered candidates plus every path the user should be warned about.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Candidates {
    pub list: Vec<String>,
    /// Paths that were not found, in the order the warnings occur.
    pub missing: Vec<String>,
}

/// Returns `true` if `path` exists and is a directory (symlinks followed).
pub fn is_dir(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}

/// Replaces a leading `~` with the home directory. Quoting a glob such as
/// `'~/code/*'` keeps the shell from expanding the tilde too.
pub fn expand_home(spec: &str) -> String {
    let rest = match spec.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return spec.to_string(),
    };

    match home_dir() {
        Some(home) => format!("{}{}", home.display(), rest),
        None => spec.to_string(),
    }
}

/// Appends `path` to `list` if it is a directory.
pub fn append_path(list: &mut Vec<String>, path: &str) -> bool {
    if is_dir(path) {
        list.push(path.to_string());
        return true;
    }
    false
}

/// Expands a single specifier into `list`.
///
/// Plain specifiers behave like [`append_path`]. A specifier ending in
/// [`GLOB_SUFFIX`] appends every immediate child of its base that is a
/// directory, in directory-listing order. A missing glob base is pushed to
/// `missing` but the listing is still attempted; a failed listing only
/// contributes nothing.
///
/// Returns `false` when the caller should warn about `spec` itself.
pub fn append_all_paths(
    list: &mut Vec<String>,
    missing: &mut Vec<String>,
    spec: &str,
) -> bool {
    let Some(base) = spec.strip_suffix(GLOB_SUFFIX) else {
        return append_path(list, spec);
    };
    let base = if base.is_empty() { "/" } else { base };

    let base_found = is_dir(base);
    if !base_found {
        missing.push(base.to_string());
    }

    match fs::read_dir(base) {
        Ok(entries) => {
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!("skipping unreadable entry in {base}: {err}");
                        continue;
                    }
                };

                match entry.path().into_os_string().into_string() {
                    Ok(path) => {
                        append_path(list, &path);
                    }
                    Err(path) => {
                        debug!("skipping non UTF-8 path {path:?}");
                    }
                }
            }
        }
        Err(err) => debug!("failed to list {base}: {err}"),
    }

    glob_expansion_succeeded(base_found)
}

/// Whether a glob specifier counts as successfully expanded.
///
/// Always `true`, even for a missing base or an empty listing, so a glob
/// never produces the second "not found" warning a plain path would.
pub fn glob_expansion_succeeded(_base_found: bool) -> bool {
    true
}

/// Expands every specifier, in order, into a single candidate list.
pub fn collect_candidates<S: AsRef<str>>(specs: &[S]) -> Candidates {
    let mut candidates = Candidates::default();

    for spec in specs {
        let spec = expand_home(spec.as_ref());
        if !append_all_paths(
            &mut candidates.list,
            &mut candidates.missing,
            &spec,
        ) {
            candidates.missing.push(spec);
        }
    }

    debug!(
        "collected {} candidates, {} missing",
        candidates.list.len(),
        candidates.missing.len()
    );

    candidates
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn path_of(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    fn project_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("f"), "not a directory").unwrap();
        dir
    }

    #[test]
    fn is_dir_distinguishes_files_and_missing_paths() {
        let dir = project_tree();
        assert!(is_dir(&path_of(&dir, "a")));
        assert!(!is_dir(&path_of(&dir, "f")));
        assert!(!is_dir(&path_of(&dir, "nope")));
        assert!(!is_dir(""));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_candidates() {
        let dir = project_tree();
        let link = path_of(&dir, "link");
        std::os::unix::fs::symlink(dir.path().join("a"), &link).unwrap();
        let file_link = path_of(&dir, "file-link");
        std::os::unix::fs::symlink(dir.path().join("f"), &file_link).unwrap();

        assert!(is_dir(&link));
        assert!(!is_dir(&file_link));

        let candidates = collect_candidates(&[format!(
            "{}/*",
            dir.path().display()
        )]);
        assert!(candidates.list.contains(&link));
        assert!(!candidates.list.contains(&file_link));
    }

    #[test]
    fn plain_paths_keep_order_and_report_missing() {
        let dir = project_tree();
        let b = path_of(&dir, "b");
        let gone = path_of(&dir, "gone");
        let a = path_of(&dir, "a");

        let candidates = collect_candidates(&[&b, &gone, &a]);

        assert_eq!(candidates.list, vec![b, a]);
        assert_eq!(candidates.missing, vec![gone]);
    }

    #[test]
    fn plain_file_is_not_a_candidate() {
        let dir = project_tree();
        let f = path_of(&dir, "f");

        let candidates = collect_candidates(&[&f]);

        assert!(candidates.list.is_empty());
        assert_eq!(candidates.missing, vec![f]);
    }

    #[test]
    fn glob_offers_only_subdirectories() {
        let dir = project_tree();
        let spec = format!("{}/*", dir.path().display());

        let candidates = collect_candidates(&[spec]);

        let mut list = candidates.list.clone();
        list.sort();
        assert_eq!(list, vec![path_of(&dir, "a"), path_of(&dir, "b")]);
        assert!(candidates.missing.is_empty());
    }

    #[test]
    fn glob_of_empty_directory_still_succeeds() {
        let dir = TempDir::new().unwrap();
        let spec = format!("{}/*", dir.path().display());
        let mut list = Vec::new();
        let mut missing = Vec::new();

        assert!(append_all_paths(&mut list, &mut missing, &spec));
        assert!(list.is_empty());
        assert!(missing.is_empty());
    }

    #[test]
    fn missing_glob_base_warns_once_and_keeps_other_candidates() {
        let dir = project_tree();
        let base = path_of(&dir, "gone");
        let spec = format!("{base}/*");
        let a = path_of(&dir, "a");

        let candidates = collect_candidates(&[spec, a.clone()]);

        assert_eq!(candidates.list, vec![a]);
        assert_eq!(candidates.missing, vec![base]);
    }

    #[test]
    fn glob_base_that_is_a_file_contributes_nothing() {
        let dir = project_tree();
        let base = path_of(&dir, "f");

        let candidates = collect_candidates(&[format!("{base}/*")]);

        assert!(candidates.list.is_empty());
        assert_eq!(candidates.missing, vec![base]);
    }

    #[test]
    fn glob_missing_base_always_reports_success() {
        assert!(glob_expansion_succeeded(false));
        assert!(glob_expansion_succeeded(true));
    }

    #[test]
    fn expand_home_only_touches_leading_tilde() {
        assert_eq!(expand_home("/srv/code"), "/srv/code");
        assert_eq!(expand_home("~user/code"), "~user/code");
        assert_eq!(expand_home("code/~"), "code/~");

        if let Some(home) = home_dir() {
            let home = home.display().to_string();
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/code/*"), format!("{home}/code/*"));
        }
    }
}
