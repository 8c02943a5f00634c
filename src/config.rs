use std::env;

const DEFAULT_PICKER: &str = "fzf";
const DEFAULT_MULTIPLEXER: &str = "zellij";

const PICKER_ENV: &str = "ZELLIJ_SESSIONIZER_PICKER";
const MULTIPLEXER_ENV: &str = "ZELLIJ_SESSIONIZER_MULTIPLEXER";

/// Runtime settings resolved from the environment and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fuzzy picker program, fed candidates on stdin.
    pub picker: String,
    /// Multiplexer client used to attach to or create the session.
    pub multiplexer: String,
    /// Whether to refuse to run from inside an active zellij session.
    pub refuse_nested: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: DEFAULT_PICKER.to_string(),
            multiplexer: DEFAULT_MULTIPLEXER.to_string(),
            refuse_nested: false,
        }
    }
}

impl Config {
    pub fn from_env(refuse_nested: bool) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), refuse_nested)
    }

    /// Builds the config from an arbitrary variable lookup. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F, refuse_nested: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            picker: non_empty(PICKER_ENV, DEFAULT_PICKER),
            multiplexer: non_empty(MULTIPLEXER_ENV, DEFAULT_MULTIPLEXER),
            refuse_nested,
        }
    }
}
