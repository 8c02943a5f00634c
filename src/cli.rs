//! CLI argument parser
use clap::Parser;
use clap_complete::Shell;

/// Command-line argument parser for `zellij-sessionizer`.
#[derive(Debug, Parser)]
#[command(name = "zellij-sessionizer")]
#[command(version)]
#[command(
    about = "Pick a directory with fzf and open a zellij session in it",
    long_about = "zellij-sessionizer - A tiny sessionizer for zellij.

Every path argument is offered as a candidate if it is a directory. A path
ending in `/*` offers each immediate subdirectory instead. The chosen
directory becomes the working directory of a zellij session named after its
last path segment (first `.` replaced with `_`), created if missing.

Examples:
 zellij-sessionizer ~/dotfiles '~/code/*'  # quote globs to keep them literal
 zellij-sessionizer --completions zsh      # print zsh completions

Environment:
 ZELLIJ_SESSIONIZER_PICKER       picker program (default: fzf)
 ZELLIJ_SESSIONIZER_MULTIPLEXER  multiplexer client (default: zellij)"
)]
pub struct Args {
    /// Directories to choose from; `dir/*` expands to its subdirectories
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    #[arg(
        long,
        help = "Refuse to run from inside an active zellij session"
    )]
    pub refuse_nested: bool,

    #[arg(
        long,
        value_name = "SHELL",
        exclusive = true,
        help = "Print a completion script for the given shell and exit"
    )]
    pub completions: Option<Shell>,
}
