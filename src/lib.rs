pub mod actions;
pub mod cli;
pub mod config;
pub mod paths;
pub mod picker;
pub mod process;
pub mod zellij;
