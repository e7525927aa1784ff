pub mod system;

pub use system::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-invocation inputs handed over by the shell integration.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Exit status of the last command.
    pub error_code: i32,
    /// Width of the terminal in cells, when the shell reports it.
    pub terminal_width: Option<usize>,
    pub shell: String,
    /// Emit no escape sequences at all.
    pub plain: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{command} exited with status {code}")]
    Failed { command: String, code: i32 },
    #[error("failed to run {command}: {reason}")]
    Io { command: String, reason: String },
}

/// Everything a segment may ask about the machine it renders on.
///
/// Segments never touch the file system or spawn processes directly, which
/// keeps them testable against a scripted implementation.
pub trait Environment: Send + Sync {
    fn pwd(&self) -> &Path;

    fn home(&self) -> Option<PathBuf>;

    fn getenv(&self, key: &str) -> Option<String>;

    fn environ(&self) -> HashMap<String, String>;

    fn user(&self) -> String;

    fn host(&self) -> String;

    fn flags(&self) -> &Flags;

    /// Whether a file matching the glob `pattern` exists directly in `pwd`.
    fn has_files(&self, pattern: &str) -> bool;

    /// Whether a file matching `pattern` exists in one of the `depth`
    /// directories above `pwd`.
    fn has_file_in_parent_dirs(&self, pattern: &str, depth: u32) -> bool;

    fn has_command(&self, command: &str) -> bool;

    /// Run `command` and return its trimmed stdout.
    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError>;
}
