#![allow(dead_code)]

use globset::Glob;
use powerprompt::{CommandError, Environment, Flags};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scripted environment: files and command outputs are declared up front.
#[derive(Default)]
pub struct MockEnvironment {
    pub pwd: PathBuf,
    pub home: Option<PathBuf>,
    pub vars: HashMap<String, String>,
    pub flags: Flags,
    /// File names in `pwd`.
    pub files: Vec<String>,
    /// File names somewhere in the parent directories.
    pub parent_files: Vec<String>,
    /// Keyed by `"<command> <args>"`.
    pub commands: HashMap<String, Result<String, CommandError>>,
}

impl MockEnvironment {
    pub fn new(pwd: &str) -> Self {
        Self {
            pwd: PathBuf::from(pwd),
            home: Some(PathBuf::from("/home/user")),
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_error_code(mut self, code: i32) -> Self {
        self.flags.error_code = code;
        self
    }

    pub fn with_file(mut self, name: &str) -> Self {
        self.files.push(name.to_string());
        self
    }

    pub fn with_parent_file(mut self, name: &str) -> Self {
        self.parent_files.push(name.to_string());
        self
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_command(mut self, command: &str, output: Result<&str, CommandError>) -> Self {
        self.commands
            .insert(command.to_string(), output.map(str::to_string));
        self
    }
}

fn matches(pattern: &str, names: &[String]) -> bool {
    let Ok(glob) = Glob::new(pattern) else {
        return false;
    };
    let matcher = glob.compile_matcher();
    names.iter().any(|name| matcher.is_match(name))
}

impl Environment for MockEnvironment {
    fn pwd(&self) -> &Path {
        &self.pwd
    }

    fn home(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn getenv(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn environ(&self) -> HashMap<String, String> {
        self.vars.clone()
    }

    fn user(&self) -> String {
        "user".to_string()
    }

    fn host(&self) -> String {
        "workstation".to_string()
    }

    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn has_files(&self, pattern: &str) -> bool {
        matches(pattern, &self.files)
    }

    fn has_file_in_parent_dirs(&self, pattern: &str, depth: u32) -> bool {
        depth > 0 && matches(pattern, &self.parent_files)
    }

    fn has_command(&self, command: &str) -> bool {
        let prefix = format!("{command} ");
        self.commands.keys().any(|key| key.starts_with(&prefix))
    }

    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        let key = format!("{} {}", command, args.join(" "));
        self.commands
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(CommandError::NotFound(command.to_string())))
    }
}
