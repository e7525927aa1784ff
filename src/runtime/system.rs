use crate::runtime::{CommandError, Environment, Flags};
use crate::utils::Cache;
use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tracing::debug;
use walkdir::WalkDir;

const COMMAND_CACHE_TTL: Duration = Duration::from_secs(30);

/// The real machine: current directory, process environment, `PATH`.
pub struct SystemEnvironment {
    pwd: PathBuf,
    flags: Flags,
    commands: Cache<String, Result<String, CommandError>>,
}

impl SystemEnvironment {
    pub fn new(flags: Flags) -> Result<Self> {
        let pwd = env::current_dir().context("Failed to get current directory")?;
        Ok(Self::with_pwd(pwd, flags))
    }

    pub fn with_pwd(pwd: impl Into<PathBuf>, flags: Flags) -> Self {
        Self {
            pwd: pwd.into(),
            flags,
            commands: Cache::new(COMMAND_CACHE_TTL),
        }
    }

    fn execute(&self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        let output = Command::new(command)
            .args(args)
            .current_dir(&self.pwd)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => CommandError::NotFound(command.to_string()),
                _ => CommandError::Io {
                    command: command.to_string(),
                    reason: err.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                code: output.status.code().unwrap_or(-1),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !stdout.is_empty() {
            return Ok(stdout);
        }
        // Some tools print their version on stderr.
        Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}

fn compile(pattern: &str) -> Option<GlobMatcher> {
    match Glob::new(pattern) {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            debug!(target: "runtime", pattern, %err, "invalid file pattern");
            None
        }
    }
}

fn dir_has_match(dir: &Path, matcher: &GlobMatcher) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_type().is_file() && matcher.is_match(entry.file_name()))
}

impl Environment for SystemEnvironment {
    fn pwd(&self) -> &Path {
        &self.pwd
    }

    fn home(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn getenv(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }

    fn environ(&self) -> HashMap<String, String> {
        env::vars().collect()
    }

    fn user(&self) -> String {
        self.getenv("USER")
            .or_else(|| self.getenv("USERNAME"))
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn host(&self) -> String {
        self.getenv("HOSTNAME")
            .or_else(|| self.getenv("COMPUTERNAME"))
            .or_else(|| {
                fs::read_to_string("/etc/hostname")
                    .ok()
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_else(|| "localhost".to_string())
    }

    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn has_files(&self, pattern: &str) -> bool {
        compile(pattern).is_some_and(|matcher| dir_has_match(&self.pwd, &matcher))
    }

    fn has_file_in_parent_dirs(&self, pattern: &str, depth: u32) -> bool {
        let Some(matcher) = compile(pattern) else {
            return false;
        };
        self.pwd
            .ancestors()
            .skip(1)
            .take(depth as usize)
            .any(|dir| dir_has_match(dir, &matcher))
    }

    fn has_command(&self, command: &str) -> bool {
        let Some(paths) = env::var_os("PATH") else {
            return false;
        };
        env::split_paths(&paths).any(|dir| {
            dir.join(command).is_file()
                || (cfg!(windows) && dir.join(format!("{command}.exe")).is_file())
        })
    }

    fn run_command(&self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        let key = format!("{} {}", command, args.join(" "));
        self.commands.get_or_insert_with(key, || {
            debug!(target: "runtime", command, ?args, "running command");
            self.execute(command, args)
        })
    }
}
