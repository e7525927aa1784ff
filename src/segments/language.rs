//! Shared behaviour of the version-detecting segments.
//!
//! A language segment decides whether it belongs in the prompt from the files
//! around the working directory, then asks the tool itself for its version.

use crate::config::Properties;
use crate::runtime::{CommandError, Environment};
use crate::segments::Segment;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const DISPLAY_MODE: &str = "display_mode";
pub const DISPLAY_MODE_ALWAYS: &str = "always";
pub const DISPLAY_MODE_FILES: &str = "files";
pub const DISPLAY_MODE_CONTEXT: &str = "context";

/// How many directories above `pwd` the context mode looks at.
pub const PARENT_DIR_DEPTH: u32 = 4;

pub const LANGUAGE_TEMPLATE: &str = " {% if error %}{{ error }}{% else %}{{ full }}{% endif %} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Always shown.
    Always,
    /// Shown when a matching file is in the working directory.
    Files,
    /// Like `Files`, but parent directories count too.
    Context,
}

impl DisplayMode {
    fn from_property(value: &str) -> Self {
        match value {
            DISPLAY_MODE_ALWAYS => DisplayMode::Always,
            DISPLAY_MODE_FILES => DisplayMode::Files,
            _ => DisplayMode::Context,
        }
    }
}

/// Static description of one tool.
#[derive(Debug)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub command: &'static str,
    pub version_param: &'static str,
    /// Must define `version`, `major`, `minor` and `patch` groups;
    /// `prerelease` is optional.
    pub version_regex: &'static str,
    pub file_patterns: &'static [&'static str],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub full: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: Option<String>,
    pub error: Option<String>,
}

pub struct Language {
    spec: &'static LanguageSpec,
    display_mode: DisplayMode,
    env: Arc<dyn Environment>,
    pub info: VersionInfo,
}

impl Language {
    pub fn new(spec: &'static LanguageSpec, props: &Properties, env: Arc<dyn Environment>) -> Self {
        let display_mode =
            DisplayMode::from_property(&props.get_string(DISPLAY_MODE, DISPLAY_MODE_CONTEXT));
        Self {
            spec,
            display_mode,
            env,
            info: VersionInfo::default(),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    fn in_context(&self) -> bool {
        let in_pwd = || self.spec.file_patterns.iter().any(|p| self.env.has_files(p));
        let in_parents = || {
            self.spec
                .file_patterns
                .iter()
                .any(|p| self.env.has_file_in_parent_dirs(p, PARENT_DIR_DEPTH))
        };

        match self.display_mode {
            DisplayMode::Always => true,
            DisplayMode::Files => in_pwd(),
            DisplayMode::Context => in_pwd() || in_parents(),
        }
    }

    fn load_version(&mut self) {
        if !self.env.has_command(self.spec.command) {
            self.info.error = Some(CommandError::NotFound(self.spec.command.to_string()).to_string());
            return;
        }

        let output = match self
            .env
            .run_command(self.spec.command, &[self.spec.version_param])
        {
            Ok(output) => output,
            Err(err) => {
                debug!(target: "segments", language = self.spec.name, %err, "version command failed");
                self.info.error = Some(err.to_string());
                return;
            }
        };

        match parse_version(self.spec.version_regex, &output) {
            Some(info) => self.info = info,
            None => {
                debug!(target: "segments", language = self.spec.name, output = %output, "unparsable version output");
                self.info.error = Some("unable to parse version".to_string());
            }
        }
    }
}

/// Extract the version groups from a tool's `--version` output.
pub fn parse_version(pattern: &str, output: &str) -> Option<VersionInfo> {
    let regex = Regex::new(pattern).ok()?;
    let captures = regex.captures(output)?;
    let group = |name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    let full = match captures.name("version") {
        Some(version) => version.as_str().to_string(),
        None => captures.get(0)?.as_str().to_string(),
    };

    Some(VersionInfo {
        full,
        major: group("major"),
        minor: group("minor"),
        patch: group("patch"),
        prerelease: captures.name("prerelease").map(|m| m.as_str().to_string()),
        error: None,
    })
}

impl Segment for Language {
    fn enabled(&mut self) -> bool {
        if !self.in_context() {
            return false;
        }
        self.load_version();
        true
    }

    fn template(&self) -> &'static str {
        LANGUAGE_TEMPLATE
    }

    fn context(&self) -> Value {
        serde_json::to_value(&self.info).unwrap_or(Value::Null)
    }
}
