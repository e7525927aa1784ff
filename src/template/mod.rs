//! Template expansion for segment output.
//!
//! Templates use minijinja syntax. Besides the segment's own context every
//! template can read the prompt-wide globals `pwd`, `user`, `host`, `shell`,
//! `code` and `env`.

use crate::runtime::Environment;
use minijinja::{UndefinedBehavior, Value};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to render template `{template}`: {message}")]
pub struct TemplateError {
    pub template: String,
    pub message: String,
}

pub struct TemplateRenderer {
    env: minijinja::Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(runtime: &dyn Environment) -> Self {
        let mut env = minijinja::Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let flags = runtime.flags();
        env.add_global("pwd", runtime.pwd().display().to_string());
        env.add_global("user", runtime.user());
        env.add_global("host", runtime.host());
        env.add_global("shell", flags.shell.clone());
        env.add_global("code", flags.error_code);
        env.add_global("env", Value::from_serialize(runtime.environ()));

        Self { env }
    }

    /// Expand `template` against `context`. Unknown variables are errors.
    pub fn render<S: Serialize>(&self, template: &str, context: S) -> Result<String, TemplateError> {
        self.env
            .render_str(template, context)
            .map_err(|err| TemplateError {
                template: template.to_string(),
                message: err.to_string(),
            })
    }
}
