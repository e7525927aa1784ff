use crate::runtime::Environment;
use crate::segments::Segment;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionInfo {
    pub user: String,
    pub host: String,
    /// Connected over SSH.
    pub ssh: bool,
}

pub struct SessionSegment {
    env: Arc<dyn Environment>,
    pub info: SessionInfo,
}

impl SessionSegment {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self {
            env,
            info: SessionInfo::default(),
        }
    }
}

impl Segment for SessionSegment {
    fn enabled(&mut self) -> bool {
        self.info = SessionInfo {
            user: self.env.user(),
            host: self.env.host(),
            ssh: self.env.getenv("SSH_CONNECTION").is_some()
                || self.env.getenv("SSH_CLIENT").is_some(),
        };
        true
    }

    fn template(&self) -> &'static str {
        " {{ user }}@{{ host }} "
    }

    fn context(&self) -> Value {
        serde_json::to_value(&self.info).unwrap_or(Value::Null)
    }
}
