use crate::config::Properties;
use crate::runtime::Environment;
use crate::segments::Segment;
use serde_json::{json, Value};
use std::sync::Arc;

pub const ALWAYS_ENABLED: &str = "always_enabled";

/// Exit status of the previous command.
pub struct StatusSegment {
    always_enabled: bool,
    env: Arc<dyn Environment>,
}

impl StatusSegment {
    pub fn new(props: &Properties, env: Arc<dyn Environment>) -> Self {
        Self {
            always_enabled: props.get_bool(ALWAYS_ENABLED, false),
            env,
        }
    }

    fn code(&self) -> i32 {
        self.env.flags().error_code
    }
}

impl Segment for StatusSegment {
    fn enabled(&mut self) -> bool {
        self.always_enabled || self.code() != 0
    }

    fn template(&self) -> &'static str {
        " {{ code }} "
    }

    fn context(&self) -> Value {
        json!({
            "code": self.code(),
            "error": self.code() != 0,
        })
    }
}
