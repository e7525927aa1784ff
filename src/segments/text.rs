use crate::segments::Segment;
use serde_json::{json, Value};

/// Static text; everything it shows comes from its template.
#[derive(Debug, Default)]
pub struct TextSegment;

impl TextSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for TextSegment {
    fn enabled(&mut self) -> bool {
        true
    }

    fn template(&self) -> &'static str {
        ""
    }

    fn context(&self) -> Value {
        json!({})
    }
}
