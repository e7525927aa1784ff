pub mod git;
pub mod language;
pub mod node;
pub mod path;
pub mod session;
pub mod status;
pub mod text;
pub mod time;
pub mod ui5tooling;

pub use git::*;
pub use language::*;
pub use node::*;
pub use path::*;
pub use session::*;
pub use status::*;
pub use text::*;
pub use time::*;
pub use ui5tooling::*;

use crate::config::Properties;
use crate::runtime::Environment;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Capability every prompt segment provides to the engine.
pub trait Segment {
    /// Whether the segment has something to show. May probe the environment
    /// and cache what it finds for `context`.
    fn enabled(&mut self) -> bool;

    /// Template used when the configuration does not set one.
    fn template(&self) -> &'static str;

    /// Values exposed to the template.
    fn context(&self) -> Value;
}

/// Type tag selecting a segment implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Text,
    Path,
    Session,
    Time,
    Status,
    Git,
    Ui5Tooling,
    Node,
}

impl SegmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::Text => "text",
            SegmentType::Path => "path",
            SegmentType::Session => "session",
            SegmentType::Time => "time",
            SegmentType::Status => "status",
            SegmentType::Git => "git",
            SegmentType::Ui5Tooling => "ui5tooling",
            SegmentType::Node => "node",
        }
    }

    pub fn build(&self, props: &Properties, env: Arc<dyn Environment>) -> Box<dyn Segment> {
        match self {
            SegmentType::Text => Box::new(TextSegment::new()),
            SegmentType::Path => Box::new(PathSegment::new(props, env)),
            SegmentType::Session => Box::new(SessionSegment::new(env)),
            SegmentType::Time => Box::new(TimeSegment::new(props)),
            SegmentType::Status => Box::new(StatusSegment::new(props, env)),
            SegmentType::Git => Box::new(GitSegment::new(props, env)),
            SegmentType::Ui5Tooling => Box::new(Language::new(&UI5TOOLING, props, env)),
            SegmentType::Node => Box::new(Language::new(&NODE, props, env)),
        }
    }
}
