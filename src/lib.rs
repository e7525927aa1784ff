pub mod config;
pub mod engine;
pub mod runtime;
pub mod segments;
pub mod template;
pub mod utils;

pub use config::{Alignment, Block, Config, Properties, SegmentConfig};
pub use engine::{can_render, visual_length, Engine, ExecutionLedger, Styler};
pub use runtime::{CommandError, Environment, Flags, SystemEnvironment};
pub use segments::{Segment, SegmentType};
pub use template::{TemplateError, TemplateRenderer};
