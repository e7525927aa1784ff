use crate::config::SegmentConfig;
use std::collections::HashMap;

/// Names of the segments that produced output during one prompt render.
///
/// Created fresh for every prompt and shared by all of its blocks. Entries
/// are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionLedger {
    executed: HashMap<String, bool>,
}

impl ExecutionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_executed(&mut self, name: &str) {
        self.executed.insert(name.to_string(), true);
    }

    /// Unknown names count as not executed.
    pub fn has_executed(&self, name: &str) -> bool {
        self.executed.get(name).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.executed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for ExecutionLedger {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            executed: iter.into_iter().map(|(name, done)| (name.into(), done)).collect(),
        }
    }
}

/// Whether every segment named in `segment.needs` has already executed.
pub fn can_render(segment: &SegmentConfig, executed: &ExecutionLedger) -> bool {
    segment.needs.iter().all(|name| executed.has_executed(name))
}
