use crate::config::Properties;
use crate::segments::Segment;
use chrono::Local;
use serde_json::{json, Value};
use std::fmt::Write;

pub const TIME_FORMAT: &str = "time_format";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

pub struct TimeSegment {
    format: String,
    pub time: String,
}

impl TimeSegment {
    pub fn new(props: &Properties) -> Self {
        Self {
            format: props.get_string(TIME_FORMAT, DEFAULT_TIME_FORMAT),
            time: String::new(),
        }
    }
}

impl Segment for TimeSegment {
    fn enabled(&mut self) -> bool {
        let mut time = String::new();
        // chrono reports a bad format string as a fmt::Error while writing.
        if write!(time, "{}", Local::now().format(&self.format)).is_err() {
            time = Local::now().format(DEFAULT_TIME_FORMAT).to_string();
        }
        self.time = time;
        true
    }

    fn template(&self) -> &'static str {
        " {{ time }} "
    }

    fn context(&self) -> Value {
        json!({ "time": self.time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_falls_back() {
        let mut props = Properties::default();
        props.set(TIME_FORMAT, "%Q%");
        let mut segment = TimeSegment::new(&props);

        assert!(segment.enabled());
        assert_eq!(segment.time.len(), "00:00:00".len());
    }

    #[test]
    fn test_custom_format() {
        let mut props = Properties::default();
        props.set(TIME_FORMAT, "%Y");
        let mut segment = TimeSegment::new(&props);

        assert!(segment.enabled());
        assert_eq!(segment.time, Local::now().format("%Y").to_string());
    }
}
