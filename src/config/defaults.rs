use crate::config::*;
use crate::segments::SegmentType;
use std::collections::HashMap;

impl Default for Config {
    fn default() -> Self {
        Self {
            blocks: vec![Block::default_left(), Block::default_right()],
            palette: default_palette(),
            final_space: true,
        }
    }
}

fn default_palette() -> HashMap<String, String> {
    let mut palette = HashMap::new();
    palette.insert("session".to_string(), "#2d3748".to_string());
    palette.insert("path".to_string(), "#3182ce".to_string());
    palette.insert("git".to_string(), "#38a169".to_string());
    palette.insert("error".to_string(), "#e53e3e".to_string());
    palette.insert("text".to_string(), "#f7fafc".to_string());
    palette
}

fn styled(segment_type: SegmentType, background: &str) -> SegmentConfig {
    let mut segment = SegmentConfig::new(segment_type);
    segment.foreground = Some("p:text".to_string());
    segment.background = Some(background.to_string());
    segment
}

impl Block {
    fn default_left() -> Self {
        let mut path = styled(SegmentType::Path, "p:path");
        path.properties.set("style", "folder");

        // Only drawn once git has rendered.
        let mut git_marker = SegmentConfig::new(SegmentType::Text);
        git_marker.alias = Some("git-marker".to_string());
        git_marker.template = Some(" ± ".to_string());
        git_marker.needs = vec!["git".to_string()];

        Self {
            alignment: Alignment::Left,
            newline: false,
            segments: vec![
                styled(SegmentType::Session, "p:session"),
                path,
                styled(SegmentType::Git, "p:git"),
                git_marker,
                styled(SegmentType::Status, "p:error"),
            ],
        }
    }

    fn default_right() -> Self {
        Self {
            alignment: Alignment::Right,
            newline: false,
            segments: vec![
                SegmentConfig::new(SegmentType::Ui5Tooling),
                SegmentConfig::new(SegmentType::Node),
                SegmentConfig::new(SegmentType::Time),
            ],
        }
    }
}
