use crate::config::Properties;
use crate::runtime::Environment;
use crate::segments::Segment;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub const STYLE: &str = "style";
pub const STYLE_FULL: &str = "full";
pub const STYLE_FOLDER: &str = "folder";

#[derive(Debug, Clone, Default, Serialize)]
pub struct PathInfo {
    /// Rendered according to `style`, home abbreviated to `~`.
    pub path: String,
    pub folder: String,
}

pub struct PathSegment {
    style: String,
    env: Arc<dyn Environment>,
    pub info: PathInfo,
}

impl PathSegment {
    pub fn new(props: &Properties, env: Arc<dyn Environment>) -> Self {
        Self {
            style: props.get_string(STYLE, STYLE_FULL),
            env,
            info: PathInfo::default(),
        }
    }
}

/// Replace a leading home directory with `~`.
pub fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(rest) = home.and_then(|home| path.strip_prefix(home).ok()) {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(rest).display().to_string();
    }
    path.display().to_string()
}

impl Segment for PathSegment {
    fn enabled(&mut self) -> bool {
        let pwd = self.env.pwd();
        if pwd.as_os_str().is_empty() {
            return false;
        }

        let home = self.env.home();
        let full = abbreviate_home(pwd, home.as_deref());
        let folder = if home.as_deref() == Some(pwd) {
            "~".to_string()
        } else {
            pwd.file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| full.clone())
        };

        self.info.path = if self.style == STYLE_FOLDER {
            folder.clone()
        } else {
            full
        };
        self.info.folder = folder;
        true
    }

    fn template(&self) -> &'static str {
        " {{ path }} "
    }

    fn context(&self) -> Value {
        serde_json::to_value(&self.info).unwrap_or(Value::Null)
    }
}
