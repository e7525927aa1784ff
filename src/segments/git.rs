use crate::config::Properties;
use crate::runtime::Environment;
use crate::segments::Segment;
use gix::Repository;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub const FETCH_SHA: &str = "fetch_sha";
pub const FETCH_STASH_COUNT: &str = "fetch_stash_count";

#[derive(Debug, Clone, Default, Serialize)]
pub struct GitInfo {
    /// Branch name, or the short sha when HEAD is detached.
    pub branch: String,
    pub sha: Option<String>,
    pub detached: bool,
    pub repo_name: Option<String>,
    pub stash_count: Option<usize>,
}

pub struct GitSegment {
    fetch_sha: bool,
    fetch_stash_count: bool,
    env: Arc<dyn Environment>,
    pub info: GitInfo,
}

impl GitSegment {
    pub fn new(props: &Properties, env: Arc<dyn Environment>) -> Self {
        Self {
            fetch_sha: props.get_bool(FETCH_SHA, true),
            fetch_stash_count: props.get_bool(FETCH_STASH_COUNT, false),
            env,
            info: GitInfo::default(),
        }
    }

    /// Read repository state with gix; `None` outside a repository.
    fn load_git_info(&self, path: &Path) -> Option<GitInfo> {
        let repo = match gix::discover(path) {
            Ok(repo) => repo,
            Err(_) => {
                debug!(target: "git", path = %path.display(), "not in a git repository");
                return None;
            }
        };

        let mut info = GitInfo::default();

        match repo.head_name() {
            Ok(Some(name)) => info.branch = name.shorten().to_string(),
            Ok(None) => info.detached = true,
            Err(err) => {
                debug!(target: "git", %err, "unable to read HEAD");
                return None;
            }
        }

        if self.fetch_sha || info.detached {
            info.sha = short_sha(&repo);
        }
        if info.detached {
            info.branch = info.sha.clone().unwrap_or_else(|| "HEAD".to_string());
        }

        info.repo_name = repo
            .work_dir()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
            .map(str::to_string);

        if self.fetch_stash_count {
            info.stash_count = self.stash_count();
        }

        debug!(
            target: "git",
            branch = %info.branch,
            sha = ?info.sha,
            detached = info.detached,
            "git info"
        );

        Some(info)
    }

    /// gix has no stash support, so this goes through the git binary.
    fn stash_count(&self) -> Option<usize> {
        self.env
            .run_command("git", &["stash", "list"])
            .ok()
            .map(|output| output.lines().filter(|line| !line.trim().is_empty()).count())
    }
}

fn short_sha(repo: &Repository) -> Option<String> {
    // Unborn branches have no HEAD commit yet.
    repo.head_id()
        .ok()
        .map(|id| id.to_hex_with_len(7).to_string())
}

impl Segment for GitSegment {
    fn enabled(&mut self) -> bool {
        match self.load_git_info(self.env.pwd()) {
            Some(info) => {
                self.info = info;
                true
            }
            None => false,
        }
    }

    fn template(&self) -> &'static str {
        " {{ branch }} "
    }

    fn context(&self) -> Value {
        serde_json::to_value(&self.info).unwrap_or(Value::Null)
    }
}
