//! CI 출력 채널 파일 어댑터.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::OutputChannel;

/// `GITHUB_OUTPUT` 파일에 `key=value` 한 줄씩 추가한다.
/// 채널 경로가 없으면 조용히 건너뛴다(오류 아님).
pub struct GithubOutputFile {
    path: Option<PathBuf>,
}

impl GithubOutputFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl OutputChannel for GithubOutputFile {
    fn write(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open output channel at {}", path.display()))?;
        writeln!(file, "{name}={value}")
            .with_context(|| format!("failed to append output to {}", path.display()))?;
        Ok(())
    }
}
