//! 산출물/임시 디렉터리 준비 단계.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::application::config::RunConfig;

pub(super) struct WorkspacePaths {
    /// 산출물 절대 경로.
    pub out_dir: PathBuf,
    /// 외부 CLI를 체크아웃할 새 디렉터리(clone이 생성한다).
    pub checkout_dir: PathBuf,
}

/// 산출물 디렉터리와 임시 기반 디렉터리를 멱등하게 생성하고,
/// 타임스탬프로 구분되는 체크아웃 경로를 예약한다.
pub(super) fn prepare_workspace(config: &RunConfig) -> Result<WorkspacePaths> {
    let out_dir = resolve_out_dir(&config.workspace, &config.output_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    fs::create_dir_all(&config.temp_base).with_context(|| {
        format!(
            "failed to create temp directory {}",
            config.temp_base.display()
        )
    })?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let checkout_dir = config.temp_base.join(format!("smartregress-cli-{millis}"));

    Ok(WorkspacePaths {
        out_dir,
        checkout_dir,
    })
}

fn resolve_out_dir(workspace: &Path, output_dir: &Path) -> PathBuf {
    if output_dir.is_absolute() {
        return output_dir.to_path_buf();
    }
    // "./out" 같은 선행 "."은 조인 전에 제거한다.
    let rel = output_dir.strip_prefix(".").unwrap_or(output_dir);
    workspace.join(rel)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::config::RunConfig;

    fn config_with(workspace: PathBuf, temp_base: PathBuf, output_dir: &str) -> RunConfig {
        RunConfig {
            repo: "o/r".into(),
            pr_number: "1".into(),
            output_dir: PathBuf::from(output_dir),
            openai_api_key: "sk-test".into(),
            model: "gpt-4o-mini".into(),
            github_token: None,
            comment_on_pr: false,
            cli_repo: "adlerqa/smartregress-cli".into(),
            cli_ref: "main".into(),
            workspace,
            temp_base,
            output_channel: None,
            api_base: "https://api.github.com".into(),
        }
    }

    #[test]
    fn relative_output_dir_resolves_under_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(
            dir.path().to_path_buf(),
            dir.path().join("tmp"),
            "./out",
        );

        let paths = prepare_workspace(&config).unwrap();

        assert_eq!(paths.out_dir, dir.path().join("out"));
        assert!(paths.out_dir.is_dir());
        assert!(config.temp_base.is_dir());
    }

    #[test]
    fn absolute_output_dir_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let abs_out = dir.path().join("elsewhere");
        let config = config_with(
            dir.path().join("ws"),
            dir.path().join("tmp"),
            abs_out.to_str().unwrap(),
        );

        let paths = prepare_workspace(&config).unwrap();

        assert_eq!(paths.out_dir, abs_out);
        assert!(abs_out.is_dir());
    }

    #[test]
    fn checkout_dir_is_reserved_under_temp_base() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(dir.path().to_path_buf(), dir.path().join("tmp"), "out");

        let paths = prepare_workspace(&config).unwrap();

        assert!(paths.checkout_dir.starts_with(&config.temp_base));
        let name = paths.checkout_dir.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("smartregress-cli-"));
        // clone이 만들 디렉터리이므로 아직 존재하지 않아야 한다.
        assert!(!paths.checkout_dir.exists());
    }
}
