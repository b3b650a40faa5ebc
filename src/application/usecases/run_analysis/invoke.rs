//! CLI 설정 기록, 분석 실행, 산출물 존재 확인 단계.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::application::ports::ProcessSpec;
use crate::domain::analysis::{AnalysisArtifacts, AnalysisRequest, ToolConfig};
use crate::domain::secret::redact;

use super::RunAnalysisUseCase;

const TOOL_CONFIG_FILENAME: &str = "smartregress.config.json";
/// 토큰 전달용 환경변수. 현재 CLI는 읽지 않는 확장 지점이다.
const CLI_TOKEN_ENV: &str = "SMARTREGRESS_GITHUB_TOKEN";

/// `{apiKey, model}` 설정을 체크아웃 안에 기록한다(기존 파일은 덮어쓴다).
pub(super) fn write_tool_config(
    use_case: &RunAnalysisUseCase<'_>,
    checkout_dir: &Path,
) -> Result<PathBuf> {
    let config = use_case.config;
    let tool_config = ToolConfig {
        api_key: config.openai_api_key.clone(),
        model: config.model.clone(),
    };

    let path = checkout_dir.join(TOOL_CONFIG_FILENAME);
    let rendered = serde_json::to_string_pretty(&tool_config)?;
    fs::write(&path, rendered)
        .with_context(|| format!("failed to write CLI config at {}", path.display()))?;

    use_case.reporter.status(
        "config",
        &format!(
            "wrote {} (apiKey={}, model={})",
            path.display(),
            redact(&config.openai_api_key),
            config.model
        ),
    );
    Ok(path)
}

/// 분석 entry point를 체크아웃을 작업 디렉터리로 실행하고 산출물을 확인한다.
/// stdio는 그대로 상속되어 진행 로그가 실시간으로 흘러나온다.
pub(super) async fn run_analysis_cli(
    use_case: &RunAnalysisUseCase<'_>,
    checkout_dir: &Path,
    request: &AnalysisRequest,
) -> Result<AnalysisArtifacts> {
    let mut env = Vec::new();
    if let Some(token) = &use_case.config.github_token {
        env.push((CLI_TOKEN_ENV.to_string(), token.clone()));
    }

    let spec = ProcessSpec {
        program: "node".to_string(),
        args: vec![
            "src/cli/index.js".to_string(),
            "analyze".to_string(),
            "--repo".to_string(),
            request.repo.clone(),
            "--pr".to_string(),
            request.pr_number.clone(),
            "--out".to_string(),
            request.output_dir.display().to_string(),
        ],
        cwd: Some(checkout_dir.to_path_buf()),
        env,
    };

    use_case.reporter.section("Analyze");
    use_case.reporter.status(
        "cli",
        &format!("analyze --repo {} --pr {}", request.repo, request.pr_number),
    );

    use_case
        .process_runner
        .run(&spec)
        .await
        .context("analysis CLI run failed")?;

    validate_artifacts(&request.output_dir)
}

/// 두 산출물의 존재만 확인한다. 내용 검증은 하지 않는다.
fn validate_artifacts(output_dir: &Path) -> Result<AnalysisArtifacts> {
    let summary_path = output_dir.join("summary.md");
    let results_path = output_dir.join("results.json");

    if !summary_path.exists() {
        bail!("summary.md not found at {}", summary_path.display());
    }
    if !results_path.exists() {
        bail!("results.json not found at {}", results_path.display());
    }

    Ok(AnalysisArtifacts {
        summary_path,
        results_path,
    })
}
