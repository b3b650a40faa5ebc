//! 산출물 경로 출력 및 PR 코멘트 게시 단계.

use std::fs;

use anyhow::{Context, Result};

use crate::domain::analysis::AnalysisArtifacts;

use super::RunAnalysisUseCase;

/// 코멘트에 포함할 요약 최대 길이(문자 수).
const MAX_SUMMARY_CHARS: usize = 60_000;

/// 두 산출물의 절대 경로를 CI 출력 채널에 기록한다.
pub(super) fn publish_outputs(
    use_case: &RunAnalysisUseCase<'_>,
    artifacts: &AnalysisArtifacts,
) -> Result<()> {
    use_case
        .output_channel
        .write("summary_path", &artifacts.summary_path.display().to_string())?;
    use_case
        .output_channel
        .write("results_path", &artifacts.results_path.display().to_string())?;

    use_case.reporter.section("Outputs");
    use_case
        .reporter
        .kv("summary_path", &artifacts.summary_path.display().to_string());
    use_case
        .reporter
        .kv("results_path", &artifacts.results_path.display().to_string());
    Ok(())
}

/// 요약을 PR 코멘트로 게시한다.
/// 토큰이 없으면 경고만 남기고 건너뛴다(오류 아님).
pub(super) async fn post_summary_comment(
    use_case: &RunAnalysisUseCase<'_>,
    artifacts: &AnalysisArtifacts,
) -> Result<()> {
    let config = use_case.config;
    if !config.comment_on_pr {
        return Ok(());
    }

    let Some(token) = &config.github_token else {
        use_case.reporter.warn(
            "github",
            "comment_on_pr=true but github_token not provided; skipping PR comment",
        );
        return Ok(());
    };

    let summary = fs::read_to_string(&artifacts.summary_path).with_context(|| {
        format!(
            "failed to read summary at {}",
            artifacts.summary_path.display()
        )
    })?;
    let body = render_comment_body(&config.repo, &config.pr_number, &summary);

    use_case
        .comment_gateway
        .post_pr_comment(&config.repo, &config.pr_number, token, &body)
        .await?;

    use_case
        .reporter
        .status("github", "posted analysis summary as PR comment");
    Ok(())
}

/// 고정 헤더 + 60,000자로 잘라낸 요약 본문.
fn render_comment_body(repo: &str, pr_number: &str, summary: &str) -> String {
    format!(
        "## 🤖 SmartRegress Report\n\n**Repo:** `{repo}`\n**PR:** #{pr_number}\n\n{}",
        truncate_chars(summary, MAX_SUMMARY_CHARS)
    )
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
