//! PR 분석 실행의 전체 오케스트레이션 유스케이스.

mod fetch;
mod invoke;
mod publish;
mod workspace;

use anyhow::Result;

use crate::application::config::RunConfig;
use crate::application::ports::{CommentGateway, OutputChannel, ProcessRunner, Reporter};
use crate::domain::analysis::AnalysisRequest;

use fetch::fetch_cli;
use invoke::{run_analysis_cli, write_tool_config};
use publish::{post_summary_comment, publish_outputs};
use workspace::prepare_workspace;

/// 입력 해석 이후의 전체 흐름을 조율한다: 체크아웃, 분석 실행, 산출물 게시.
pub struct RunAnalysisUseCase<'a> {
    pub config: &'a RunConfig,
    pub process_runner: &'a dyn ProcessRunner,
    pub comment_gateway: &'a dyn CommentGateway,
    pub output_channel: &'a dyn OutputChannel,
    pub reporter: &'a dyn Reporter,
}

impl<'a> RunAnalysisUseCase<'a> {
    /// 분석 본 실행 진입점.
    /// 어느 단계든 실패하면 이후 단계는 전부 건너뛴다.
    pub async fn execute(&self) -> Result<()> {
        self.reporter.section("Session");
        self.reporter.kv("Repo", &self.config.repo);
        self.reporter.kv("PR", &self.config.pr_number);
        self.reporter.kv("Model", &self.config.model);
        self.reporter.kv(
            "Comment",
            if self.config.comment_on_pr {
                "enabled"
            } else {
                "disabled"
            },
        );

        let paths = prepare_workspace(self.config)?;

        fetch_cli(self, &paths.checkout_dir).await?;
        write_tool_config(self, &paths.checkout_dir)?;

        let request = AnalysisRequest {
            repo: self.config.repo.clone(),
            pr_number: self.config.pr_number.clone(),
            output_dir: paths.out_dir.clone(),
        };
        let artifacts = run_analysis_cli(self, &paths.checkout_dir, &request).await?;

        publish_outputs(self, &artifacts)?;
        post_summary_comment(self, &artifacts).await?;

        self.reporter.section("Done");
        self.reporter
            .status("run", "analysis finished successfully");
        Ok(())
    }
}
