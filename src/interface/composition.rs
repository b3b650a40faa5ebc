//! 애플리케이션 조립(composition root) 모듈.
//! 실행 설정은 여기서 한 번 해석되어 어댑터와 유스케이스에 전달된다.

use anyhow::Result;

use crate::application::config::RunConfig;
use crate::application::usecases::run_analysis::RunAnalysisUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, GithubOutputFile, InheritStdioRunner};
use crate::infrastructure::config::load_run_config;
use crate::infrastructure::vcs::GitHubCommentClient;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config: RunConfig,
    process_runner: InheritStdioRunner,
    comment_gateway: GitHubCommentClient,
    output_channel: GithubOutputFile,
    reporter: ConsoleReporter,
}

impl AppComposition {
    /// 환경에서 설정을 해석하고 어댑터를 구성한다.
    /// 필수 입력이 비어 있으면 어떤 부수효과도 없이 여기서 실패한다.
    pub fn from_env() -> Result<Self> {
        let config = load_run_config()?;
        let comment_gateway = GitHubCommentClient::new(config.api_base.clone());
        let output_channel = GithubOutputFile::new(config.output_channel.clone());

        Ok(Self {
            config,
            process_runner: InheritStdioRunner,
            comment_gateway,
            output_channel,
            reporter: ConsoleReporter,
        })
    }

    /// 분석 실행 유스케이스를 생성한다.
    pub fn run_analysis_usecase(&self) -> RunAnalysisUseCase<'_> {
        RunAnalysisUseCase {
            config: &self.config,
            process_runner: &self.process_runner,
            comment_gateway: &self.comment_gateway,
            output_channel: &self.output_channel,
            reporter: &self.reporter,
        }
    }
}
