//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

/// 외부 프로세스 한 번의 실행 사양.
#[derive(Debug, Clone)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
    /// 작업 디렉터리(없으면 현재 디렉터리 상속).
    pub cwd: Option<PathBuf>,
    /// 부모 환경에 추가로 주입할 변수들.
    pub env: Vec<(String, String)>,
}

/// 외부 프로세스 실행 포트. 0이 아닌 종료 코드는 오류로 반환한다.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, spec: &ProcessSpec) -> Result<()>;
}

/// PR 코멘트 게시 포트.
#[async_trait]
pub trait CommentGateway: Send + Sync {
    async fn post_pr_comment(
        &self,
        repo: &str,
        pr_number: &str,
        token: &str,
        body: &str,
    ) -> Result<()>;
}

/// CI 출력 채널 포트. 채널이 없으면 조용히 건너뛴다.
pub trait OutputChannel: Send + Sync {
    fn write(&self, name: &str, value: &str) -> Result<()>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn warn(&self, scope: &str, message: &str);
}
