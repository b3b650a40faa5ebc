//! 애플리케이션이 사용하는 실행 설정(순수 데이터).
//!
//! 주의: 환경변수 접근은 `infrastructure::config`에서만 수행한다.
//! 이 구조체는 프로세스 시작 시 한 번 해석되어 각 컴포넌트에 전달된다.

use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "./out";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_CLI_REPO: &str = "adlerqa/smartregress-cli";
pub const DEFAULT_CLI_REF: &str = "main";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// 한 번의 실행에 필요한 모든 설정.
/// 필수값(repo/pr_number/openai_api_key)은 생성 시점에 이미 검증된 상태다.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// `owner/name` 저장소 식별자.
    pub repo: String,
    /// 대상 PR 번호(숫자 형식 문자열).
    pub pr_number: String,
    /// 산출물 디렉터리(워크스페이스 기준 상대 경로 허용).
    pub output_dir: PathBuf,
    /// 분석 제공자 자격증명.
    pub openai_api_key: String,
    /// 분석에 사용할 모델 식별자.
    pub model: String,
    /// 호스팅 플랫폼 토큰(선택).
    pub github_token: Option<String>,
    /// 성공 시 PR 코멘트 게시 여부.
    pub comment_on_pr: bool,
    /// 외부 CLI 저장소(`owner/name`).
    pub cli_repo: String,
    /// 외부 CLI에서 체크아웃할 ref.
    pub cli_ref: String,
    /// CI 워크스페이스 루트.
    pub workspace: PathBuf,
    /// 임시 체크아웃 기반 디렉터리.
    pub temp_base: PathBuf,
    /// CI 출력 채널 파일 경로(없으면 출력 기록을 건너뛴다).
    pub output_channel: Option<PathBuf>,
    /// REST API base URL.
    pub api_base: String,
}
