//! 분석 도구 경계의 타입 계약.
//!
//! 실제 전달 메커니즘은 파일 기반이지만, 경계 자체는 요청/결과 구조체로 고정한다.

use std::path::PathBuf;

use serde::Serialize;

/// 외부 분석 CLI에 요구하는 작업 단위.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// `owner/name` 저장소 식별자.
    pub repo: String,
    /// 숫자 형식 PR 번호(문자열 그대로 전달).
    pub pr_number: String,
    /// 산출물을 기록할 절대 경로.
    pub output_dir: PathBuf,
}

/// 분석 성공 시 존재가 보장되는 두 산출물.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisArtifacts {
    pub summary_path: PathBuf,
    pub results_path: PathBuf,
}

/// 체크아웃 안에 기록하는 CLI 설정 파일 스키마.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub api_key: String,
    pub model: String,
}
