//! 액션 입력(환경변수) 해석기.
//!
//! 환경 접근은 이 모듈에서만 일어난다. 해석 결과는 `RunConfig`로 고정되어
//! 프로세스 시작 시 한 번 만들어진 뒤 각 컴포넌트에 전달된다.

mod inspection;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::application::config::{
    DEFAULT_API_BASE, DEFAULT_CLI_REF, DEFAULT_CLI_REPO, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
    RunConfig,
};

pub use inspection::inspect_pretty_json;

/// 논리 입력 이름을 `INPUT_` 네임스페이스 환경변수 키로 변환한다.
/// 공백은 밑줄로 바꾸고 전체를 대문자로 만든다.
pub fn input_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// 대소문자 무시 truthy 토큰 집합으로 불리언을 해석한다.
/// 빈 값은 기본값, 그 외 토큰은 false.
pub fn to_bool(value: &str, default: bool) -> bool {
    if value.is_empty() {
        return default;
    }
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 해석만 끝났고 아직 검증되지 않은 입력 묶음(점검 출력에도 쓰인다).
#[derive(Debug, Clone)]
pub(crate) struct RawInputs {
    pub repo: String,
    pub pr_number: String,
    pub output_dir: String,
    pub openai_api_key: String,
    pub model: String,
    pub github_token: String,
    pub comment_on_pr: bool,
    pub cli_repo: String,
    pub cli_ref: String,
    pub workspace: Option<String>,
    pub temp_base: Option<String>,
    pub output_channel: Option<String>,
    pub api_base: Option<String>,
}

impl RawInputs {
    /// 비어 있는 필수 입력들의 논리 이름.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.repo.is_empty() {
            missing.push("repo");
        }
        if self.pr_number.is_empty() {
            missing.push("pr_number");
        }
        if self.openai_api_key.is_empty() {
            missing.push("openai_api_key");
        }
        missing
    }

    /// 필수 입력을 검증하고 실행 설정으로 고정한다.
    /// 어떤 부수효과보다 먼저 실패해야 하므로 파일시스템은 건드리지 않는다.
    pub fn into_config(self) -> Result<RunConfig> {
        if self.repo.is_empty() {
            bail!("missing repo (owner/name) input");
        }
        if self.pr_number.is_empty() {
            bail!("missing pr_number input");
        }
        if self.openai_api_key.is_empty() {
            bail!("missing openai_api_key input");
        }

        let workspace = match self.workspace {
            Some(path) => PathBuf::from(path),
            None => env::current_dir().context("failed to resolve current directory")?,
        };
        let temp_base = self
            .temp_base
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace.join(".tmp"));

        let api_base = match self.api_base {
            Some(raw) => {
                let parsed = Url::parse(&raw)
                    .with_context(|| format!("invalid GITHUB_API_URL: {raw}"))?;
                parsed.as_str().trim_end_matches('/').to_string()
            }
            None => DEFAULT_API_BASE.to_string(),
        };

        Ok(RunConfig {
            repo: self.repo,
            pr_number: self.pr_number,
            output_dir: PathBuf::from(self.output_dir),
            openai_api_key: self.openai_api_key,
            model: self.model,
            github_token: (!self.github_token.is_empty()).then_some(self.github_token),
            comment_on_pr: self.comment_on_pr,
            cli_repo: self.cli_repo,
            cli_ref: self.cli_ref,
            workspace,
            temp_base,
            output_channel: self.output_channel.map(PathBuf::from),
            api_base,
        })
    }
}

/// 주입 가능한 lookup으로 입력을 모은다. 기본값은 여기서 적용된다.
pub(crate) fn gather_inputs_from<F>(get: F) -> RawInputs
where
    F: Fn(&str) -> Option<String>,
{
    let input = |name: &str| -> String {
        get(&input_key(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };
    let ambient = |key: &str| -> Option<String> {
        get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let repo = {
        let explicit = input("repo");
        if explicit.is_empty() {
            ambient("GITHUB_REPOSITORY").unwrap_or_default()
        } else {
            explicit
        }
    };

    let or_default = |value: String, default: &str| -> String {
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    };

    RawInputs {
        repo,
        pr_number: input("pr_number"),
        output_dir: or_default(input("output_dir"), DEFAULT_OUTPUT_DIR),
        openai_api_key: input("openai_api_key"),
        model: or_default(input("model"), DEFAULT_MODEL),
        github_token: input("github_token"),
        comment_on_pr: to_bool(&input("comment_on_pr"), true),
        cli_repo: or_default(input("cli_repo"), DEFAULT_CLI_REPO),
        cli_ref: or_default(input("cli_ref"), DEFAULT_CLI_REF),
        workspace: ambient("GITHUB_WORKSPACE"),
        temp_base: ambient("RUNNER_TEMP"),
        output_channel: ambient("GITHUB_OUTPUT"),
        api_base: ambient("GITHUB_API_URL"),
    }
}

/// 프로세스 환경에서 실행 설정을 한 번 해석한다.
pub fn load_run_config() -> Result<RunConfig> {
    gather_inputs_from(|key| env::var(key).ok()).into_config()
}
