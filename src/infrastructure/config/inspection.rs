//! 해석된 입력 진단(inspection) 뷰 모델.
//! 필수 입력이 비어 있어도 실패하지 않고 `missing` 목록으로 보고한다.

use std::env;

use anyhow::Result;
use serde::Serialize;

use crate::application::config::DEFAULT_API_BASE;
use crate::domain::secret::redact;

use super::{RawInputs, gather_inputs_from};

const UNSET: &str = "(unset)";

#[derive(Debug, Clone, Serialize)]
pub struct InputInspection {
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
    pub api_base: String,
    pub missing: Vec<&'static str>,
}

impl InputInspection {
    pub(crate) fn from_raw(raw: &RawInputs) -> Self {
        Self {
            repo: placeholder_if_empty(&raw.repo),
            pr_number: placeholder_if_empty(&raw.pr_number),
            output_dir: raw.output_dir.clone(),
            openai_api_key: redact_or_unset(&raw.openai_api_key),
            model: raw.model.clone(),
            github_token: redact_or_unset(&raw.github_token),
            comment_on_pr: raw.comment_on_pr,
            cli_repo: raw.cli_repo.clone(),
            cli_ref: raw.cli_ref.clone(),
            workspace: raw.workspace.clone(),
            temp_base: raw.temp_base.clone(),
            output_channel: raw.output_channel.clone(),
            api_base: raw
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            missing: raw.missing_required(),
        }
    }
}

/// 현재 환경의 입력 점검 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json() -> Result<String> {
    let raw = gather_inputs_from(|key| env::var(key).ok());
    let inspection = InputInspection::from_raw(&raw);
    Ok(serde_json::to_string_pretty(&inspection)?)
}

fn placeholder_if_empty(value: &str) -> String {
    if value.is_empty() {
        UNSET.to_string()
    } else {
        value.to_string()
    }
}

fn redact_or_unset(secret: &str) -> String {
    if secret.is_empty() {
        UNSET.to_string()
    } else {
        redact(secret)
    }
}
