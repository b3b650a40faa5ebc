//! smartregress-action library root.
//! Clean Architecture 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run() -> Result<()> {
    let composition = AppComposition::from_env()?;
    composition.run_analysis_usecase().execute().await
}

/// 해석된 입력 점검 JSON 출력용 함수(비밀값은 마스킹).
pub fn inspect_inputs_pretty_json() -> Result<String> {
    infrastructure::config::inspect_pretty_json()
}
