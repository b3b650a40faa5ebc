//! 외부 프로세스 실행 포트 구현.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ProcessRunner, ProcessSpec};

/// stdio를 그대로 상속해 실행하는 러너.
/// 출력 캡처/버퍼링 없이 자식 프로세스 로그가 실시간으로 흐른다.
pub struct InheritStdioRunner;

#[async_trait]
impl ProcessRunner for InheritStdioRunner {
    async fn run(&self, spec: &ProcessSpec) -> Result<()> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        let status = cmd
            .status()
            .await
            .with_context(|| format!("failed to spawn '{}'", spec.program))?;

        if !status.success() {
            bail!("'{}' exited with {}", spec.program, status);
        }
        Ok(())
    }
}
