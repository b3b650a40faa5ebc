//! GitHub 이슈 코멘트 API 연동 구현.
//! PR 코멘트는 Issue comments API를 사용한다.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::application::ports::CommentGateway;

const USER_AGENT: &str = "smartregress-actions";

pub struct GitHubCommentClient {
    client: Client,
    api_base: String,
}

impl GitHubCommentClient {
    pub fn new(api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
        }
    }

    fn issue_comments_endpoint(&self, repo: &str, pr_number: &str) -> String {
        format!("{}/repos/{}/issues/{}/comments", self.api_base, repo, pr_number)
    }
}

#[async_trait]
impl CommentGateway for GitHubCommentClient {
    async fn post_pr_comment(
        &self,
        repo: &str,
        pr_number: &str,
        token: &str,
        body: &str,
    ) -> Result<()> {
        let resp = self
            .client
            .post(self.issue_comments_endpoint(repo, pr_number))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(token)
            .json(&json!({ "body": body }))
            .send()
            .await
            .context("github: failed to send PR comment request")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp
                .text()
                .await
                .context("github: failed to read error response body")?;
            anyhow::bail!(
                "github: failed to comment on PR ({} {}): {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
                text
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_issue_comments() {
        let client = GitHubCommentClient::new("https://api.github.com".into());
        assert_eq!(
            client.issue_comments_endpoint("o/r", "42"),
            "https://api.github.com/repos/o/r/issues/42/comments"
        );
    }
}
