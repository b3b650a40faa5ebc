//! 호스팅 플랫폼 REST 연동.

mod github;

pub use github::GitHubCommentClient;
