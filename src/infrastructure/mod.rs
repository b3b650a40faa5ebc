//! 인프라 계층: 환경변수 해석, 프로세스/HTTP/파일 어댑터.

pub mod adapters;
pub mod config;
pub mod vcs;
