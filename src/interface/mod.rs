//! 인터페이스 계층: CLI 파싱과 의존성 조립.

pub mod cli;
pub mod composition;
