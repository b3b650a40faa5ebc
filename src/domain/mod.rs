//! 도메인 엔티티/값 객체 계층.

pub mod analysis;
pub mod secret;
