//! 애플리케이션 계층: 설정 스키마, 포트, 유스케이스.

pub mod config;
pub mod ports;
pub mod usecases;
