//! 포트 구현 어댑터 모음.

mod output_channel;
mod process_runner;
mod reporter;

pub use output_channel::GithubOutputFile;
pub use process_runner::InheritStdioRunner;
pub use reporter::ConsoleReporter;
