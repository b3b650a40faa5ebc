//! CLI 명령 파싱 모듈.
//! 입력은 환경변수로 들어오므로 명령행 표면은 서브커맨드 하나뿐이다.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "smartregress-action")]
#[command(about = "Run SmartRegress analysis for a pull request and publish the results")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show resolved action inputs with secrets redacted
    Inspect,
}

pub enum CliAction {
    Run,
    InspectInputs,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        let cli = Cli::parse();

        match cli.command {
            Some(Commands::Inspect) => CliAction::InspectInputs,
            None => CliAction::Run,
        }
    }
}
