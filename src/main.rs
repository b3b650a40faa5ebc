//! `smartregress-action` 바이너리 진입점.

use smartregress_action::interface::cli::{Cli, CliAction};
use smartregress_action::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    match Cli::parse_action() {
        CliAction::InspectInputs => {
            match smartregress_action::inspect_inputs_pretty_json() {
                Ok(json) => println!("{json}"),
                Err(err) => fail(&err),
            }
        }
        CliAction::Run => {
            let composition = match AppComposition::from_env() {
                Ok(composition) => composition,
                Err(err) => fail(&err),
            };

            if let Err(err) = composition.run_analysis_usecase().execute().await {
                fail(&err);
            }
        }
    }
}

/// 모든 실패를 CI 오류 어노테이션 한 줄로 변환하고 비정상 종료한다.
fn fail(err: &anyhow::Error) -> ! {
    eprintln!("::error::{err:#}");
    std::process::exit(1);
}
