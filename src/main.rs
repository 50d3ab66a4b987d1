//! `revmsg` 바이너리 진입점.

use revmsg::interface::cli::{Cli, CliAction};
use revmsg::interface::composition::AppComposition;

fn main() {
    // stdout은 메시지 JSON 전용이다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Map(options) => {
            if let Err(err) = composition.map_messages_usecase().execute(options) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
