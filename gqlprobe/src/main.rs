use gqlprobe::{command_argument_builder, handle_probe, init_logging};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();

    init_logging(matches.get_flag("quiet"), matches.get_flag("verbose"));

    if let Err(e) = handle_probe(&matches).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
