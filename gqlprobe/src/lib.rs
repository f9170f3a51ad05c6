pub mod commands;
pub mod handlers;

pub use commands::{CLAP_STYLING, command_argument_builder};
pub use handlers::{ProbeArgs, handle_probe, init_logging, prepare_probe};
