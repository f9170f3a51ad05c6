use clap::{ArgAction, arg};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("gqlprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("gqlprobe")
        .about("Checks for enabled GraphQL introspection.")
        .styles(CLAP_STYLING)
        .arg(
            arg!(<URL>)
                .required(true)
                .help("The URL of the GraphQL endpoint to check."),
        )
        .arg(
            arg!(-H --"header" <HEADER>)
                .required(false)
                .help(
                    "Add custom headers to the request.  Example: -H 'Authorization: Bearer \
                <token>'",
                )
                .action(ArgAction::Append),
        )
        .arg(
            arg!(-p --"post")
                .required(false)
                .help("Force POST request (never fall back to GET on an HTML response)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-q --"quiet")
                .required(false)
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Log request details")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
}
