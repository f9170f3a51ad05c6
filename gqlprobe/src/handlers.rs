use clap::ArgMatches;
use gqlprobe_core::{ProbeOptions, ReportFormat, TargetError, execute_probe, normalize_url, render_report};
use gqlprobe_scanner::HeaderSet;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Values pulled out of the parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeArgs {
    pub url: String,
    pub headers: Vec<String>,
    pub force_post: bool,
    pub timeout_secs: u64,
    pub format: ReportFormat,
}

impl ProbeArgs {
    pub fn from_matches(args: &ArgMatches) -> Self {
        Self {
            url: args.get_one::<String>("URL").cloned().unwrap_or_default(),
            headers: args
                .get_many::<String>("header")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            force_post: args.get_flag("post"),
            timeout_secs: args.get_one::<u64>("timeout").copied().unwrap_or(10),
            format: args
                .get_one::<String>("format")
                .and_then(|f| f.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Set up the process-wide log subscriber on stderr. `RUST_LOG` wins over the
/// flags when set.
pub fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init();
}

/// Turn raw arguments into probe options: headers are parsed (malformed ones
/// logged and dropped), then the URL is checked and normalized.
pub fn prepare_probe(args: &ProbeArgs) -> Result<ProbeOptions, TargetError> {
    let headers = HeaderSet::from_args(&args.headers);
    let url = normalize_url(&args.url)?;

    Ok(ProbeOptions {
        url,
        headers,
        force_post: args.force_post,
        timeout_secs: args.timeout_secs,
    })
}

/// Run the check and print the report. Only a missing URL is an error.
pub async fn handle_probe(args: &ArgMatches) -> Result<(), TargetError> {
    let probe_args = ProbeArgs::from_matches(args);
    let options = prepare_probe(&probe_args)?;
    let result = execute_probe(options).await;

    println!("{}", render_report(&result, probe_args.format));
    Ok(())
}
