//! # CLI Layer
//!
//! One possible UI client for the gist library. This is the only place that
//! knows about arguments, terminal output and exit codes.
//!
//! ## Output
//!
//! Progress and warning messages go to stderr; the gist URL is the only
//! thing written to stdout, so `gist p notes.md | pbcopy` copies just the link.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `render`: Message printing and the license notice

mod render;
pub mod setup;

use clap::Parser;
use gist::api::{GistApi, Visibility};
use gist::client::GistClient;
use gist::config::Settings;
use gist::error::Result;
use gist::input::system::SystemInput;
use render::{print_license, print_messages};
use setup::{Cli, Commands, UploadArgs};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Public(args) => handle_upload(args, Visibility::Public),
        Commands::Secret(args) => handle_upload(args, Visibility::Secret),
        Commands::License => {
            print_license();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gist=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn handle_upload(args: UploadArgs, visibility: Visibility) -> Result<()> {
    let settings = Settings::from_env()?;
    let client = GistClient::new(settings.api_url.as_str(), settings.timeout())?;
    tracing::debug!(
        endpoint = client.endpoint(),
        timeout_secs = settings.timeout_secs,
        "client ready"
    );

    let mut api = GistApi::new(SystemInput::new(), client);
    let config = args.into_config(visibility);

    // Progress and warnings are shown before the network call, even if it fails
    let assembled = api.assemble(&config)?;
    print_messages(&assembled.messages);

    let uploaded = api.upload(&config, &assembled.files)?;
    print_messages(&uploaded.messages);
    if let Some(url) = &uploaded.url {
        println!("{}", url);
    }
    Ok(())
}
