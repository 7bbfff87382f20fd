//! Entrypoint for the `group-encoder` binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use semaphore_group::group::Group;
use semaphore_group_api::client::GroupApiClient;
use semaphore_group_encoder::cli::EncoderCli;
use semaphore_group_encoder::encode::GroupCalldata;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// The default base URL of the group registry.
const DEFAULT_BASE_URL: &str = "https://api.pcd-passport.com";

/// The environment variable overriding the registry base URL, for tests and
/// local registries.
const BASE_URL_ENV: &str = "GROUP_REGISTRY_URL";

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the encoded payload, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = EncoderCli::parse();

    // Validate before any client construction; no network call happens for
    // a missing or malformed id.
    let group_id = match cli.parse_group_id() {
        Ok(group_id) => group_id,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    let base_url =
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    match run(group_id, base_url).await {
        Ok(encoded) => {
            if let Err(err) = write_stdout(&encoded) {
                error!("failed to write encoded group: {err}");
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

/// Fetch, reconstruct, project, encode. The only stdout write happens in the
/// caller, after this returns successfully.
async fn run(group_id: u64, base_url: String) -> anyhow::Result<Vec<u8>> {
    let client = GroupApiClient::new(base_url);
    let record = client.group(group_id).await?;
    let group = Group::from_record(&record)?;

    Ok(GroupCalldata::project(&record, &group).encode())
}

fn write_stdout(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()
}
