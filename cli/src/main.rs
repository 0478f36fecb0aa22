//! CLI for the Linear PR issue lookup.
//!
//! Finds the Linear issue referenced by a pull request's branch, title or
//! body and publishes its fields as GitHub Actions step outputs.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use linear_pr_issue::{
    error_command, ContextSource, FoundIssues, GithubOutputFile, OutputSink, Runner, RunnerConfig,
    RunnerError, StdoutOutputs, LINEAR_API_URL,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Linear PR Issue - Publish the Linear issue referenced by a pull request.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Linear API key.
    #[arg(long, env = "INPUT_LINEAR-API-KEY", hide_env_values = true)]
    linear_api_key: String,

    /// Publish every matched issue of the winning team as a JSON list.
    #[arg(
        long,
        env = "INPUT_OUTPUT-MULTIPLE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    output_multiple: bool,

    /// Path to the webhook event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,

    /// File receiving step outputs. Outputs are printed when unset.
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_path: Option<PathBuf>,

    /// Linear GraphQL endpoint.
    #[arg(long, default_value = LINEAR_API_URL)]
    linear_api_url: String,

    /// Fetch this pull request through the GitHub API instead of the event payload.
    #[arg(long, env = "INPUT_PR-NUMBER")]
    pr_number: Option<String>,

    /// Repository of `--pr-number`, as owner/name.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// GitHub token for `--pr-number` lookups.
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// GitHub REST API base URL for `--pr-number` lookups.
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Both octocrab and reqwest sit on rustls; pick one provider for the process.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(found) => {
            print_summary(&found);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Lookup failed");
            println!("{}", error_command(&e.to_string()));
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout only carries workflow commands and printed
/// outputs. `RUST_LOG` wins; otherwise the level is "debug" when the runner
/// has debug logging enabled and "info" elsewhere.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level())))
        .init();
}

/// Returns the default log level, honouring `RUNNER_DEBUG=1`.
fn default_level() -> &'static str {
    match std::env::var("RUNNER_DEBUG") {
        Ok(value) if value == "1" => "debug",
        _ => "info",
    }
}

/// Main execution logic.
async fn run(args: Args) -> Result<FoundIssues, RunnerError> {
    let context_source = ContextSource::from_parts(
        args.event_path,
        args.repository.as_deref(),
        args.pr_number.as_deref(),
        args.github_token,
    )?
    .with_github_api_url(args.github_api_url);
    let config = RunnerConfig::new(args.linear_api_key, args.output_multiple, context_source)
        .with_linear_api_url(args.linear_api_url);

    let output_path = args
        .output_path
        .filter(|path| !path.as_os_str().is_empty());
    let mut sink: Box<dyn OutputSink> = match output_path {
        Some(path) => Box::new(GithubOutputFile::new(path)),
        None => Box::new(StdoutOutputs),
    };

    let runner = Runner::new(config)?;
    runner.run(sink.as_mut()).await
}

/// Logs which issue(s) were published.
fn print_summary(found: &FoundIssues) {
    let identifiers: Vec<&str> = found
        .issues()
        .iter()
        .map(|issue| issue.identifier.as_str())
        .collect();
    info!(
        team = %found.team().key,
        team_name = %found.team().name,
        issues = %identifiers.join(", "),
        "Found Linear issue"
    );
}
