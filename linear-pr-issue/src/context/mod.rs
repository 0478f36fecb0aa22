//! Pull request context loading.
//!
//! Reads the title, head branch and body of the triggering pull request,
//! either from the Actions event payload or from the GitHub REST API.

mod error;
mod pr_context;
mod source;

pub use error::ContextError;
pub use pr_context::PrContext;
pub use source::ContextSource;

use octocrab::Octocrab;
use pr_context::EventPayload;
use std::path::Path;
use tracing::{info, info_span, Instrument};

/// Loads the pull request context from `source`.
///
/// # Errors
///
/// Returns [`ContextError`] if the source can't be read or the title or
/// branch is missing.
pub async fn load_context(source: &ContextSource) -> Result<PrContext, ContextError> {
    match source {
        ContextSource::EventFile(path) => load_from_event_file(path),
        ContextSource::PullRequest {
            owner,
            repo,
            number,
            token,
            api_url,
        } => {
            let mut builder = Octocrab::builder();
            if let Some(api_url) = api_url {
                builder = builder.base_uri(api_url.as_str())?;
            }
            if let Some(token) = token {
                builder = builder.personal_token(token.clone());
            }
            let octocrab = builder.build()?;
            fetch_pull_request(&octocrab, owner, repo, *number).await
        }
    }
}

/// Reads the context from the webhook event payload at `path`.
///
/// # Errors
///
/// Returns [`ContextError`] if the file can't be read or parsed, or the
/// title or branch is missing.
pub fn load_from_event_file(path: &Path) -> Result<PrContext, ContextError> {
    info!(path = %path.display(), "Reading event payload");

    let content = std::fs::read_to_string(path).map_err(|e| ContextError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|e| ContextError::JsonError {
            path: path.display().to_string(),
            source: e,
        })?;

    PrContext::from_payload(payload)
}

/// Fetches the context for pull request `number` through the GitHub API.
///
/// # Errors
///
/// Returns [`ContextError`] if the request fails or the title or branch is
/// missing.
pub async fn fetch_pull_request(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<PrContext, ContextError> {
    let span = info_span!("fetch_pull_request", repo = %format!("{owner}/{repo}"), number);

    async {
        info!("Fetching pull request");
        let pull_request = octocrab.pulls(owner, repo).get(number).await?;
        PrContext::new(
            pull_request.title,
            Some(pull_request.head.ref_field),
            pull_request.body,
        )
    }
    .instrument(span)
    .await
}
