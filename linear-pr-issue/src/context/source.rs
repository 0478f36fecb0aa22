//! Where the pull request context comes from.

use super::error::ContextError;
use std::path::PathBuf;

/// Source of the pull request fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextSource {
    /// The webhook event payload written by the Actions runner.
    EventFile(PathBuf),

    /// A pull request fetched through the GitHub REST API.
    PullRequest {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
        /// Pull request number.
        number: u64,
        /// Optional token for private repositories.
        token: Option<String>,
        /// REST API base URL. The public API when unset.
        api_url: Option<String>,
    },
}

impl ContextSource {
    /// Picks the source from the available settings.
    ///
    /// An explicit pull request number takes precedence over the event payload.
    /// Empty values count as unset, since the Actions runner exports every
    /// declared input even when it was left blank.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError`] when neither source is usable or the pull
    /// request number is not a positive integer.
    pub fn from_parts(
        event_path: Option<PathBuf>,
        repository: Option<&str>,
        pr_number: Option<&str>,
        token: Option<String>,
    ) -> Result<Self, ContextError> {
        let event_path = event_path.filter(|path| !path.as_os_str().is_empty());
        let repository = repository.filter(|repository| !repository.is_empty());
        let token = token.filter(|token| !token.is_empty());
        let pr_number = match pr_number.map(str::trim).filter(|number| !number.is_empty()) {
            Some(number) => Some(
                number
                    .parse::<u64>()
                    .ok()
                    .filter(|number| *number > 0)
                    .ok_or_else(|| ContextError::InvalidPullRequestNumber {
                        value: number.to_string(),
                    })?,
            ),
            None => None,
        };

        match (pr_number, repository, event_path) {
            (Some(number), Some(repository), _) => {
                let (owner, repo) = split_repository(repository)?;
                Ok(Self::PullRequest {
                    owner,
                    repo,
                    number,
                    token,
                    api_url: None,
                })
            }
            (Some(_), None, _) => Err(ContextError::MissingRepository),
            (None, _, Some(path)) => Ok(Self::EventFile(path)),
            (None, _, None) => Err(ContextError::MissingEventPath),
        }
    }
}

impl ContextSource {
    /// Sends pull request lookups to `url` instead of the public API, as
    /// needed on GitHub Enterprise Server. Empty values are ignored, and so is
    /// an event file source.
    #[must_use]
    pub fn with_github_api_url(mut self, url: Option<String>) -> Self {
        if let Self::PullRequest { api_url, .. } = &mut self {
            *api_url = url.filter(|url| !url.is_empty());
        }
        self
    }
}

fn split_repository(repository: &str) -> Result<(String, String), ContextError> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ContextError::InvalidRepository {
            value: repository.to_string(),
        }),
    }
}
