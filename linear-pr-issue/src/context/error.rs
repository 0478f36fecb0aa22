//! Pull request context error types.

use thiserror::Error;

/// Errors that can occur while loading the pull request context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The pull request has no title.
    #[error("Could not load PR title")]
    MissingTitle,

    /// The pull request has no head branch.
    #[error("Could not load PR branch")]
    MissingBranch,

    /// Neither an event payload nor a pull request number was supplied.
    #[error("No event payload available; set GITHUB_EVENT_PATH or pass a pull request number")]
    MissingEventPath,

    /// A pull request number was supplied without its repository.
    #[error("A pull request number requires the repository (owner/name)")]
    MissingRepository,

    /// The pull request number is not a positive integer.
    #[error("Invalid pull request number '{value}'")]
    InvalidPullRequestNumber { value: String },

    /// The repository is not in `owner/name` form.
    #[error("Invalid repository '{value}', expected owner/name")]
    InvalidRepository { value: String },

    /// Failed to read the event payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the event payload.
    #[error("Failed to parse event payload '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
