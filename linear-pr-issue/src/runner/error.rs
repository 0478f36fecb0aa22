//! Runner error types.

/// Errors that end a lookup run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Pull request context loading errors.
    #[error(transparent)]
    Context(#[from] crate::context::ContextError),

    /// Linear API errors.
    #[error(transparent)]
    Linear(#[from] crate::linear::LinearError),

    /// Output publishing errors.
    #[error(transparent)]
    Output(#[from] crate::outputs::OutputError),

    /// Identifier pattern construction errors.
    #[error("Failed to build issue pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The credential sees no teams.
    #[error("No teams found in Linear workspace")]
    NoTeams,

    /// No team's identifiers resolved to an issue.
    #[error("Failed to find Linear issue identifier in PR branch, title, or body.")]
    NoIssueFound,
}
