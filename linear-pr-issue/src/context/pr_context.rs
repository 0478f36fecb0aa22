//! Pull request fields scanned for issue identifiers.

use super::error::ContextError;
use serde::Deserialize;
use tracing::debug;

/// Title, head branch and body of the triggering pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrContext {
    /// Pull request title.
    pub title: String,

    /// Head branch name.
    pub branch: String,

    /// Pull request description. May be absent.
    pub body: Option<String>,
}

/// Subset of a GitHub webhook event payload.
#[derive(Debug, Deserialize)]
pub(crate) struct EventPayload {
    pub(crate) pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestPayload {
    pub(crate) title: Option<String>,
    pub(crate) head: Option<HeadPayload>,
    pub(crate) body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HeadPayload {
    #[serde(rename = "ref")]
    pub(crate) ref_name: Option<String>,
}

impl PrContext {
    /// Validates the raw pull request fields.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingTitle`] or [`ContextError::MissingBranch`]
    /// when the respective field is absent or empty. An absent body is accepted.
    pub fn new(
        title: Option<String>,
        branch: Option<String>,
        body: Option<String>,
    ) -> Result<Self, ContextError> {
        debug!(title = ?title, "PR title");
        let title = title
            .filter(|title| !title.is_empty())
            .ok_or(ContextError::MissingTitle)?;

        debug!(branch = ?branch, "PR branch");
        let branch = branch
            .filter(|branch| !branch.is_empty())
            .ok_or(ContextError::MissingBranch)?;

        debug!(body = ?body, "PR body");
        Ok(Self {
            title,
            branch,
            body,
        })
    }

    /// Extracts the context from a parsed event payload.
    ///
    /// # Errors
    ///
    /// See [`PrContext::new`].
    pub(crate) fn from_payload(payload: EventPayload) -> Result<Self, ContextError> {
        let Some(pull_request) = payload.pull_request else {
            return Err(ContextError::MissingTitle);
        };
        let branch = pull_request.head.and_then(|head| head.ref_name);
        Self::new(pull_request.title, branch, pull_request.body)
    }

    /// Extracts the context from a webhook event payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::JsonError`] if the payload is not valid JSON,
    /// otherwise see [`PrContext::new`].
    pub fn from_event_json(json: &str) -> Result<Self, ContextError> {
        let payload: EventPayload =
            serde_json::from_str(json).map_err(|source| ContextError::JsonError {
                path: "<inline>".to_string(),
                source,
            })?;
        Self::from_payload(payload)
    }

    /// Returns the text scanned for identifiers: branch, title and body
    /// joined by single spaces.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.branch,
            self.title,
            self.body.as_deref().unwrap_or_default()
        )
    }
}
