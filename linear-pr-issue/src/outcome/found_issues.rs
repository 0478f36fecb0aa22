//! Successful lookup result.

use super::{
    ISSUES, ISSUE_DESCRIPTION, ISSUE_ID, ISSUE_IDENTIFIER, ISSUE_NUMBER, ISSUE_TITLE, ISSUE_URL,
    TEAM_ID, TEAM_KEY,
};
use crate::linear::{Issue, Team};
use crate::outputs::{OutputError, OutputSink};

/// Issues found for the first team whose identifiers resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoundIssues {
    /// Single mode: the first matched issue.
    Single {
        /// Team whose key matched.
        team: Team,
        /// Resolved issue.
        issue: Issue,
    },

    /// Multiple mode: every matched issue that resolved, in match order.
    Multiple {
        /// Team whose key matched.
        team: Team,
        /// Resolved issues.
        issues: Vec<Issue>,
    },
}

impl FoundIssues {
    /// Returns the team the issues belong to.
    #[must_use]
    pub fn team(&self) -> &Team {
        match self {
            Self::Single { team, .. } | Self::Multiple { team, .. } => team,
        }
    }

    /// Returns the resolved issues.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Single { issue, .. } => std::slice::from_ref(issue),
            Self::Multiple { issues, .. } => issues,
        }
    }

    /// Builds the `(name, value)` pairs published for this result.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the issue list can't be serialized.
    pub fn outputs(&self) -> Result<Vec<(&'static str, String)>, OutputError> {
        let team = self.team();
        let mut outputs = vec![(TEAM_ID, team.id.clone()), (TEAM_KEY, team.key.clone())];

        match self {
            Self::Single { issue, .. } => outputs.extend([
                (ISSUE_ID, issue.id.clone()),
                (ISSUE_NUMBER, issue.number.to_string()),
                (ISSUE_IDENTIFIER, issue.identifier.clone()),
                (ISSUE_URL, issue.url.clone()),
                (ISSUE_TITLE, issue.title.clone()),
                (
                    ISSUE_DESCRIPTION,
                    issue.description.clone().unwrap_or_default(),
                ),
            ]),
            Self::Multiple { issues, .. } => {
                let json =
                    serde_json::to_string(issues).map_err(|e| OutputError::SerializeError {
                        name: ISSUES.to_string(),
                        source: e,
                    })?;
                outputs.push((ISSUES, json));
            }
        }

        Ok(outputs)
    }

    /// Publishes the outputs for this result in one commit to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if serialization or the sink fails. The sink
    /// receives nothing when serialization fails.
    pub fn publish(&self, sink: &mut dyn OutputSink) -> Result<(), OutputError> {
        let outputs = self.outputs()?;
        sink.set_outputs(&outputs)
    }
}
