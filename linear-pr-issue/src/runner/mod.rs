//! Orchestrates the pull request issue lookup.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::context::{load_context, PrContext};
use crate::linear::{IssueTracker, LinearClient};
use crate::matcher::IssuePattern;
use crate::outcome::FoundIssues;
use crate::outputs::OutputSink;
use crate::resolver::{resolve_all, resolve_single};
use tracing::{debug, info, warn};

/// Runs the lookup against an issue tracker.
pub struct Runner<T = LinearClient> {
    config: RunnerConfig,
    tracker: T,
}

impl Runner<LinearClient> {
    /// Builds a runner talking to the Linear API.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let tracker = LinearClient::with_api_url(config.api_key(), config.linear_api_url())?;
        Ok(Self { config, tracker })
    }
}

impl<T: IssueTracker> Runner<T> {
    /// Builds a runner over an existing tracker.
    pub fn with_tracker(config: RunnerConfig, tracker: T) -> Self {
        Self { config, tracker }
    }

    /// Loads the pull request context, finds its issue(s) and publishes them.
    ///
    /// Nothing is published on failure.
    pub async fn run(&self, sink: &mut dyn OutputSink) -> Result<FoundIssues, RunnerError> {
        let context = load_context(self.config.context_source()).await?;
        self.run_with_context(&context, sink).await
    }

    /// Same as [`Runner::run`] with an already loaded context.
    pub async fn run_with_context(
        &self,
        context: &PrContext,
        sink: &mut dyn OutputSink,
    ) -> Result<FoundIssues, RunnerError> {
        let found = find_issues(&self.tracker, context, self.config.output_multiple()).await?;
        found.publish(sink)?;
        info!(
            team = %found.team().key,
            team_name = %found.team().name,
            count = found.issues().len(),
            "Published Linear issue outputs"
        );
        Ok(found)
    }
}

/// Finds the issue(s) referenced by `context`.
///
/// Teams are tried in tracker order and the first team whose matches resolve
/// wins. In single mode only the team's first match is looked up; in
/// multiple mode all of its matches are looked up concurrently.
///
/// # Errors
///
/// Returns [`RunnerError::NoTeams`] when the workspace has no teams,
/// [`RunnerError::NoIssueFound`] when no team resolves, and
/// [`RunnerError::Linear`] on any lookup failure.
pub async fn find_issues<T>(
    tracker: &T,
    context: &PrContext,
    output_multiple: bool,
) -> Result<FoundIssues, RunnerError>
where
    T: IssueTracker + ?Sized,
{
    let teams = tracker.list_teams().await?;
    if teams.is_empty() {
        return Err(RunnerError::NoTeams);
    }
    info!(count = teams.len(), "Found Linear teams");

    let haystack = context.haystack();

    for team in teams {
        let pattern = IssuePattern::for_team(&team)?;
        debug!(
            pattern = pattern.as_str(),
            haystack = %haystack,
            "Checking PR for identifier"
        );

        if output_multiple {
            let matches = pattern.find_all(&haystack);
            if matches.is_empty() {
                continue;
            }

            let issues = resolve_all(tracker, &team, &matches).await?;
            if issues.is_empty() {
                warn!(team = %team.key, "No matched issues exist, trying next team");
                continue;
            }
            return Ok(FoundIssues::Multiple { team, issues });
        }

        let Some(found) = pattern.find_first(&haystack) else {
            continue;
        };
        debug!(number = found.number, "Found issue number");

        match resolve_single(tracker, &team, &found).await? {
            Some(issue) => return Ok(FoundIssues::Single { team, issue }),
            None => warn!(identifier = %found.text, "Issue not found, trying next team"),
        }
    }

    Err(RunnerError::NoIssueFound)
}
