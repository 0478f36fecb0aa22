//! Resolves matched identifiers to Linear issues.

use crate::linear::{Issue, IssueTracker, LinearError, Team};
use crate::matcher::IssueMatch;
use futures::future::try_join_all;
use tracing::{debug, info};

/// Looks up the issue for a single match within `team`.
///
/// # Errors
///
/// Returns [`LinearError`] if the tracker call fails. A missing issue is `Ok(None)`.
pub async fn resolve_single<T>(
    tracker: &T,
    team: &Team,
    found: &IssueMatch,
) -> Result<Option<Issue>, LinearError>
where
    T: IssueTracker + ?Sized,
{
    debug!(team = %team.key, number = found.number, "Resolving issue");
    tracker.get_issue(team, found.number).await
}

/// Looks up every match within `team` concurrently.
///
/// The returned issues keep the order of `matches`; matches with no
/// corresponding issue are dropped. Any lookup failure fails the whole batch.
///
/// # Errors
///
/// Returns the first [`LinearError`] raised by a lookup.
pub async fn resolve_all<T>(
    tracker: &T,
    team: &Team,
    matches: &[IssueMatch],
) -> Result<Vec<Issue>, LinearError>
where
    T: IssueTracker + ?Sized,
{
    let numbers: Vec<u64> = matches.iter().map(|m| m.number).collect();
    info!(team = %team.key, ?numbers, "Resolving issues");

    let lookups = matches
        .iter()
        .map(|found| resolve_single(tracker, team, found));
    let resolved = try_join_all(lookups).await?;

    Ok(resolved.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Tracker whose lookups finish in reverse order of submission.
    struct SlowFirstTracker;

    #[async_trait]
    impl IssueTracker for SlowFirstTracker {
        async fn list_teams(&self) -> Result<Vec<Team>, LinearError> {
            Ok(Vec::new())
        }

        async fn get_issue(&self, team: &Team, number: u64) -> Result<Option<Issue>, LinearError> {
            tokio::time::sleep(Duration::from_millis(100u64.saturating_sub(number))).await;
            if number == 404 {
                return Ok(None);
            }
            if number == 500 {
                return Err(LinearError::GraphQl {
                    messages: "boom".to_string(),
                });
            }
            Ok(Some(Issue {
                id: format!("id-{number}"),
                number,
                identifier: format!("{}-{number}", team.key),
                url: format!("https://linear.app/acme/issue/{}-{number}", team.key),
                title: "t".to_string(),
                description: None,
            }))
        }
    }

    fn team() -> Team {
        Team {
            id: "t1".to_string(),
            key: "ENG".to_string(),
            name: String::new(),
        }
    }

    fn matched(number: u64) -> IssueMatch {
        IssueMatch {
            text: format!("ENG-{number}"),
            number,
        }
    }

    #[tokio::test]
    async fn keeps_match_order() {
        let issues = resolve_all(&SlowFirstTracker, &team(), &[matched(1), matched(50), matched(99)])
            .await
            .unwrap();

        assert_eq!(
            issues.iter().map(|i| i.number).collect::<Vec<_>>(),
            vec![1, 50, 99]
        );
    }

    #[tokio::test]
    async fn drops_missing_issues() {
        let issues = resolve_all(&SlowFirstTracker, &team(), &[matched(404), matched(7)])
            .await
            .unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].identifier, "ENG-7");
    }

    #[tokio::test]
    async fn single_failure_fails_batch() {
        let result = resolve_all(&SlowFirstTracker, &team(), &[matched(7), matched(500)]).await;
        assert!(matches!(result, Err(LinearError::GraphQl { .. })));
    }

    #[tokio::test]
    async fn resolve_single_passes_through_missing() {
        let issue = resolve_single(&SlowFirstTracker, &team(), &matched(404))
            .await
            .unwrap();
        assert!(issue.is_none());
    }
}
