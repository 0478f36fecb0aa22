//! Linear issue tracker access.
//!
//! The rest of the crate talks to Linear only through [`IssueTracker`], so
//! tests (and alternative clients) can stand in for the GraphQL API.

mod client;
mod error;
mod models;

pub use client::{LinearClient, LINEAR_API_URL};
pub use error::LinearError;
pub use models::{Issue, Team};

use async_trait::async_trait;

/// The two tracker operations the issue lookup needs.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists every team visible to the credential, in tracker order.
    async fn list_teams(&self) -> Result<Vec<Team>, LinearError>;

    /// Looks up the issue with `number` in `team`.
    ///
    /// Returns `Ok(None)` when the team has no such issue (e.g. it was deleted).
    async fn get_issue(&self, team: &Team, number: u64) -> Result<Option<Issue>, LinearError>;
}
