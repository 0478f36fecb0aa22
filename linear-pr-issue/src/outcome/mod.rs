//! Lookup outcome types and the step outputs they publish.

mod found_issues;

pub use found_issues::FoundIssues;

/// Linear team id.
pub const TEAM_ID: &str = "linear-team-id";
/// Linear team key.
pub const TEAM_KEY: &str = "linear-team-key";
/// Issue id (single mode).
pub const ISSUE_ID: &str = "linear-issue-id";
/// Issue number (single mode).
pub const ISSUE_NUMBER: &str = "linear-issue-number";
/// Issue identifier, e.g. `ENG-123` (single mode).
pub const ISSUE_IDENTIFIER: &str = "linear-issue-identifier";
/// Issue URL (single mode).
pub const ISSUE_URL: &str = "linear-issue-url";
/// Issue title (single mode).
pub const ISSUE_TITLE: &str = "linear-issue-title";
/// Issue description (single mode).
pub const ISSUE_DESCRIPTION: &str = "linear-issue-description";
/// JSON array of issues (multiple mode).
pub const ISSUES: &str = "linear-issues";
