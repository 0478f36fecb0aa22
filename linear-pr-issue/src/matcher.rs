//! Issue identifier matching.
//!
//! Each team gets its own pattern built from the team key, so a matched
//! number always belongs to the team that produced it.

use crate::linear::Team;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// An issue identifier found in the pull request text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueMatch {
    /// The matched text as written (e.g. `eng-5`).
    pub text: String,

    /// The issue sequence number.
    pub number: u64,
}

/// Case-insensitive `<team-key>-<digits>` pattern for one team.
#[derive(Debug, Clone)]
pub struct IssuePattern {
    team_key: String,
    regex: Regex,
}

impl IssuePattern {
    /// Builds the identifier pattern for `team`.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the compiled pattern exceeds the regex size limits.
    pub fn for_team(team: &Team) -> Result<Self, regex::Error> {
        let pattern = format!("{}-([0-9]+)", regex::escape(&team.key));
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self {
            team_key: team.key.clone(),
            regex,
        })
    }

    /// Returns the regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns every identifier in `haystack`, in text order.
    pub fn find_all(&self, haystack: &str) -> Vec<IssueMatch> {
        let matches: Vec<IssueMatch> = self
            .regex
            .captures_iter(haystack)
            .filter_map(|captures| self.to_match(&captures))
            .collect();

        debug!(
            team = %self.team_key,
            count = matches.len(),
            "Scanned for issue identifiers"
        );
        matches
    }

    /// Returns the first identifier in `haystack`.
    pub fn find_first(&self, haystack: &str) -> Option<IssueMatch> {
        self.regex
            .captures_iter(haystack)
            .find_map(|captures| self.to_match(&captures))
    }

    fn to_match(&self, captures: &regex::Captures<'_>) -> Option<IssueMatch> {
        let text = captures.get(0)?.as_str();
        let digits = captures.get(1)?.as_str();
        match digits.parse::<u64>() {
            Ok(number) => Some(IssueMatch {
                text: text.to_string(),
                number,
            }),
            Err(e) => {
                warn!(team = %self.team_key, text, error = %e, "Skipping unusable issue number");
                None
            }
        }
    }
}
