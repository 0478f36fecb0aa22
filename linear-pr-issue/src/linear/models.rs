//! Linear team and issue records.

use serde::{Deserialize, Deserializer, Serialize};

/// A team in the Linear workspace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Linear team id.
    pub id: String,

    /// Short key prefixing the team's issue identifiers (e.g. `ENG`).
    pub key: String,

    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A Linear issue as published to step outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Linear issue id.
    pub id: String,

    /// Sequence number within the owning team.
    #[serde(deserialize_with = "deserialize_number")]
    pub number: u64,

    /// Human readable key (e.g. `ENG-123`).
    pub identifier: String,

    /// Link to the issue in the Linear app.
    pub url: String,

    /// Issue title.
    pub title: String,

    /// Markdown description, if any.
    pub description: Option<String>,
}

/// Linear exposes issue numbers as GraphQL `Float`, so accept `12` and `12.0`.
fn deserialize_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "invalid issue number: {value}"
        )));
    }
    Ok(value as u64)
}
