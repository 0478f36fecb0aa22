//! GraphQL client for the Linear API.
//!
//! Uses reqwest with the API key passed straight through in the
//! `Authorization` header. All queries target a single GraphQL endpoint,
//! `https://api.linear.app/graphql` unless overridden.

use super::error::LinearError;
use super::models::{Issue, Team};
use super::IssueTracker;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Default Linear GraphQL endpoint.
pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Teams requested per page when listing the workspace.
const TEAMS_PER_PAGE: u32 = 100;

const TEAMS_QUERY: &str = r#"
query Teams($first: Int!, $after: String) {
    teams(first: $first, after: $after) {
        nodes { id key name }
        pageInfo { hasNextPage endCursor }
    }
}"#;

const ISSUE_BY_TEAM_AND_NUMBER_QUERY: &str = r#"
query IssueByTeamAndNumber($teamId: ID!, $number: Float!) {
    issues(first: 1, filter: { team: { id: { eq: $teamId } }, number: { eq: $number } }) {
        nodes { id number identifier url title description }
    }
}"#;

/// Raw GraphQL envelope.
#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
    #[serde(rename = "pageInfo")]
    page_info: Option<PageInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
struct TeamsData {
    teams: Connection<Team>,
}

#[derive(Deserialize)]
struct IssuesData {
    issues: Connection<Issue>,
}

/// Linear GraphQL client.
#[derive(Debug, Clone)]
pub struct LinearClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl LinearClient {
    /// Creates a client against a custom GraphQL endpoint.
    pub fn with_api_url(api_key: impl Into<String>, api_url: &str) -> Result<Self, LinearError> {
        let endpoint = Url::parse(api_url).map_err(|source| LinearError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, LinearError> {
        let body = json!({ "query": query, "variables": variables });
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LinearError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = response.json().await?;
        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LinearError::GraphQl { messages });
        }

        envelope.data.ok_or(LinearError::MissingData)
    }
}

#[async_trait]
impl IssueTracker for LinearClient {
    async fn list_teams(&self) -> Result<Vec<Team>, LinearError> {
        let mut teams = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let data: TeamsData = self
                .graphql(
                    TEAMS_QUERY,
                    json!({ "first": TEAMS_PER_PAGE, "after": after }),
                )
                .await?;

            teams.extend(data.teams.nodes);

            match data.teams.page_info {
                Some(PageInfo {
                    has_next_page: true,
                    end_cursor: Some(cursor),
                }) => after = Some(cursor),
                _ => break,
            }
        }

        debug!(count = teams.len(), "Listed Linear teams");
        Ok(teams)
    }

    async fn get_issue(&self, team: &Team, number: u64) -> Result<Option<Issue>, LinearError> {
        let span = info_span!("get_issue", team = %team.key, number);

        async {
            let data: IssuesData = self
                .graphql(
                    ISSUE_BY_TEAM_AND_NUMBER_QUERY,
                    json!({ "teamId": team.id, "number": number }),
                )
                .await?;

            let issue = data.issues.nodes.into_iter().next();
            debug!(found = issue.is_some(), "Issue lookup complete");
            Ok(issue)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn team(key: &str) -> Team {
        Team {
            id: format!("team-{key}"),
            key: key.to_string(),
            name: key.to_string(),
        }
    }

    #[test]
    fn rejects_invalid_api_url() {
        let result = LinearClient::with_api_url("key", "not a url");
        assert!(matches!(result, Err(LinearError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn can_list_teams_across_pages() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("authorization", "lin_api_test")
                .body_includes("\"after\":null");
            then.status(200).json_body(json!({
                "data": { "teams": {
                    "nodes": [{ "id": "t1", "key": "ENG", "name": "Engineering" }],
                    "pageInfo": { "hasNextPage": true, "endCursor": "c1" }
                }}
            }));
        });
        let second = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_includes("\"after\":\"c1\"");
            then.status(200).json_body(json!({
                "data": { "teams": {
                    "nodes": [{ "id": "t2", "key": "OPS", "name": "Operations" }],
                    "pageInfo": { "hasNextPage": false, "endCursor": "c2" }
                }}
            }));
        });

        let client = LinearClient::with_api_url("lin_api_test", &server.url("/graphql")).unwrap();
        let teams = client.list_teams().await.unwrap();

        assert_eq!(
            teams.iter().map(|t| t.key.as_str()).collect::<Vec<_>>(),
            vec!["ENG", "OPS"]
        );
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }

    #[tokio::test]
    async fn can_get_issue_by_team_and_number() {
        let server = MockServer::start();
        let lookup = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_includes("\"teamId\":\"team-ENG\"")
                .body_includes("\"number\":42");
            then.status(200).json_body(json!({
                "data": { "issues": { "nodes": [{
                    "id": "issue-1",
                    "number": 42,
                    "identifier": "ENG-42",
                    "url": "https://linear.app/acme/issue/ENG-42",
                    "title": "Crash on save",
                    "description": "Steps to reproduce"
                }]}}
            }));
        });

        let client = LinearClient::with_api_url("key", &server.url("/graphql")).unwrap();
        let issue = client.get_issue(&team("ENG"), 42).await.unwrap().unwrap();

        assert_eq!(issue.identifier, "ENG-42");
        assert_eq!(issue.number, 42);
        assert_eq!(issue.description.as_deref(), Some("Steps to reproduce"));
        lookup.assert();
    }

    #[tokio::test]
    async fn missing_issue_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200)
                .json_body(json!({ "data": { "issues": { "nodes": [] } } }));
        });

        let client = LinearClient::with_api_url("key", &server.url("/graphql")).unwrap();
        let issue = client.get_issue(&team("ENG"), 9).await.unwrap();

        assert!(issue.is_none());
    }

    #[tokio::test]
    async fn graphql_errors_are_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({
                "data": null,
                "errors": [{ "message": "Authentication required" }]
            }));
        });

        let client = LinearClient::with_api_url("bad", &server.url("/graphql")).unwrap();
        let result = client.list_teams().await;

        match result {
            Err(LinearError::GraphQl { messages }) => {
                assert_eq!(messages, "Authentication required")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_errors_are_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(401).body("unauthorized");
        });

        let client = LinearClient::with_api_url("bad", &server.url("/graphql")).unwrap();
        let result = client.get_issue(&team("ENG"), 1).await;

        assert!(matches!(
            result,
            Err(LinearError::Status { status: 401, .. })
        ));
    }
}
