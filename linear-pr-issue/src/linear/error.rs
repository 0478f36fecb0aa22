//! Linear client error types.

use thiserror::Error;

/// Errors that can occur while talking to the Linear API.
#[derive(Debug, Error)]
pub enum LinearError {
    /// Transport or decoding failure from the HTTP client.
    #[error("Linear API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("Linear API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The GraphQL response carried an `errors` array.
    #[error("Linear GraphQL errors: {messages}")]
    GraphQl { messages: String },

    /// The GraphQL response had neither `data` nor `errors`.
    #[error("Missing 'data' in Linear response")]
    MissingData,

    /// The configured API URL is not a valid URL.
    #[error("Invalid Linear API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
