//! Runner configuration.

use crate::context::ContextSource;
use crate::linear::LINEAR_API_URL;

/// Configuration for a lookup run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Linear API key.
    api_key: String,
    /// Whether to publish every matched issue instead of the first.
    output_multiple: bool,
    /// Where the pull request fields come from.
    context_source: ContextSource,
    /// Linear GraphQL endpoint.
    linear_api_url: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(api_key: String, output_multiple: bool, context_source: ContextSource) -> Self {
        Self {
            api_key,
            output_multiple,
            context_source,
            linear_api_url: LINEAR_API_URL.to_string(),
        }
    }

    /// Sets a custom Linear GraphQL endpoint.
    pub fn with_linear_api_url(mut self, linear_api_url: String) -> Self {
        self.linear_api_url = linear_api_url;
        self
    }

    /// Returns the configured Linear API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns whether multiple mode is enabled.
    pub fn output_multiple(&self) -> bool {
        self.output_multiple
    }

    /// Returns the pull request context source.
    pub fn context_source(&self) -> &ContextSource {
        &self.context_source
    }

    /// Returns the Linear GraphQL endpoint.
    pub fn linear_api_url(&self) -> &str {
        &self.linear_api_url
    }
}
