//! In-memory output sink.

use super::error::OutputError;
use super::OutputSink;

/// Collects outputs in publish order.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputs {
    outputs: Vec<(String, String)>,
}

impl MemoryOutputs {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value published under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the published output names in order.
    pub fn names(&self) -> Vec<&str> {
        self.outputs.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns true if nothing was published.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl OutputSink for MemoryOutputs {
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<(), OutputError> {
        self.outputs.extend(
            outputs
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone())),
        );
        Ok(())
    }
}
