//! Step output publishing.
//!
//! Outputs go through [`OutputSink`] so the runner doesn't care whether they
//! end up in the Actions `GITHUB_OUTPUT` file, on stdout, or in memory.

mod commands;
mod error;
mod github;
mod memory;

pub use commands::{error_command, escape_data};
pub use error::OutputError;
pub use github::{GithubOutputFile, StdoutOutputs};
pub use memory::MemoryOutputs;

/// Destination for named step outputs.
pub trait OutputSink {
    /// Publishes every `(name, value)` pair, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if any output is invalid or can't be written.
    /// Nothing is published in that case.
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<(), OutputError>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<(), OutputError> {
        (**self).set_outputs(outputs)
    }
}
