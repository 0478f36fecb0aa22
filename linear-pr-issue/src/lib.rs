#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod context;
pub mod linear;
pub mod matcher;
pub mod outcome;
pub mod outputs;
pub mod resolver;
pub mod runner;

pub use context::{load_context, ContextError, ContextSource, PrContext};
pub use linear::{Issue, IssueTracker, LinearClient, LinearError, Team, LINEAR_API_URL};
pub use matcher::{IssueMatch, IssuePattern};
pub use outcome::FoundIssues;
pub use outputs::{
    error_command, GithubOutputFile, MemoryOutputs, OutputError, OutputSink, StdoutOutputs,
};
pub use resolver::{resolve_all, resolve_single};
pub use runner::{find_issues, Runner, RunnerConfig, RunnerError};
