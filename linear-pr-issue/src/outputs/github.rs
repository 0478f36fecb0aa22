//! Outputs written for the Actions runner.

use super::commands::escape_data;
use super::error::OutputError;
use super::OutputSink;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appends outputs to the file named by `GITHUB_OUTPUT`.
///
/// Every value is written in the multi-line form:
/// ```text
/// name<<ghadelimiter_<uuid>
/// value
/// ghadelimiter_<uuid>
/// ```
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    /// Creates a sink appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the outputs file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for GithubOutputFile {
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<(), OutputError> {
        let mut buffer = String::new();
        for (name, value) in outputs {
            validate_name(name)?;

            let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
            if value.contains(&delimiter) {
                return Err(OutputError::DelimiterCollision {
                    name: name.to_string(),
                    delimiter,
                });
            }
            buffer.push_str(&format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"));
        }

        let io_error = |source| OutputError::IoError {
            path: self.path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_error)?;
        file.write_all(buffer.as_bytes()).map_err(io_error)?;

        debug!(count = outputs.len(), "Set outputs");
        Ok(())
    }
}

/// Prints outputs to stdout when no outputs file is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutputs;

impl OutputSink for StdoutOutputs {
    fn set_outputs(&mut self, outputs: &[(&str, String)]) -> Result<(), OutputError> {
        let mut lines = Vec::with_capacity(outputs.len());
        for (name, value) in outputs {
            validate_name(name)?;
            lines.push(format!("{name}={}", escape_data(value)));
        }
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), OutputError> {
    if name.is_empty() || name.contains(['\n', '\r', '=']) || name.contains("<<") {
        return Err(OutputError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Parses the heredoc format back into (name, value) pairs.
    fn parse_outputs(content: &str) -> Vec<(String, String)> {
        let mut outputs = Vec::new();
        let mut lines = content.lines();
        while let Some(header) = lines.next() {
            let (name, delimiter) = header.split_once("<<").unwrap();
            let mut value = Vec::new();
            for line in lines.by_ref() {
                if line == delimiter {
                    break;
                }
                value.push(line);
            }
            outputs.push((name.to_string(), value.join("\n")));
        }
        outputs
    }

    #[test]
    fn appends_multiline_outputs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        fs::write(&path, "existing<<EOF\nkept\nEOF\n").unwrap();

        let mut sink = GithubOutputFile::new(&path);
        sink.set_outputs(&[("linear-issue-title", "Crash on save".to_string())])
            .unwrap();
        sink.set_outputs(&[(
            "linear-issue-description",
            "line one\nline two".to_string(),
        )])
        .unwrap();

        let outputs = parse_outputs(&fs::read_to_string(&path).unwrap());
        assert_eq!(
            outputs,
            vec![
                ("existing".to_string(), "kept".to_string()),
                ("linear-issue-title".to_string(), "Crash on save".to_string()),
                (
                    "linear-issue-description".to_string(),
                    "line one\nline two".to_string()
                ),
            ]
        );
    }

    #[test]
    fn rejects_invalid_names() {
        let temp = TempDir::new().unwrap();
        let mut sink = GithubOutputFile::new(temp.path().join("output"));

        assert!(matches!(
            sink.set_outputs(&[("", "x".to_string())]),
            Err(OutputError::InvalidName { .. })
        ));
        assert!(matches!(
            sink.set_outputs(&[("a\nb", "x".to_string())]),
            Err(OutputError::InvalidName { .. })
        ));
        assert!(!sink.path().exists());
    }

    #[test]
    fn invalid_pair_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        fs::write(&path, "existing<<EOF\nkept\nEOF\n").unwrap();

        let mut sink = GithubOutputFile::new(&path);
        let result = sink.set_outputs(&[
            ("linear-team-id", "team-1".to_string()),
            ("linear-team-key", "ENG".to_string()),
            ("bad=name", "x".to_string()),
        ]);

        assert!(matches!(result, Err(OutputError::InvalidName { .. })));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "existing<<EOF\nkept\nEOF\n"
        );
    }

    #[test]
    fn writes_batch_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        let mut sink = GithubOutputFile::new(&path);
        sink.set_outputs(&[
            ("linear-team-key", "ENG".to_string()),
            ("linear-issues", "[]".to_string()),
        ])
        .unwrap();

        let outputs = parse_outputs(&fs::read_to_string(&path).unwrap());
        assert_eq!(
            outputs,
            vec![
                ("linear-team-key".to_string(), "ENG".to_string()),
                ("linear-issues".to_string(), "[]".to_string()),
            ]
        );
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let mut sink = GithubOutputFile::new(temp.path().join("missing-dir/output"));

        assert!(matches!(
            sink.set_outputs(&[("name", "value".to_string())]),
            Err(OutputError::IoError { .. })
        ));
    }
}
