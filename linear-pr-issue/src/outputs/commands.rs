//! GitHub Actions workflow commands written to stdout.

/// Escapes data for a workflow command message.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an `::error::` command that fails the step with `message`.
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_message() {
        assert_eq!(escape_data("100%\r\ndone"), "100%25%0D%0Adone");
    }

    #[test]
    fn formats_error_command() {
        assert_eq!(
            error_command("No teams found in Linear workspace"),
            "::error::No teams found in Linear workspace"
        );
    }
}
