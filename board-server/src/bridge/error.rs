//! Bridge client error types.

/// Errors from the departure bridge subprocess.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Spawning or collecting the bridge process failed at the OS level
    #[error("bridge process error: {0}")]
    Io(#[from] std::io::Error),

    /// The bridge exited with a non-zero status
    #[error("bridge exited with code {code:?}: {stderr}")]
    ProcessFailed { code: Option<i32>, stderr: String },

    /// Stdout was not a valid bridge payload
    #[error("bridge output parse error: {message} (output: {output})")]
    Json { message: String, output: String },

    /// The bridge itself reported an upstream MVG failure
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The bridge ran longer than the configured bound
    #[error("bridge timed out after {secs}s")]
    TimedOut { secs: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_exit_code_and_stderr() {
        let err = BridgeError::ProcessFailed {
            code: Some(3),
            stderr: "Traceback (most recent call last)".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains('3'), "{text}");
        assert!(text.contains("Traceback"), "{text}");
    }

    #[test]
    fn display_includes_offending_output() {
        let err = BridgeError::Json {
            message: "expected value".to_string(),
            output: "not-json".to_string(),
        };
        assert!(err.to_string().contains("not-json"));
    }

    #[test]
    fn upstream_message_passes_through() {
        let err = BridgeError::Upstream("MVG API unreachable".to_string());
        assert_eq!(err.to_string(), "upstream error: MVG API unreachable");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no python3");
        let err = BridgeError::from(io);
        assert!(matches!(err, BridgeError::Io(_)));
    }
}
