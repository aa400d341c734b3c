//! Departure bridge subprocess client.
//!
//! The MVG upstream is reached through a small Python helper rather than
//! directly over HTTP: the helper wraps the `mvg` library, which tracks the
//! upstream's endpoint churn so this server does not have to. The client
//! spawns one `program script station_id` process per fetch and reads a
//! single JSON payload from its stdout. Stderr carries the helper's
//! diagnostics, a non-zero exit means the fetch failed, and failed fetches
//! are reported, never retried here.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::domain::StationId;

use super::error::BridgeError;
use super::types::{BridgePayload, RawDeparture};

/// Default interpreter used to run the bridge script.
const DEFAULT_PROGRAM: &str = "python3";

/// Default bridge script location, relative to the working directory.
const DEFAULT_SCRIPT: &str = "utils/mvg_bridge.py";

/// How many characters of process output to keep in error messages.
const ERROR_SNIPPET_LEN: usize = 500;

/// Configuration for the bridge client.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Interpreter (or wrapper) used to run the script
    pub program: String,
    /// Path to the bridge script
    pub script: PathBuf,
    /// Optional bound on a single invocation. `None` waits indefinitely,
    /// matching the original deployment.
    pub timeout_secs: Option<u64>,
}

impl BridgeConfig {
    /// Create a config with an explicit program and script.
    pub fn new(program: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            timeout_secs: None,
        }
    }

    /// Bound each invocation to `secs` seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_SCRIPT)
    }
}

/// Client for the departure bridge.
///
/// Stateless apart from its configuration; the per-station cache lives in
/// [`CachedBridgeClient`](crate::cache::CachedBridgeClient).
#[derive(Debug, Clone)]
pub struct BridgeClient {
    config: BridgeConfig,
}

impl BridgeClient {
    /// Create a new bridge client with the given configuration.
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Fetch the raw departure list for a station.
    ///
    /// Spawns one bridge process and waits for it to exit. Any failure mode
    /// (spawn error, non-zero exit, unparseable stdout, in-band error
    /// report) yields an error and no partial data.
    pub async fn fetch_departures(
        &self,
        station: &StationId,
    ) -> Result<Vec<RawDeparture>, BridgeError> {
        tracing::debug!(station = %station, "spawning bridge");

        let mut command = Command::new(&self.config.program);
        command
            .arg(&self.config.script)
            .arg(station.as_str())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.config.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), command.output())
                .await
                .map_err(|_| BridgeError::TimedOut { secs })??,
            None => command.output().await?,
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        // The helper logs its progress to stderr; keep it visible when debugging
        for line in stderr.lines() {
            tracing::debug!(station = %station, "bridge: {line}");
        }

        if !output.status.success() {
            return Err(BridgeError::ProcessFailed {
                code: output.status.code(),
                stderr: snippet(&stderr),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let payload: BridgePayload =
            serde_json::from_str(&stdout).map_err(|e| BridgeError::Json {
                message: e.to_string(),
                output: snippet(&stdout),
            })?;

        if let Some(message) = payload.error {
            return Err(BridgeError::Upstream(message));
        }

        tracing::debug!(
            station = %station,
            count = payload.departures.len(),
            "bridge returned departures"
        );
        Ok(payload.departures)
    }
}

/// Truncate process output for inclusion in error messages.
fn snippet(text: &str) -> String {
    text.chars().take(ERROR_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.program, "python3");
        assert_eq!(config.script, PathBuf::from("utils/mvg_bridge.py"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn config_builder() {
        let config = BridgeConfig::new("python3.12", "/opt/board/bridge.py").with_timeout(15);
        assert_eq!(config.program, "python3.12");
        assert_eq!(config.script, PathBuf::from("/opt/board/bridge.py"));
        assert_eq!(config.timeout_secs, Some(15));
    }

    /// Write a shell script the client can run in place of the Python
    /// bridge. The returned guard keeps the file alive.
    fn fake_bridge(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{body}").unwrap();
        file.flush().unwrap();
        file
    }

    fn client_for(script: &tempfile::NamedTempFile) -> BridgeClient {
        BridgeClient::new(BridgeConfig::new("sh", script.path()))
    }

    fn station() -> StationId {
        StationId::parse("de:09162:6").unwrap()
    }

    #[tokio::test]
    async fn parses_payload_from_stdout() {
        let script =
            fake_bridge(r#"echo '{"departures": [{"line": "19", "destination": "Pasing"}, "junk"]}'"#);
        let raws = client_for(&script).fetch_departures(&station()).await.unwrap();
        assert_eq!(raws.len(), 2);
        assert_eq!(raws[0].text("line").as_deref(), Some("19"));
        assert!(!raws[1].is_record());
    }

    #[tokio::test]
    async fn passes_station_id_as_argument() {
        let script = fake_bridge(r#"echo "{\"departures\": [{\"destination\": \"$1\"}]}""#);
        let raws = client_for(&script).fetch_departures(&station()).await.unwrap();
        assert_eq!(raws[0].text("destination").as_deref(), Some("de:09162:6"));
    }

    #[tokio::test]
    async fn nonzero_exit_is_process_failure() {
        let script = fake_bridge("echo 'no module named mvg' >&2\nexit 3");
        let err = client_for(&script).fetch_departures(&station()).await.unwrap_err();
        match err {
            BridgeError::ProcessFailed { code, stderr } => {
                assert_eq!(code, Some(3));
                assert!(stderr.contains("no module named mvg"));
            }
            other => panic!("expected ProcessFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_stdout_is_json_error() {
        let script = fake_bridge("echo 'Fetching departures...'");
        let err = client_for(&script).fetch_departures(&station()).await.unwrap_err();
        match err {
            BridgeError::Json { output, .. } => assert!(output.contains("Fetching")),
            other => panic!("expected Json, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn in_band_error_is_upstream_failure() {
        // The bridge exits zero on API failures and reports them in-band
        let script = fake_bridge(r#"echo '{"departures": [], "error": "MVG API unreachable"}'"#);
        let err = client_for(&script).fetch_departures(&station()).await.unwrap_err();
        match err {
            BridgeError::Upstream(message) => assert_eq!(message, "MVG API unreachable"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_io_error() {
        let client = BridgeClient::new(BridgeConfig::new(
            "/nonexistent/bridge-interpreter",
            "bridge.py",
        ));
        let err = client.fetch_departures(&station()).await.unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }

    #[tokio::test]
    async fn slow_bridge_times_out() {
        let script = fake_bridge("sleep 30");
        let client = BridgeClient::new(BridgeConfig::new("sh", script.path()).with_timeout(1));
        let err = client.fetch_departures(&station()).await.unwrap_err();
        assert!(matches!(err, BridgeError::TimedOut { secs: 1 }));
    }
}
