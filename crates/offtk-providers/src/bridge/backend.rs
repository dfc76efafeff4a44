//! Subprocess bridge backend

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use offtk_application::ports::registry::ToolkitWrapperConfig;
use offtk_domain::error::{Error, Result};
use offtk_domain::ports::{Availability, BackendReply, ToolkitBackend};
use offtk_domain::value_objects::OperationRequest;

use crate::availability::probe_program;
use crate::bridge::protocol::BridgeResponse;
use crate::constants::{
    BRIDGE_STDERR_TAIL_BYTES, BRIDGE_TOOLKIT_FLAG, DEFAULT_BRIDGE_COMMAND,
    DEFAULT_BRIDGE_TIMEOUT_SECS,
};

/// Toolkit backend that runs one bridge process per call
///
/// The bridge is started as `<command> <args..> --toolkit <name>`. It is
/// killed when the call times out or the call future is dropped.
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use offtk_providers::bridge::BridgeToolkitBackend;
///
/// let backend = BridgeToolkitBackend::new("offtk-bridge")
///     .with_arg("--quiet")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct BridgeToolkitBackend {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl BridgeToolkitBackend {
    /// Create a backend running `command` with the default timeout
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_BRIDGE_TIMEOUT_SECS),
        }
    }

    /// Build from wrapper configuration, falling back to defaults
    pub fn from_config(config: &ToolkitWrapperConfig) -> Self {
        let command = config
            .bridge_command
            .clone()
            .unwrap_or_else(|| DEFAULT_BRIDGE_COMMAND.to_string());
        Self {
            command,
            args: config.bridge_args.clone(),
            timeout: config
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_BRIDGE_TIMEOUT_SECS)),
        }
    }

    /// Append an argument placed before `--toolkit`
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bridge program
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Per-call timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn run(&self, toolkit: &str, payload: Vec<u8>) -> Result<std::process::Output> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(BRIDGE_TOOLKIT_FLAG)
            .arg(toolkit)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Error::backend_with_source(
                    toolkit,
                    format!("failed to start bridge '{}'", self.command),
                    e,
                )
            })?;

        // stdin is fed while stdout and stderr drain, so neither pipe can fill up
        let stdin = child.stdin.take();
        let send = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(&payload).await {
                Ok(()) => Ok(()),
                // A bridge that exits before reading is judged by its exit status
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                Err(e) => Err(Error::backend_with_source(
                    toolkit,
                    "failed to send request to bridge",
                    e,
                )),
            }
        };

        let (sent, output) = tokio::join!(send, child.wait_with_output());
        sent?;
        output.map_err(|e| Error::backend_with_source(toolkit, "failed to read bridge output", e))
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    if text.len() <= BRIDGE_STDERR_TAIL_BYTES {
        return text.to_string();
    }
    let mut start = text.len() - BRIDGE_STDERR_TAIL_BYTES;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    text[start..].to_string()
}

#[async_trait]
impl ToolkitBackend for BridgeToolkitBackend {
    fn backend_name(&self) -> &str {
        "bridge"
    }

    fn probe(&self) -> Availability {
        probe_program(&self.command)
    }

    async fn execute(&self, toolkit: &str, request: &OperationRequest) -> Result<BackendReply> {
        let payload = serde_json::to_vec(request)?;
        debug!(
            toolkit,
            operation = %request.operation(),
            command = %self.command,
            "Running bridge"
        );

        let output = tokio::time::timeout(self.timeout, self.run(toolkit, payload))
            .await
            .map_err(|_| {
                Error::backend(
                    toolkit,
                    format!("bridge timed out after {:?}", self.timeout),
                )
            })??;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if stdout.is_empty() {
            let message = if output.status.success() {
                "bridge produced no response".to_string()
            } else {
                format!("bridge exited with {}: {}", output.status, stderr_tail(&output.stderr))
            };
            return Err(Error::backend(toolkit, message));
        }

        BridgeResponse::parse(toolkit, stdout.as_bytes())?.into_reply(toolkit)
    }
}
