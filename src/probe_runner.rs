// External probe runner: one command, hard wall-clock bound, stdout/stderr captured separately.
// Every failure ends up inside the ProbeResult; nothing is returned as an error.

use crate::error::ProbeError;
use crate::models::{ProbeRequest, ProbeResult};
use crate::platform::{CommandSpec, OsFamily, command_for};
use std::future::Future;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, timeout};
use tracing::{debug, instrument, warn};

/// How long to keep draining pipes after the process exited or was killed.
/// Grandchildren that inherited the pipe can otherwise hold it open indefinitely.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(250);

/// Seam between the engine and the OS process facility.
pub trait CommandExecutor: Send + Sync {
    fn execute(
        &self,
        command: &CommandSpec,
        timeout_ms: u64,
    ) -> impl Future<Output = ProbeResult> + Send;
}

/// Runs commands as child processes via tokio. Stateless, so concurrent calls never interfere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandExecutor for ProcessRunner {
    #[instrument(skip(self, command), fields(program = %command.program))]
    async fn execute(&self, command: &CommandSpec, timeout_ms: u64) -> ProbeResult {
        let started = Instant::now();
        debug!(command = %command.display(), timeout_ms, "starting probe");

        let mut child = match Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(source) => {
                let err = ProbeError::Spawn {
                    program: command.program.clone(),
                    source,
                };
                warn!(error = %err, "probe failed to start");
                return ProbeResult::failed(err.to_string());
            }
        };

        let stdout = Capture::start(child.stdout.take());
        let stderr = Capture::start(child.stderr.take());

        let (exit_succeeded, timed_out, failure) =
            match timeout(Duration::from_millis(timeout_ms), child.wait()).await {
                Ok(Ok(status)) => (status.success(), false, None),
                Ok(Err(source)) => (
                    false,
                    false,
                    Some(ProbeError::Wait {
                        program: command.program.clone(),
                        source,
                    }),
                ),
                Err(_) => {
                    if let Err(e) = child.kill().await {
                        debug!(error = %e, "kill after timeout failed");
                    }
                    (
                        false,
                        true,
                        Some(ProbeError::Timeout {
                            program: command.program.clone(),
                            timeout_ms,
                        }),
                    )
                }
            };

        let raw_output = stdout.finish().await;
        let mut raw_error = stderr.finish().await;
        if let Some(err) = failure {
            warn!(error = %err, "probe did not complete");
            if !raw_error.is_empty() && !raw_error.ends_with('\n') {
                raw_error.push('\n');
            }
            raw_error.push_str(&err.to_string());
        }

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            exit_succeeded, timed_out, "probe finished"
        );

        ProbeResult {
            exit_succeeded,
            raw_output,
            raw_error,
            timed_out,
        }
    }
}

/// Resolves the request's command for `family` and runs it.
/// `None` means the diagnostic is unavailable on this OS, which is not a failure.
pub async fn run_request<E: CommandExecutor>(
    executor: &E,
    request: &ProbeRequest,
    family: OsFamily,
) -> Option<ProbeResult> {
    let Some(command) = command_for(request.kind, family, &request.target_host) else {
        debug!(kind = ?request.kind, ?family, "no command for diagnostic on this platform");
        return None;
    };
    Some(executor.execute(&command, request.timeout_ms).await)
}

/// Accumulates a pipe into a shared buffer so partial output survives a kill.
struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
    task: Option<JoinHandle<()>>,
}

impl Capture {
    fn start<R>(reader: Option<R>) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let task = reader.map(|mut reader| {
            let buf = buf.clone();
            tokio::spawn(async move {
                let mut chunk = [0u8; 4096];
                loop {
                    match reader.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            let Ok(mut b) = buf.lock() else { break };
                            b.extend_from_slice(&chunk[..n]);
                        }
                    }
                }
            })
        });
        Self { buf, task }
    }

    async fn finish(self) -> String {
        let Capture { buf, task } = self;
        if let Some(mut task) = task
            && timeout(DRAIN_TIMEOUT, &mut task).await.is_err()
        {
            task.abort();
        }
        let bytes = buf
            .lock()
            .map(|b| b.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
