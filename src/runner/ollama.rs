use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use super::interface::{ModelRunner, RunnerError};
use crate::config::RunnerConfig;

/// Model runner backed by the ollama CLI. Each generate() call spawns
/// `<command> run <model>`, writes the payload to stdin, and blocks until the
/// process exits. No pooling, no timeout, no partial output.
pub struct OllamaRunner {
    config: RunnerConfig,
}

impl OllamaRunner {
    pub fn new(config: RunnerConfig) -> Self {
        info!(
            "Initialized OllamaRunner: command={}, model={}",
            config.command, config.model
        );
        Self { config }
    }
}

#[async_trait]
impl ModelRunner for OllamaRunner {
    async fn generate(&self, prompt: &str) -> Result<String, RunnerError> {
        debug!("Invoking model runner with {} byte payload", prompt.len());
        run_process(
            &self.config.command,
            &["run".to_string(), self.config.model.clone()],
            prompt,
        )
        .await
    }
}

/// Run one external command to completion, supplying `input` as its entire
/// stdin and returning its decoded stdout. Nonzero exit becomes
/// `RunnerError::CommandFailed` with the captured stderr attached.
pub async fn run_process(
    command: &str,
    args: &[String],
    input: &str,
) -> Result<String, RunnerError> {
    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(RunnerError::Spawn)?;

    // stdin is piped above, so take() cannot return None
    let stdin = child.stdin.take();

    // Pump stdin while draining stdout/stderr. Writing the whole payload
    // before collecting output deadlocks once payload and output together
    // exceed the OS pipe buffers.
    let (write_result, output) = tokio::join!(
        async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(input.as_bytes()).await
                // stdin drops here so the runner sees EOF and finishes
            } else {
                Ok(())
            }
        },
        child.wait_with_output(),
    );

    let output = output.map_err(RunnerError::Io)?;

    if !output.status.success() {
        return Err(RunnerError::CommandFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    // A runner that exits cleanly without consuming all of its stdin closes
    // the pipe early; that is not a fault of the invocation.
    if let Err(e) = write_result {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            return Err(RunnerError::Io(e));
        }
    }

    Ok(String::from_utf8(output.stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_on_success() {
        let out = run_process("cat", &[], "hello runner").await.unwrap();
        assert_eq!(out, "hello runner");
    }

    #[tokio::test]
    async fn pumps_payloads_larger_than_the_pipe_buffer() {
        // 1 MiB through an echoing command: stdin and stdout both fill well
        // past the ~64 KiB pipe buffer, so this hangs unless the write and
        // the drain run concurrently.
        let payload = "x".repeat(1024 * 1024);
        let out = tokio::time::timeout(
            std::time::Duration::from_secs(10),
            run_process("cat", &[], &payload),
        )
        .await
        .expect("invocation hung on a 1 MiB payload")
        .unwrap();
        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn tolerates_runner_exiting_before_reading_stdin() {
        let payload = "x".repeat(1024 * 1024);
        let out = run_process("true", &[], &payload).await.unwrap();
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn nonzero_exit_reports_command_failure() {
        let err = run_process(
            "sh",
            &["-c".to_string(), "echo boom >&2; exit 3".to_string()],
            "",
        )
        .await
        .unwrap_err();
        match &err {
            RunnerError::CommandFailed { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
        assert!(err.user_message().starts_with("Error running model runner:"));
    }

    #[tokio::test]
    async fn missing_command_reports_unexpected_error() {
        let err = run_process("definitely-not-a-real-binary-xyz", &[], "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::Spawn(_)));
        assert!(err.user_message().starts_with("Unexpected error:"));
    }

    #[tokio::test]
    async fn error_markers_are_distinct() {
        let failed = run_process("false", &[], "").await.unwrap_err();
        let spawn = run_process("definitely-not-a-real-binary-xyz", &[], "")
            .await
            .unwrap_err();
        assert_ne!(
            failed.user_message().split(':').next(),
            spawn.user_message().split(':').next()
        );
    }
}
