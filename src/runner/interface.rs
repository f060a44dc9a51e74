use async_trait::async_trait;
use thiserror::Error;

/// Faults from one model-runner invocation. `CommandFailed` means the process
/// ran and exited nonzero; every other variant is a launch, stream-I/O, or
/// decoding fault.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("model runner exited with {status}: {stderr}")]
    CommandFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("failed to launch model runner: {0}")]
    Spawn(std::io::Error),
    #[error("i/o error talking to model runner: {0}")]
    Io(std::io::Error),
    #[error("model runner produced non-UTF-8 output: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

impl RunnerError {
    /// The text shown to the user in place of a model response. Errors are
    /// reported, not propagated: the form always gets a string back.
    pub fn user_message(&self) -> String {
        match self {
            RunnerError::CommandFailed { .. } => {
                format!("Error running model runner: {}", self)
            }
            _ => format!("Unexpected error: {}", self),
        }
    }
}

/// Interface for a local model runner. One call spawns one external process,
/// feeds it the composed payload, and drains its entire output.
#[async_trait]
pub trait ModelRunner: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, RunnerError>;
}
