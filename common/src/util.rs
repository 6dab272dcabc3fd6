use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Exit code, `-1` if the process was terminated by a signal
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs an external program to completion and captures its output.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, HarnessError>;
}

/// Spawns real processes through [`tokio::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait::async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, HarnessError> {
        debug!("program={} args={}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| HarnessError::Spawn {
                program: program.to_owned(),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Like [`CommandRunner::run`], but a non-zero exit becomes [`HarnessError::Execution`]
pub async fn checked_output(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
) -> Result<CommandOutput, HarnessError> {
    let output = runner.run(program, args).await?;
    if !output.success() {
        return Err(HarnessError::Execution {
            program: program.to_owned(),
            code: output.code,
            stderr: output.stderr,
        });
    }
    Ok(output)
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::{collections::VecDeque, sync::Mutex};

    use super::{CommandOutput, CommandRunner};
    use crate::error::HarnessError;

    /// Replays canned outputs in order and records every invocation.
    #[derive(Debug, Default)]
    pub struct ScriptedRunner {
        replies: Mutex<VecDeque<CommandOutput>>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl ScriptedRunner {
        pub fn new(replies: impl IntoIterator<Item = CommandOutput>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn ok(stdout: &str) -> CommandOutput {
            CommandOutput {
                code: 0,
                stdout: stdout.to_owned(),
                stderr: String::new(),
            }
        }

        pub fn failed(code: i32, stderr: &str) -> CommandOutput {
            CommandOutput {
                code,
                stdout: String::new(),
                stderr: stderr.to_owned(),
            }
        }

        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(
            &self,
            program: &str,
            args: &[String],
        ) -> Result<CommandOutput, HarnessError> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_owned(), args.to_vec()));
            Ok(self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Self::ok("")))
        }
    }
}
