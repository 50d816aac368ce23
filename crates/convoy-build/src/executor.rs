use std::path::Path;

/// Abstraction over external command execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
/// Commands inherit the terminal's stdio; only the exit status is observed.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args` in `cwd`, waiting for it to exit.
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), ExecError>;
}

/// Real command executor backed by [`tokio::process::Command`].
pub struct RealExecutor;

impl CommandExecutor for RealExecutor {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), ExecError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ExecError::Spawn {
                program: program.to_owned(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecError::Failed {
                program: program.to_owned(),
                args: args.to_vec(),
                status,
            })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to start `{program}`; is it installed and on PATH?")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} {args:?} exited with {status}")]
    Failed {
        program: String,
        args: Vec<String>,
        status: std::process::ExitStatus,
    },
}
