use std::path::{Path, PathBuf};

use crate::executor::{CommandExecutor, ExecError};

/// Builds consul from a local checkout and returns the binary's bytes.
///
/// Runs `make linux` with the checkout as the command's working directory,
/// then reads the makefile's architecture-specific output at
/// `pkg/bin/linux_<arch>/consul`. `arch` must be the Go-style name the
/// makefile uses (see `convoy_core::arch::host_arch`).
pub async fn build<E: CommandExecutor>(
    executor: &E,
    consul_location: &Path,
    arch: &str,
) -> Result<Vec<u8>, ConsulError> {
    if !consul_location.is_dir() {
        return Err(ConsulError::NotADirectory(consul_location.to_path_buf()));
    }

    tracing::info!(location = %consul_location.display(), "building consul");

    executor
        .run("make", &["linux".to_owned()], consul_location)
        .await
        .map_err(|e| ConsulError::BuildFailed { source: e })?;

    let binary_path = consul_location.join(format!("pkg/bin/linux_{arch}/consul"));

    std::fs::read(&binary_path).map_err(|e| ConsulError::ReadArtifact {
        path: binary_path,
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConsulError {
    #[error("consul source location {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to build consul")]
    BuildFailed { source: ExecError },

    #[error("failed to read built consul binary at {path}")]
    ReadArtifact {
        path: PathBuf,
        source: std::io::Error,
    },
}
