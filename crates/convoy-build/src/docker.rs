use std::path::Path;

use crate::executor::{CommandExecutor, ExecError};

/// Tag the built image is published under locally.
pub const IMAGE_TAG: &str = "convoy:local";

/// Argument list for the `docker` invocation.
///
/// An empty `envoy_version` emits no `--build-arg`; the Dockerfile's own
/// `ARG ENVOY_VERSION` default applies. A non-empty version `X` becomes
/// `ENVOY_VERSION=vX-latest`, the moving-tag convention of the upstream
/// envoy images. The build-arg sits between `build` and the positional
/// context argument, where docker expects flags.
pub fn build_args(envoy_version: &str) -> Vec<String> {
    let mut args = vec!["build".to_owned()];

    if !envoy_version.is_empty() {
        args.push("--build-arg".to_owned());
        args.push(format!("ENVOY_VERSION=v{envoy_version}-latest"));
    }

    args.extend([".".to_owned(), "-t".to_owned(), IMAGE_TAG.to_owned()]);
    args
}

/// Runs `docker build` against an assembled context directory.
pub async fn build_image<E: CommandExecutor>(
    executor: &E,
    context_dir: &Path,
    envoy_version: &str,
) -> Result<(), DockerError> {
    tracing::info!(context = %context_dir.display(), "building convoy image");

    executor
        .run("docker", &build_args(envoy_version), context_dir)
        .await
        .map_err(|e| DockerError::BuildFailed { source: e })
}

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("failed to build convoy image")]
    BuildFailed { source: ExecError },
}
