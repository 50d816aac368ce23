use std::path::PathBuf;

use convoy_core::{ConvoyConfig, arch};

use crate::consul::{self, ConsulError};
use crate::context::{self, ContextError};
use crate::docker::{self, DockerError};
use crate::executor::CommandExecutor;

/// Execute the full build pipeline: build consul, assemble the context,
/// build the image. Fail-fast; the first stage error aborts the run, so a
/// failed consul build never creates a context directory or touches docker.
///
/// Returns the retained context directory so the caller can report it.
pub async fn run<E: CommandExecutor>(
    executor: &E,
    config: &ConvoyConfig,
) -> Result<PathBuf, PipelineError> {
    let consul_binary = consul::build(executor, &config.consul_location, arch::host_arch()).await?;

    let context_dir = context::assemble(&consul_binary)?;

    docker::build_image(executor, &context_dir, &config.envoy_version).await?;

    Ok(context_dir)
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Consul(#[from] ConsulError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Docker(#[from] DockerError),
}
