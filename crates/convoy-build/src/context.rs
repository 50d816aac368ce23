use std::path::{Path, PathBuf};

/// Entry-point script baked into the image, embedded at compile time.
pub const ENTRYPOINT_SH: &[u8] = include_bytes!("../embeddable/entrypoint.sh");

/// Dockerfile for the convoy image, embedded at compile time.
pub const DOCKERFILE: &[u8] = include_bytes!("../embeddable/Dockerfile");

/// Assembles the docker build context for the convoy image.
///
/// Creates a fresh `convoy-build*` directory under the system temp root and
/// writes exactly three files into it: the two embedded templates and the
/// consul binary with mode `0o777`. The directory is persisted, not cleaned
/// up, so it stays inspectable after the run.
pub fn assemble(consul_binary: &[u8]) -> Result<PathBuf, ContextError> {
    let dir = tempfile::Builder::new()
        .prefix("convoy-build")
        .tempdir()
        .map_err(|e| ContextError::CreateDir { source: e })?
        .keep();

    write_template(&dir, "entrypoint.sh", ENTRYPOINT_SH)?;
    write_template(&dir, "Dockerfile", DOCKERFILE)?;

    let binary_path = dir.join("consul");
    std::fs::write(&binary_path, consul_binary).map_err(|e| ContextError::WriteBinary {
        path: binary_path.clone(),
        source: e,
    })?;

    // Executable by whatever user the image runs as.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(&binary_path, std::fs::Permissions::from_mode(0o777)).map_err(
            |e| ContextError::SetPermissions {
                path: binary_path,
                source: e,
            },
        )?;
    }

    Ok(dir)
}

fn write_template(dir: &Path, name: &str, contents: &[u8]) -> Result<(), ContextError> {
    let path = dir.join(name);
    std::fs::write(&path, contents).map_err(|e| ContextError::WriteTemplate { path, source: e })
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to create build context directory")]
    CreateDir { source: std::io::Error },

    #[error("failed to write template {path}")]
    WriteTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write consul binary at {path}")]
    WriteBinary {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to mark {path} executable")]
    SetPermissions {
        path: PathBuf,
        source: std::io::Error,
    },
}
