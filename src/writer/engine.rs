use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::write_request::{Contents, WriteMode, WriteOptions};
use crate::utils::encoding::codec::EncodeError;
use crate::utils::fs::crud;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error occurred due to: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error occurred due to: {0}")]
    Encoding(#[from] EncodeError),
}

/// Writes the full contents to a file with default options, creating the
/// file or truncating it if it exists.
pub async fn write_file(
    path: impl AsRef<Path>,
    data: impl Into<Contents>,
) -> Result<(), WriteError> {
    write_file_with(path, data, WriteOptions::default()).await
}

/// Writes the full contents to a file. The options argument accepts a
/// `WriteOptions`, an `Encoding`, or a parsed encoding name.
pub async fn write_file_with(
    path: impl AsRef<Path>,
    data: impl Into<Contents>,
    options: impl Into<WriteOptions>,
) -> Result<(), WriteError> {
    let path = path.as_ref();
    let options = options.into();
    let bytes = data.into().into_bytes(options.resolved_encoding())?;

    match options.mode {
        WriteMode::Truncate => crud::write_file(path, &bytes).await?,
        WriteMode::Append => crud::append_file(path, &bytes).await?,
        WriteMode::CreateNew => crud::create_new_file(path, &bytes).await?,
    }
    apply_permissions(path, options.permissions)?;

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Blocking variant of [`write_file`] with identical semantics.
pub fn write_file_sync(
    path: impl AsRef<Path>,
    data: impl Into<Contents>,
) -> Result<(), WriteError> {
    write_file_sync_with(path, data, WriteOptions::default())
}

/// Blocking variant of [`write_file_with`] with identical semantics.
pub fn write_file_sync_with(
    path: impl AsRef<Path>,
    data: impl Into<Contents>,
    options: impl Into<WriteOptions>,
) -> Result<(), WriteError> {
    let path = path.as_ref();
    let options = options.into();
    let bytes = data.into().into_bytes(options.resolved_encoding())?;

    match options.mode {
        WriteMode::Truncate => crud::write_file_sync(path, &bytes)?,
        WriteMode::Append => crud::append_file_sync(path, &bytes)?,
        WriteMode::CreateNew => crud::create_new_file_sync(path, &bytes)?,
    }
    apply_permissions(path, options.permissions)?;

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn apply_permissions(path: &Path, permissions: Option<u32>) -> std::io::Result<()> {
    let Some(mode) = permissions else {
        return Ok(());
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
    }

    #[cfg(not(unix))]
    {
        let _ = mode;
        tracing::warn!("file permissions are not supported on this platform");
    }

    Ok(())
}
