// File system utilities

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

pub async fn ensure_directory_exists(path: &Path) -> std::io::Result<()> {
    if !fs::try_exists(path).await? {
        fs::create_dir_all(path).await?;
        tracing::debug!(path = %path.display(), "created directory");
    }
    Ok(())
}

/// Write `content` to `path` unless it already exists.
///
/// Without `overwrite` the file is created with `create_new`, so an existing
/// file is never truncated. Returns whether the file was written.
pub async fn write_if_absent(path: &Path, content: &str, overwrite: bool) -> std::io::Result<bool> {
    if overwrite {
        fs::write(path, content).await?;
        return Ok(true);
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path).await {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(err),
    };
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(true)
}
