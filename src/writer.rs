use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;
use tokio::fs;

use crate::error::Error;
use crate::layout;

/// Writes `content` to `directory/base_name.html`, creating the directory first.
///
/// Concurrent writers may race to create the same directory; `create_dir_all` treats an
/// existing directory as success. An existing file is overwritten.
/// A `base_name` that is not a single plain file name is refused before touching the disk.
pub async fn write(directory: &Path, base_name: &str, content: &str) -> Result<PathBuf, Error> {
    plain_file_name(base_name)?;
    fs::create_dir_all(directory).await?;
    let path = directory.join(layout::file_name(base_name));
    fs::write(&path, content).await?;
    debug!("wrote {}", path.display());
    Ok(path)
}

fn plain_file_name(base_name: &str) -> Result<(), Error> {
    let mut components = Path::new(base_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::Filesystem(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{base_name}` is not a plain file name"),
        ))),
    }
}

/// Copies a stylesheet (or any asset) into `dest_dir`, keeping its file name.
pub async fn copy_asset(src: &Path, dest_dir: &Path) -> Result<PathBuf, Error> {
    let file_name = src.file_name().ok_or_else(|| {
        Error::Filesystem(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{}` does not name a file", src.display()),
        ))
    })?;
    fs::create_dir_all(dest_dir).await?;
    let dest = dest_dir.join(file_name);
    fs::copy(src, &dest).await?;
    debug!("copied {} to {}", src.display(), dest.display());
    Ok(dest)
}
