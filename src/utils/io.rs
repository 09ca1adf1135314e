use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read a whole document as UTF-8 text.
///
/// Invalid byte sequences become U+FFFD instead of failing the read.
pub(crate) fn read_text(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "input is not valid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    tracing::debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}

/// Write `content` to `path`, creating missing parent directories.
pub(crate) fn write_text(path: &Path, content: &str) -> Result<(), AppError> {
    let to_error = |source| AppError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
