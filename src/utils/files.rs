use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Maximum size for description and comment dumps: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that an opened file does not exceed [`MAX_FILE_SIZE_BYTES`]
///
/// Takes the open handle rather than the path so the size that is checked is the
/// size of the file that gets read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_small_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "0:30 hello").unwrap();
        let handle = File::open(file.path()).unwrap();
        assert!(validate_file_size(&handle, file.path()).is_ok());
    }

    #[test]
    fn test_validate_oversized_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // Sparse file, no real data written
        file.as_file().set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();
        let handle = File::open(file.path()).unwrap();

        let err = validate_file_size(&handle, file.path()).unwrap_err();
        assert!(err.to_string().contains("File too large"));
    }
}
