// techcommerce-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// This function:
/// 1. Creates a temporary file in the same directory as the target path.
/// 2. Writes the content to the temporary file.
/// 3. Persists (renames) the temporary file to the target path.
///
/// This ensures that the target file is either fully written or not written
/// at all, preventing partial data corruption.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    // Create a temporary file in the same directory to ensure atomic rename works across filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    // Write content
    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    // Atomic rename (persist)
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Serializes `data` as pretty JSON and writes it atomically.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), InfrastructureError> {
    let content = serde_json::to_string_pretty(data)?;
    atomic_write(path, content)
}
