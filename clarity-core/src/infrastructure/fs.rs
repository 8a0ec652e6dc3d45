use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created next to the target and renamed over it,
/// so the target is either fully written or left untouched.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Same directory so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("rules.json");

        atomic_write(&file_path, "{}")?;

        assert_eq!(fs::read_to_string(file_path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("rules.json");

        atomic_write(&file_path, "[1]")?;
        atomic_write(&file_path, "[2]")?;

        assert_eq!(fs::read_to_string(file_path)?, "[2]");
        Ok(())
    }

    #[test]
    fn test_atomic_write_into_missing_directory_fails() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("nope").join("rules.json");

        let res = atomic_write(&file_path, "{}");
        assert!(matches!(res, Err(InfrastructureError::Io(_))));
        Ok(())
    }
}
