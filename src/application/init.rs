//! Initialize data directory use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, Repository};
use std::fs;
use std::path::Path;

/// Initialize a new lumina data directory at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    tracing::info!(root = %path.display(), "initialized data directory");
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_path_and_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("health").join("logs");

        let repo = init(&target).unwrap();
        assert!(repo.is_initialized());
        assert_eq!(repo.load_config().unwrap().trend_days, 7);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
