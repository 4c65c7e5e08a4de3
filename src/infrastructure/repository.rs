//! File system repository

use crate::error::{LuminaError, Result};
use crate::infrastructure::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the data directory inside a lumina root
pub const DATA_DIR: &str = ".lumina";

/// Abstract repository for lumina data directory operations
pub trait Repository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .lumina/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .lumina/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .lumina directory exists
    fn is_initialized(&self) -> bool;

    /// Create .lumina directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of Repository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the data root.
    /// First checks LUMINA_ROOT environment variable, then walks up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("LUMINA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(LuminaError::Config(format!(
                    "LUMINA_ROOT is set to '{}' but no .lumina directory found. \
                    Run 'lumina init' in that directory or unset LUMINA_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the data root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_data_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| LuminaError::NotLuminaDirectory(start.to_path_buf()))
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    /// Path of a file inside the data directory
    pub fn data_path(&self, name: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(name)
    }

    /// Read a TOML document from the data directory.
    /// A missing file yields the document's default value.
    pub fn read_document<T>(&self, name: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_path(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(LuminaError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            LuminaError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Serialize a document and replace its file in the data directory
    pub fn write_document<T: Serialize>(&self, name: &str, document: &T) -> Result<()> {
        let contents = toml::to_string_pretty(document)?;
        self.write_atomic(&self.data_path(name), &contents)
    }

    /// Best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.lumina-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("data.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Repository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(LuminaError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}
