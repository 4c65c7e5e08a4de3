//! Error types for lumina

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lumina application
#[derive(Debug, Error)]
pub enum LuminaError {
    #[error("Not a lumina directory: {0}")]
    NotLuminaDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Failed to submit log: {0}")]
    Submission(String),

    #[error("Wizard error: {0}")]
    Wizard(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LuminaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LuminaError::NotLuminaDirectory(_) => 2,
            LuminaError::InvalidDateReference(_) => 3,
            LuminaError::NotSignedIn => 4,
            LuminaError::Submission(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LuminaError::NotLuminaDirectory(path) => {
                format!(
                    "Not a lumina directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'lumina init' in this directory to create a data directory\n\
                    • Navigate to an existing lumina directory\n\
                    • Set LUMINA_ROOT environment variable to your data path",
                    path.display()
                )
            }
            LuminaError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, 3 days ago\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    lumina log --date yesterday\n\
                    lumina history --from 2026-02-01 --to 2026-02-14",
                    ref_str
                )
            }
            LuminaError::NotSignedIn => "Not signed in\n\n\
                Suggestions:\n\
                • Run 'lumina auth signin' to start a demo session\n\
                • Run 'lumina auth signin --email you@example.com' to use your account"
                .to_string(),
            LuminaError::Submission(msg) => {
                format!(
                    "Failed to submit log: {}\n\n\
                    Your entry was kept in the pending queue.\n\
                    Run 'lumina sync' to retry the submission.",
                    msg
                )
            }
            LuminaError::Config(msg) => {
                if msg.contains("Unknown config key") || msg.contains("Unknown preference") {
                    format!("{}\n\nExample: lumina config trend_days 14", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LuminaError
pub type Result<T> = std::result::Result<T, LuminaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_lumina_directory_suggestion() {
        let err = LuminaError::NotLuminaDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("lumina init"));
        assert!(msg.contains("LUMINA_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_reference_examples() {
        let err = LuminaError::InvalidDateReference("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("lumina log --date yesterday"));
    }

    #[test]
    fn test_not_signed_in_suggestions() {
        let msg = LuminaError::NotSignedIn.display_with_suggestions();
        assert!(msg.contains("lumina auth signin"));
        assert!(msg.contains("--email"));
    }

    #[test]
    fn test_submission_mentions_sync() {
        let err = LuminaError::Submission("disk full".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("disk full"));
        assert!(msg.contains("lumina sync"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LuminaError::NotLuminaDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(LuminaError::InvalidDateReference(String::new()).exit_code(), 3);
        assert_eq!(LuminaError::NotSignedIn.exit_code(), 4);
        assert_eq!(LuminaError::Submission(String::new()).exit_code(), 5);
        assert_eq!(LuminaError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = LuminaError::Wizard("not at summary".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Wizard error: not at summary");
    }
}
