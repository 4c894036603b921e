use crate::core::domain::{
    error::{GridResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Represents the configuration for an archive value object
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    extension: &'static str,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { extension: "zip" }
    }
}

/// A site bundle selected for publishing.
///
/// Only the file name is checked here; the file is read when the publish
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    path: ArchivePath,
}

/// Displayable wrapper so the path can satisfy `ValueObject::Value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePath(PathBuf);

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl Archive {
    /// Validates a user-supplied path, rejecting blanks and non-zip files
    pub fn parse(raw: impl AsRef<Path>) -> GridResult<Self> {
        <Self as ValueObject>::new(ArchivePath(raw.as_ref().to_path_buf()))
    }

    pub fn path(&self) -> &Path {
        &self.path.0
    }

    /// The file name sent in the multipart body
    pub fn file_name(&self) -> String {
        self.path
            .0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl ValueObject for Archive {
    type Value = ArchivePath;
    type ValidationConfig = ArchiveConfig;

    fn value(&self) -> &Self::Value {
        &self.path
    }

    fn validation_config() -> Self::ValidationConfig {
        ArchiveConfig::default()
    }

    fn validate(
        value: &Self::Value,
        config: &Self::ValidationConfig,
    ) -> Result<(), ValidationError> {
        let name = value
            .0
            .file_name()
            .map(|name| name.to_string_lossy().trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "file" });
        }

        let suffix = format!(".{}", config.extension);
        if !name.to_lowercase().ends_with(&suffix) {
            return Err(ValidationError::Extension {
                field: "file",
                expected: config.extension,
            });
        }

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { path: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::error::GridError;

    #[test]
    fn test_zip_extension_is_case_insensitive() {
        for name in ["site.zip", "SITE.ZIP", "/tmp/uploads/bundle.Zip"] {
            assert!(Archive::parse(name).is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_other_extensions_rejected() {
        for name in ["site.tar.gz", "site.zip.bak", "zip", "site"] {
            let result = Archive::parse(name);
            assert!(
                matches!(
                    result,
                    Err(GridError::Validation {
                        source: ValidationError::Extension { .. }
                    })
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(matches!(
            Archive::parse(""),
            Err(GridError::Validation {
                source: ValidationError::Empty { field: "file" }
            })
        ));
    }

    #[test]
    fn test_file_name_strips_directories() {
        let archive = Archive::parse("/home/me/sites/landing.zip").unwrap();
        assert_eq!(archive.file_name(), "landing.zip");
    }
}
