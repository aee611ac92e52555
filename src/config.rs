//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Name of the course metadata file expected in the content directory.
pub const COURSE_FILE: &str = "course.toml";

/// Command line configuration for lectern.
#[derive(Debug, Clone, Parser)]
#[command(name = "lectern", version, about, long_about = None)]
pub struct Config {
    /// Course content directory
    #[arg(default_value = ".")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "site")]
    pub output: PathBuf,

    /// URL prefix for generated links (e.g. "/scicomp")
    #[arg(long, default_value = "")]
    pub root_url: String,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory or its course metadata file
    /// does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        if !self.course_file().exists() {
            bail!(
                "Course metadata file not found: {}",
                self.course_file().display()
            );
        }

        Ok(())
    }

    /// Returns the path of the course metadata file.
    pub fn course_file(&self) -> PathBuf {
        self.content.join(COURSE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_content(content: PathBuf) -> Config {
        Config {
            content,
            output: PathBuf::from("site"),
            root_url: String::new(),
            no_open: true,
        }
    }

    #[test]
    fn test_course_file_joins_content_dir() {
        // Arrange
        let config = config_with_content(PathBuf::from("/course/material"));

        // Act
        let path = config.course_file();

        // Assert
        assert_eq!(path, PathBuf::from("/course/material/course.toml"));
    }

    #[test]
    fn test_validate_missing_content_dir() {
        // Arrange
        let config = config_with_content(PathBuf::from("/nonexistent/path"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing content directory should fail");
        assert!(
            result.unwrap_err().to_string().contains("Content directory"),
            "Error should mention content directory"
        );
    }

    #[test]
    fn test_validate_missing_course_file() {
        // Arrange: current directory exists but carries no course.toml
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let config = config_with_content(dir.path().to_path_buf());

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing course.toml should fail");
        assert!(
            result.unwrap_err().to_string().contains("course.toml"),
            "Error should mention the course metadata file"
        );
    }

    #[test]
    fn test_validate_complete_content_dir() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        std::fs::write(dir.path().join(COURSE_FILE), "[course]\nname = \"X\"\n")
            .expect("Should write course file");
        let config = config_with_content(dir.path().to_path_buf());

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Complete content directory should be valid");
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = Config {
            content: PathBuf::from("/course"),
            output: PathBuf::from("out"),
            root_url: "/scicomp".to_string(),
            no_open: true,
        };

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.content, original.content);
        assert_eq!(cloned.output, original.output);
        assert_eq!(cloned.root_url, original.root_url);
        assert_eq!(cloned.no_open, original.no_open);
    }

    #[test]
    fn test_config_debug_format() {
        // Arrange
        let config = config_with_content(PathBuf::from("."));

        // Act
        let debug_str = format!("{:?}", config);

        // Assert
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("root_url"));
    }
}
