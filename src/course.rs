//! Course metadata loaded from `course.toml`.
//!
//! The course file declares everything the generator needs beyond the page
//! files themselves: the course masthead (name, subtitle, institution,
//! authors), the track list, and the ordered sections with their ordered
//! page lists. Section and page ordering is declaration order throughout;
//! nothing is ever sorted alphabetically.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Top-level course configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    pub course: CourseInfo,
    #[serde(rename = "track", default)]
    pub tracks: Vec<Track>,
    #[serde(rename = "section", default)]
    pub sections: Vec<SectionDecl>,
}

/// Course masthead metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseInfo {
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

/// A course track (e.g. "Bachelor" / "Master" variants of the same course).
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

/// A declared course section: identifier, display name, and the ordered
/// list of page source paths belonging to it.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionDecl {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pages: Vec<String>,
}

impl CourseConfig {
    /// Loads and parses the course metadata file.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to `course.toml`
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read course file: {}", path.display()))?;

        let config: CourseConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse course file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates the loaded course declaration.
    ///
    /// Section identifiers must be unique and every page may be declared in
    /// at most one section (each sidebar page belongs to exactly one
    /// section). Exercise and in-depth numbering is display-only and is
    /// deliberately not checked for uniqueness or order.
    ///
    /// # Errors
    ///
    /// Returns error on an empty course name, duplicate section id, or a
    /// page declared in more than one section.
    pub fn validate(&self) -> Result<()> {
        if self.course.name.trim().is_empty() {
            bail!("Course name must not be empty");
        }

        let mut section_ids = HashSet::new();
        let mut declared_pages = HashSet::new();

        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                bail!("Duplicate section id: {}", section.id);
            }

            for page in &section.pages {
                if !declared_pages.insert(page.as_str()) {
                    bail!(
                        "Page {} is declared in more than one section",
                        page
                    );
                }
            }
        }

        Ok(())
    }

    /// Returns the ordered (id, display name) pairs of all sections.
    ///
    /// This is the shape the navigation builder consumes.
    pub fn section_refs(&self) -> Vec<(&str, &str)> {
        self.sections
            .iter()
            .map(|s| (s.id.as_str(), s.name.as_str()))
            .collect()
    }
}
