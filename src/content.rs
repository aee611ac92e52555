//! Page records and front-matter loading.
//!
//! A page file optionally starts with a TOML front-matter block delimited
//! by `+++` lines; the rest of the file is its markdown body. Every
//! front-matter field is optional and missing fields degrade to documented
//! defaults further down the pipeline, so loading never fails on absent
//! metadata, only on unreadable files or malformed TOML.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::course::CourseConfig;
use crate::util::file_stem;

/// Front-matter block delimiter line.
pub const FRONT_MATTER_DELIMITER: &str = "+++";

/// Page front-matter attributes.
///
/// All fields are optional; numbering fields are free-form display strings
/// and are never validated for uniqueness or order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub date: Option<String>,
    pub chapter: Option<String>,
    pub section: Option<String>,
    pub exercise_number: Option<String>,
    pub indepth_number: Option<String>,
    pub youtube_id: Option<String>,
}

/// A loaded course page.
///
/// Identified by its source-relative path as declared in `course.toml`;
/// immutable once loaded.
#[derive(Debug, Clone)]
pub struct Page {
    source: String,
    front_matter: FrontMatter,
    body: String,
}

impl Page {
    /// Creates a page from its parts.
    pub fn new(
        source: impl Into<String>,
        front_matter: FrontMatter,
        body: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            front_matter,
            body: body.into(),
        }
    }

    /// Returns the page identifier: its source-relative path.
    pub fn id(&self) -> &str {
        &self.source
    }

    /// Returns the front-matter attributes.
    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    /// Returns the markdown body without the front-matter block.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the display title, falling back to the filename without
    /// extension when front-matter declares none.
    pub fn title(&self) -> &str {
        self.front_matter
            .title
            .as_deref()
            .unwrap_or_else(|| file_stem(&self.source))
    }
}

/// Splits raw page text into its front-matter block and markdown body.
///
/// The block must start on the first line. Files without a block return
/// `(None, raw)` unchanged.
///
/// # Arguments
///
/// * `raw`: Full page file contents
///
/// # Returns
///
/// Front-matter TOML text (without delimiters) and the body after it
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw.strip_prefix(FRONT_MATTER_DELIMITER) else {
        return (None, raw);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return (None, raw);
    };

    // Closing delimiter must sit on its own line
    let mut search = 0;
    while let Some(found) = rest[search..].find(FRONT_MATTER_DELIMITER) {
        let at = search + found;
        let line_start = at == 0 || rest[..at].ends_with('\n');
        let after = &rest[at + FRONT_MATTER_DELIMITER.len()..];
        let line_end = after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n");

        if line_start && line_end {
            let block = &rest[..at];
            let body = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after);
            return (Some(block), body);
        }

        search = at + FRONT_MATTER_DELIMITER.len();
    }

    (None, raw)
}

/// Parses raw page text into a page record.
///
/// # Arguments
///
/// * `source`: Source-relative page path used as identifier
/// * `raw`: Full page file contents
///
/// # Errors
///
/// Returns error if the front-matter block is not valid TOML.
pub fn parse_page(source: &str, raw: &str) -> Result<Page> {
    let (block, body) = split_front_matter(raw);

    let front_matter = match block {
        Some(text) => toml::from_str(text)
            .with_context(|| format!("Invalid front-matter in page: {}", source))?,
        None => FrontMatter::default(),
    };

    Ok(Page::new(source, front_matter, body))
}

/// Loads a single page from the content directory.
///
/// # Errors
///
/// Returns error if the file cannot be read or its front-matter is
/// malformed.
pub fn load_page(content_dir: impl AsRef<Path>, source: &str) -> Result<Page> {
    let path = content_dir.as_ref().join(source);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read page file: {}", path.display()))?;
    parse_page(source, &raw)
}

/// Loads every page declared in the course, keyed by section id.
///
/// Page order within each section follows the declaration order in
/// `course.toml`.
///
/// # Errors
///
/// Returns error if any declared page file is missing or malformed.
pub fn load_pages(
    content_dir: impl AsRef<Path>,
    course: &CourseConfig,
) -> Result<HashMap<String, Vec<Page>>> {
    let content_dir = content_dir.as_ref();
    let mut lookup = HashMap::new();

    for section in &course.sections {
        let mut pages = Vec::with_capacity(section.pages.len());
        for source in &section.pages {
            let page = load_page(content_dir, source)
                .with_context(|| format!("Failed to load section {}", section.id))?;
            pages.push(page);
        }
        lookup.insert(section.id.clone(), pages);
    }

    Ok(lookup)
}

/// Finds markdown files in the content directory that no section declares.
///
/// Each sidebar page belongs to exactly one section, so undeclared files
/// are treated as drafts; the caller warns about them and moves on.
///
/// # Arguments
///
/// * `content_dir`: Course content directory
/// * `course`: Loaded course declaration
///
/// # Returns
///
/// Source-relative paths of undeclared markdown files, in walk order
pub fn undeclared_markdown(content_dir: impl AsRef<Path>, course: &CourseConfig) -> Vec<String> {
    let content_dir = content_dir.as_ref();
    let declared: HashSet<&str> = course
        .sections
        .iter()
        .flat_map(|s| s.pages.iter().map(String::as_str))
        .collect();

    let mut drafts = Vec::new();
    for entry in WalkDir::new(content_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(content_dir) else {
            continue;
        };
        let Some(source) = relative.to_str() else {
            continue;
        };
        let source = source.replace('\\', "/");

        if !declared.contains(source.as_str()) {
            drafts.push(source);
        }
    }

    drafts
}
