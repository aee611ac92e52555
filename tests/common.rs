//! Shared test utilities for integration tests.
//!
//! Provides helper functions for creating temporary course content
//! directories used across multiple test files.

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary course directory.
///
/// # Errors
///
/// Returns error if the directory cannot be created
pub fn create_course_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes a file into the course directory, creating parents as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(course_dir: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = course_dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Creates a realistic sample course: two sections covering lectures, an
/// exercise, and an in-depth page, with varied front-matter coverage.
///
/// # Returns
///
/// Temporary directory containing `course.toml` and all page files
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn create_sample_course() -> Result<TempDir> {
    let dir = create_course_dir()?;
    let path = dir.path();

    write_file(
        path,
        "course.toml",
        r#"[course]
name = "Scientific Computing"
subtitle = "From floating point to MPI"
institution = "Example University"
authors = ["Ada Lovelace", "Seymour Cray"]

[[track]]
id = "bsc"
name = "Bachelor"

[[section]]
id = "mod1"
name = "Module 1: Foundations"
pages = ["mod1/intro.md", "mod1/git.md", "mod1/debugging.md"]

[[section]]
id = "mod2"
name = "Module 2: Numerics"
pages = ["mod2/floats.md", "mod2/summation.md"]
"#,
    )?;

    write_file(
        path,
        "mod1/intro.md",
        r#"+++
title = "Welcome"
description = "Course logistics and overview"
chapter = "1"
section = "1"
date = "2026-04-01"
+++
# Welcome

This course covers the practice of scientific computing.
"#,
    )?;

    write_file(
        path,
        "mod1/git.md",
        r#"+++
title = "Version Control"
chapter = "1"
section = "2"
tags = ["git", "reproducibility"]
youtube_id = "abc123"
+++
# Version Control

```bash
git init
```
"#,
    )?;

    write_file(
        path,
        "mod1/debugging.md",
        r#"+++
title = "Debugging"
exercise_number = "1"
tags = ["tools"]
+++
Find the bug in the linked list below.

```c
node->next = node;
```
"#,
    )?;

    write_file(
        path,
        "mod2/floats.md",
        r#"+++
title = "Floating Point"
chapter = "2"
section = "1"
tags = ["floating point"]
+++
# Floating Point

Why `0.1 + 0.2 != 0.3`.
"#,
    )?;

    // Deliberately bare: exercises the filename-derived title fallback
    write_file(
        path,
        "mod2/summation.md",
        r#"+++
indepth_number = "1"
+++
Kahan summation keeps a running compensation term.
"#,
    )?;

    Ok(dir)
}
