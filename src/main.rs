use anyhow::{Context, Result};
use lectern::{Category, Config, CourseConfig, MarkdownRenderer};
use std::fs;
use std::path::{Path, PathBuf};

/// Maps a source-relative page path to its location in the output tree.
fn output_path(output: &Path, source: &str) -> PathBuf {
    let mut path = output.to_path_buf();
    for part in lectern::html_path(source).split('/') {
        path.push(part);
    }
    path
}

/// Writes markup to disk, creating parent directories as needed.
fn write_page(path: &Path, markup: maud::Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page: {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let course = CourseConfig::load(config.course_file()).context("Failed to load course")?;
    course.validate().context("Invalid course declaration")?;

    let pages = lectern::load_pages(&config.content, &course).context("Failed to load pages")?;

    for draft in lectern::undeclared_markdown(&config.content, &course) {
        eprintln!("Warning: {} is not declared in any section, skipping", draft);
    }

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    lectern::write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let section_refs = course.section_refs();
    let renderer = MarkdownRenderer::new();

    // Landing page: no entry is active
    let sidebar = lectern::build_sidebar(&section_refs, &pages, "index", &config.root_url);
    let landing = lectern::pages::index::generate(&course, &sidebar, &config.root_url);

    let index_path = config.output.join("index.html");
    write_page(&index_path, landing)?;
    println!("Generated: {}", index_path.display());

    let mut generated_count = 0;
    let mut exercise_count = 0;
    let mut indepth_count = 0;

    for section in &course.sections {
        let Some(section_pages) = pages.get(&section.id) else {
            continue;
        };

        for page in section_pages {
            // The sidebar is recomputed per render with this page active
            let sidebar = lectern::build_sidebar(&section_refs, &pages, page.id(), &config.root_url);

            let html =
                lectern::pages::content::generate(page, &course, &sidebar, &renderer, &config.root_url)
                    .with_context(|| format!("Failed to generate page: {}", page.id()))?;

            write_page(&output_path(&config.output, page.id()), html)?;

            match Category::of(page.front_matter()) {
                Category::Exercise => exercise_count += 1,
                Category::Indepth => indepth_count += 1,
                Category::Lecture => {}
            }
            generated_count += 1;
        }
    }

    println!(
        "Generated {} content pages ({} lectures, {} exercises, {} in-depth)",
        generated_count,
        generated_count - exercise_count - indepth_count,
        exercise_count,
        indepth_count
    );

    if !config.no_open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
