//! Content page generation for lectures, exercises, and in-depth pages

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::components::header::page_header;
use crate::components::layout::page_wrapper;
use crate::components::sidebar::{self, SidebarSection};
use crate::content::Page;
use crate::course::CourseConfig;
use crate::markdown::MarkdownRenderer;
use crate::util::join_url;

/// Generates the HTML document for one content page
///
/// Renders the markdown body and wraps it in the shared chrome: head
/// metadata, the sidebar built for this render pass (the entry for this
/// page is the active one), the page header, and the footer. The display
/// label shown in the header is taken from the page's own sidebar entry so
/// header and navigation always agree.
///
/// # Arguments
///
/// * `page`: The page to render
/// * `course`: Loaded course declaration
/// * `sections`: Sidebar structure built with this page as current
/// * `renderer`: Shared markdown renderer
/// * `root_url`: URL prefix for link construction
///
/// # Returns
///
/// Complete HTML markup for the page
///
/// # Errors
///
/// Returns error if markdown rendering fails
pub fn generate(
    page: &Page,
    course: &CourseConfig,
    sections: &[SidebarSection],
    renderer: &MarkdownRenderer<'_>,
    root_url: &str,
) -> Result<Markup> {
    let body_html = renderer
        .render(page.body())
        .with_context(|| format!("Failed to render markdown for page: {}", page.id()))?;

    let display_label = sections
        .iter()
        .flat_map(|s| s.entries.iter())
        .find(|e| e.active)
        .map(|e| e.display_label.clone())
        .unwrap_or_default();

    let stylesheets = vec![
        join_url(root_url, "assets/page.css"),
        join_url(root_url, "assets/markdown.css"),
    ];

    let title = format!("{} - {}", page.title(), course.course.name);

    Ok(page_wrapper(
        &title,
        page.front_matter().description.as_deref(),
        course.course.institution.as_deref(),
        &stylesheets,
        html! {
            (sidebar::render(sections, &course.course.name, root_url))
            main class="page-content" {
                (page_header(page, &display_label))
                article class="markdown-body" {
                    (PreEscaped(body_html))
                }
            }
        },
    ))
}
