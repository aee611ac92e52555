//! Course navigation sidebar
//!
//! The sidebar is a derived, read-only view: given the ordered section
//! declarations and the pages loaded per section, `build_sidebar` projects
//! one render record per page and marks the page currently being rendered
//! active. The projection is pure and recomputed for every page render; no
//! state is shared between renders.

use maud::{Markup, html};
use std::collections::HashMap;

use crate::components::icons::{category_icon, video_icon};
use crate::content::{FrontMatter, Page};
use crate::util::{html_path, join_url, tag_class};

/// Derived page classification.
///
/// A page is an exercise when `exercise_number` is present (taking
/// precedence over any `indepth_number` also set), an in-depth supplement
/// when only `indepth_number` is present, and a lecture otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lecture,
    Exercise,
    Indepth,
}

impl Category {
    /// Derives the category from page front-matter.
    pub fn of(front_matter: &FrontMatter) -> Self {
        if front_matter.exercise_number.is_some() {
            Category::Exercise
        } else if front_matter.indepth_number.is_some() {
            Category::Indepth
        } else {
            Category::Lecture
        }
    }

    /// Returns the category's CSS/display token.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lecture => "lecture",
            Category::Exercise => "exercise",
            Category::Indepth => "indepth",
        }
    }
}

/// Per-page navigation render record.
#[derive(Debug, Clone)]
pub struct SidebarEntry {
    pub href: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub active: bool,
    pub tag_classes: Vec<String>,
    pub display_label: String,
    pub has_video: bool,
}

/// A section of the navigation: display name plus its page entries in
/// declaration order.
#[derive(Debug, Clone)]
pub struct SidebarSection {
    pub id: String,
    pub name: String,
    pub entries: Vec<SidebarEntry>,
}

/// Builds the navigation structure for one page render.
///
/// # Arguments
///
/// * `sections`: Ordered (id, display name) pairs from the course file
/// * `page_lookup`: Pages per section id, in declaration order
/// * `current_page`: Identifier of the page being rendered
/// * `root_url`: URL prefix for link construction
///
/// # Returns
///
/// Ordered sections of per-page render records. Exactly the entry whose
/// page identifier equals `current_page` is marked active. Sections with
/// no loaded pages produce an empty entry list rather than being dropped.
pub fn build_sidebar(
    sections: &[(&str, &str)],
    page_lookup: &HashMap<String, Vec<Page>>,
    current_page: &str,
    root_url: &str,
) -> Vec<SidebarSection> {
    sections
        .iter()
        .map(|(id, name)| SidebarSection {
            id: (*id).to_string(),
            name: (*name).to_string(),
            entries: page_lookup
                .get(*id)
                .map(|pages| {
                    pages
                        .iter()
                        .map(|page| build_entry(page, current_page, root_url))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

fn build_entry(page: &Page, current_page: &str, root_url: &str) -> SidebarEntry {
    let front_matter = page.front_matter();
    let category = Category::of(front_matter);

    SidebarEntry {
        href: join_url(root_url, &html_path(page.id())),
        title: page.title().to_string(),
        description: front_matter.description.clone(),
        category,
        active: page.id() == current_page,
        tag_classes: front_matter.tags.iter().map(|t| tag_class(t)).collect(),
        display_label: display_label(front_matter, category),
        has_video: front_matter.youtube_id.is_some(),
    }
}

/// Formats the label shown before an entry title.
///
/// Exercises and in-depth pages carry their declared number; lectures get
/// a synthesized "chapter.section" string only when both fields are
/// present, and an empty label otherwise. Numbers are display-only and
/// pass through verbatim.
fn display_label(front_matter: &FrontMatter, category: Category) -> String {
    match category {
        Category::Exercise => front_matter
            .exercise_number
            .as_deref()
            .map(|n| format!("Exercise {}:", n))
            .unwrap_or_default(),
        Category::Indepth => front_matter
            .indepth_number
            .as_deref()
            .map(|n| format!("In-depth {}:", n))
            .unwrap_or_default(),
        Category::Lecture => match (&front_matter.chapter, &front_matter.section) {
            (Some(chapter), Some(section)) => format!("{}.{}", chapter, section),
            _ => String::new(),
        },
    }
}

fn entry_classes(entry: &SidebarEntry) -> String {
    let mut classes = format!("sidebar-entry entry-{}", entry.category.as_str());
    if entry.active {
        classes.push_str(" entry-active");
    }
    for tag in &entry.tag_classes {
        classes.push(' ');
        classes.push_str(tag);
    }
    classes
}

/// Renders the sidebar markup.
///
/// Emits the collapse toggle (a CSS-only checkbox, hidden on wide
/// viewports) followed by the navigation itself. The description, when
/// present, becomes the entry tooltip; absent descriptions omit the
/// attribute entirely.
///
/// # Arguments
///
/// * `sections`: Built navigation structure
/// * `course_name`: Course name linked back to the landing page
/// * `root_url`: URL prefix for the landing page link
///
/// # Returns
///
/// Sidebar navigation markup
pub fn render(sections: &[SidebarSection], course_name: &str, root_url: &str) -> Markup {
    html! {
        input id="sidebar-toggle" class="sidebar-toggle" type="checkbox";
        label for="sidebar-toggle" class="sidebar-toggle-label" {
            i class="ph ph-list" {}
        }
        nav class="sidebar" {
            a class="sidebar-course" href=(join_url(root_url, "index.html")) { (course_name) }
            @for section in sections {
                div class="sidebar-section" {
                    h3 class="sidebar-section-name" { (section.name) }
                    ul class="sidebar-pages" {
                        @for entry in &section.entries {
                            li {
                                a href=(entry.href) class=(entry_classes(entry)) title=[entry.description.as_deref()] {
                                    (category_icon(entry.category))
                                    @if !entry.display_label.is_empty() {
                                        span class="entry-label" { (entry.display_label) }
                                        " "
                                    }
                                    span class="entry-title" { (entry.title) }
                                    @if entry.has_video {
                                        (video_icon())
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
