//! Course landing page generation

use maud::{Markup, html};

use crate::avatar;
use crate::components::icons::{category_icon, video_icon};
use crate::components::layout::page_wrapper;
use crate::components::sidebar::{self, SidebarSection};
use crate::course::CourseConfig;
use crate::util::join_url;

/// Avatar size in pixels for the author list.
const AVATAR_SIZE: u32 = 48;

/// Generates the course landing page
///
/// Shows the course masthead (name, subtitle, institution), the author
/// list with generated avatars, track badges, and a section overview that
/// mirrors the sidebar ordering. The sidebar itself is rendered too, with
/// no entry active: the landing page is not a course page.
///
/// # Arguments
///
/// * `course`: Loaded course declaration
/// * `sections`: Sidebar structure built with no current page
/// * `root_url`: URL prefix for link construction
///
/// # Returns
///
/// Complete HTML markup for the landing page
pub fn generate(course: &CourseConfig, sections: &[SidebarSection], root_url: &str) -> Markup {
    let info = &course.course;
    let stylesheets = vec![join_url(root_url, "assets/index.css")];

    page_wrapper(
        &info.name,
        info.subtitle.as_deref(),
        info.institution.as_deref(),
        &stylesheets,
        html! {
            (sidebar::render(sections, &info.name, root_url))
            main class="course-landing" {
                header class="course-masthead" {
                    h1 class="course-name" { (info.name) }
                    @if let Some(subtitle) = &info.subtitle {
                        p class="course-subtitle" { (subtitle) }
                    }
                    @if let Some(institution) = &info.institution {
                        p class="course-institution" { (institution) }
                    }
                }

                @if !info.authors.is_empty() {
                    section class="course-authors" {
                        @for author in &info.authors {
                            div class="author-card" {
                                (avatar::render(author, AVATAR_SIZE))
                                span class="author-name" { (author) }
                            }
                        }
                    }
                }

                @if !course.tracks.is_empty() {
                    section class="course-tracks" {
                        @for track in &course.tracks {
                            span class="track-badge" data-track=(track.id) { (track.name) }
                        }
                    }
                }

                section class="course-overview" {
                    @for section in sections {
                        div class="overview-section" {
                            h2 class="overview-section-name" { (section.name) }
                            @if section.entries.is_empty() {
                                p class="empty-state" { "No pages in this section yet" }
                            } @else {
                                ul class="overview-pages" {
                                    @for entry in &section.entries {
                                        li {
                                            a href=(entry.href) class=(format!("overview-entry entry-{}", entry.category.as_str())) {
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
                                            @if let Some(text) = &entry.description {
                                                p class="entry-description" { (text) }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
