//! Page header component

use maud::{Markup, html};

use crate::content::Page;

/// Renders the content page header
///
/// Displays the display label and title prominently, followed by a meta
/// row with the date, tag badges, and a link to the recorded lecture when
/// a YouTube id is present. Every element degrades gracefully: absent
/// fields are simply not rendered.
///
/// # Arguments
///
/// * `page`: The page being rendered
/// * `display_label`: Pre-computed label ("Exercise 3:", "1.4", or empty)
///
/// # Returns
///
/// Page header markup
pub fn page_header(page: &Page, display_label: &str) -> Markup {
    let front_matter = page.front_matter();
    let has_meta = front_matter.date.is_some()
        || !front_matter.tags.is_empty()
        || front_matter.youtube_id.is_some();

    html! {
        header class="page-header" {
            h1 class="page-title" {
                @if !display_label.is_empty() {
                    span class="page-label" { (display_label) }
                    " "
                }
                (page.title())
            }
            @if has_meta {
                div class="page-meta" {
                    @if let Some(date) = &front_matter.date {
                        span class="page-date" {
                            i class="ph ph-calendar-blank" {}
                            " " (date)
                        }
                    }
                    @for tag in &front_matter.tags {
                        span class="tag-badge" { (tag) }
                    }
                    @if let Some(id) = &front_matter.youtube_id {
                        a class="video-link"
                            href=(format!("https://www.youtube.com/watch?v={}", id))
                            target="_blank" {
                            i class="ph ph-video-camera" {}
                            " Watch lecture video"
                        }
                    }
                }
            }
        }
    }
}
