//! Page category icon rendering

use maud::{Markup, html};

use crate::components::sidebar::Category;

/// Renders the sidebar icon for a page category
///
/// Generates Phosphor icon HTML with a CSS modifier class so each category
/// gets its own accent color in the navigation.
///
/// # Arguments
///
/// * `category`: Derived page category
///
/// # Returns
///
/// Icon markup with Phosphor icon class and color modifier
pub fn category_icon(category: Category) -> Markup {
    let (icon_class, icon_modifier) = icon_classes(category);

    html! {
        span class="icon-box" {
            i class=(format!("{} {}", icon_class, icon_modifier)) {}
        }
    }
}

/// Returns Phosphor icon classes for a page category
///
/// # Arguments
///
/// * `category`: Derived page category
///
/// # Returns
///
/// Phosphor icon class name and CSS modifier class for color styling
pub fn icon_classes(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Lecture => ("ph ph-book-open", "icon-lecture"),
        Category::Exercise => ("ph ph-pencil-simple", "icon-exercise"),
        Category::Indepth => ("ph ph-magnifying-glass", "icon-indepth"),
    }
}

/// Renders the video marker icon for pages with a recorded lecture
pub fn video_icon() -> Markup {
    html! {
        i class="ph ph-video-camera icon-video" {}
    }
}
