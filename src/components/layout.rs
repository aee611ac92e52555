//! Page layout wrapper component

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use maud::{DOCTYPE, Markup, html};

const FAVICON_SVG: &str = include_str!("../../assets/favicon.svg");

/// Returns the favicon as a base64 data URI.
///
/// Embedding the icon keeps every generated page self-contained; no extra
/// asset file or request is needed.
fn favicon_href() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(FAVICON_SVG))
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// both page types. The wrapper handles viewport configuration, charset,
/// favicon, and stylesheet loading while the caller provides page-specific
/// body content.
///
/// # Arguments
///
/// * `title`: Full page title text (callers append any course suffix)
/// * `description`: Optional meta description (omitted when absent)
/// * `institution`: Optional institution line for the footer
/// * `stylesheets`: CSS paths to include, already resolved against the root URL
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    description: Option<&str>,
    institution: Option<&str>,
    stylesheets: &[String],
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(text) = description {
                    meta name="description" content=(text);
                }
                link rel="icon" href=(favicon_href());
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer(institution))
            }
        }
    }
}

/// Renders the shared page footer
///
/// # Arguments
///
/// * `institution`: Optional institution line shown before the generator credit
pub fn footer(institution: Option<&str>) -> Markup {
    html! {
        footer {
            p {
                @if let Some(name) = institution {
                    span class="footer-institution" { (name) }
                    " · "
                }
                "Built with "
                a href="https://github.com/lectern-site/lectern" target="_blank" { "lectern" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_structure() {
        // Arrange
        let stylesheets = vec!["assets/page.css".to_string()];

        // Act
        let markup = page_wrapper(
            "Floating point - Scientific Computing",
            Some("Why 0.1 + 0.2 != 0.3"),
            Some("Example University"),
            &stylesheets,
            html! { p { "content" } },
        )
        .into_string();

        // Assert
        assert!(markup.starts_with("<!DOCTYPE html>"), "Should have doctype");
        assert!(
            markup.contains("<title>Floating point - Scientific Computing</title>"),
            "Title should carry the course suffix: {}",
            markup
        );
        assert!(
            markup.contains("meta name=\"description\" content=\"Why 0.1 + 0.2 != 0.3\""),
            "Description meta should be present"
        );
        assert!(
            markup.contains("link rel=\"stylesheet\" href=\"assets/page.css\""),
            "Stylesheet link should be present"
        );
        assert!(
            markup.contains("data:image/svg+xml;base64,"),
            "Favicon should be an embedded data URI"
        );
        assert!(markup.contains("content"), "Body content should be wrapped");
    }

    #[test]
    fn test_page_wrapper_omits_absent_description() {
        // Act
        let markup = page_wrapper("Page", None, None, &[], html! { p { "x" } }).into_string();

        // Assert
        assert!(
            !markup.contains("meta name=\"description\""),
            "Missing description must omit the meta tag entirely"
        );
    }

    #[test]
    fn test_footer_with_institution() {
        // Act
        let markup = footer(Some("Example University")).into_string();

        // Assert
        assert!(markup.contains("Example University"));
        assert!(markup.contains("lectern"), "Should credit the generator");
    }

    #[test]
    fn test_footer_without_institution() {
        // Act
        let markup = footer(None).into_string();

        // Assert
        assert!(!markup.contains("footer-institution"));
        assert!(markup.contains("lectern"));
    }
}
