//! Utility functions for lectern

/// Extracts filename without extension from a source path.
///
/// Used as the fallback page title when front-matter declares none.
/// Works on source-relative paths with forward slashes.
///
/// # Arguments
///
/// * `path`: Source-relative page path (e.g. "module1/intro.md")
///
/// # Returns
///
/// Filename component with its last extension removed
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Converts a tag to its CSS class token.
///
/// Tags may contain spaces ("floating point"); CSS class tokens may not,
/// so spaces become underscores and the result is prefixed with `tag_`.
///
/// # Arguments
///
/// * `tag`: Tag string from page front-matter
///
/// # Returns
///
/// CSS class token like "tag_floating_point"
pub fn tag_class(tag: &str) -> String {
    format!("tag_{}", tag.replace(' ', "_"))
}

/// Joins the site root URL prefix with a site-relative path.
///
/// An empty prefix yields the path unchanged, so sites served from the
/// domain root keep plain relative links. Trailing slashes on the prefix
/// and leading slashes on the path are collapsed to a single separator.
///
/// # Arguments
///
/// * `root`: Root URL prefix (e.g. "/scicomp" or "")
/// * `path`: Site-relative path (e.g. "module1/intro.html")
///
/// # Returns
///
/// Joined URL string
pub fn join_url(root: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if root.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", root.trim_end_matches('/'), path)
}

/// Maps a markdown source path to its generated HTML path.
///
/// Source paths keep their directory structure in the output tree; only
/// the `.md` extension is swapped. Non-markdown sources get `.html`
/// appended so the mapping never collides with the source name.
///
/// # Arguments
///
/// * `source`: Source-relative page path
///
/// # Returns
///
/// Output-relative HTML path
pub fn html_path(source: &str) -> String {
    match source.strip_suffix(".md") {
        Some(base) => format!("{}.html", base),
        None => format!("{}.html", source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_plain() {
        assert_eq!(file_stem("intro.md"), "intro");
        assert_eq!(file_stem("floating-point.md"), "floating-point");
    }

    #[test]
    fn test_file_stem_nested() {
        assert_eq!(file_stem("module1/intro.md"), "intro");
        assert_eq!(file_stem("a/b/c/notes.md"), "notes");
    }

    #[test]
    fn test_file_stem_no_extension() {
        assert_eq!(file_stem("README"), "README");
        assert_eq!(file_stem("docs/README"), "README");
    }

    #[test]
    fn test_file_stem_hidden_file() {
        // A leading dot is not an extension separator
        assert_eq!(file_stem(".gitignore"), ".gitignore");
    }

    #[test]
    fn test_tag_class_simple() {
        assert_eq!(tag_class("mpi"), "tag_mpi");
    }

    #[test]
    fn test_tag_class_spaces_become_underscores() {
        assert_eq!(tag_class("a b"), "tag_a_b");
        assert_eq!(tag_class("floating point"), "tag_floating_point");
        assert_eq!(tag_class("one two three"), "tag_one_two_three");
    }

    #[test]
    fn test_join_url_empty_root() {
        assert_eq!(join_url("", "index.html"), "index.html");
        assert_eq!(join_url("", "module1/intro.html"), "module1/intro.html");
    }

    #[test]
    fn test_join_url_with_prefix() {
        assert_eq!(join_url("/scicomp", "index.html"), "/scicomp/index.html");
        assert_eq!(
            join_url("/scicomp", "module1/intro.html"),
            "/scicomp/module1/intro.html"
        );
    }

    #[test]
    fn test_join_url_collapses_slashes() {
        assert_eq!(join_url("/scicomp/", "index.html"), "/scicomp/index.html");
        assert_eq!(join_url("/scicomp", "/index.html"), "/scicomp/index.html");
        assert_eq!(join_url("/scicomp/", "/index.html"), "/scicomp/index.html");
    }

    #[test]
    fn test_join_url_full_origin_prefix() {
        assert_eq!(
            join_url("https://example.edu/course", "assets/page.css"),
            "https://example.edu/course/assets/page.css"
        );
    }

    #[test]
    fn test_html_path_markdown() {
        assert_eq!(html_path("intro.md"), "intro.html");
        assert_eq!(html_path("module1/intro.md"), "module1/intro.html");
    }

    #[test]
    fn test_html_path_non_markdown() {
        assert_eq!(html_path("notes.txt"), "notes.txt.html");
        assert_eq!(html_path("README"), "README.html");
    }
}
