//! Static site generator for markdown course notes.

mod assets;
pub mod avatar;
pub mod components;
mod config;
mod content;
mod course;
mod markdown;
pub mod pages;
mod util;

pub use assets::write_css_assets;
pub use components::sidebar::{Category, SidebarEntry, SidebarSection, build_sidebar};
pub use config::{COURSE_FILE, Config};
pub use content::{
    FRONT_MATTER_DELIMITER, FrontMatter, Page, load_page, load_pages, parse_page,
    split_front_matter, undeclared_markdown,
};
pub use course::{CourseConfig, CourseInfo, SectionDecl, Track};
pub use markdown::MarkdownRenderer;
pub use util::{file_stem, html_path, join_url, tag_class};
