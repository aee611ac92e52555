//! Avatar generation for course authors
//!
//! Deterministic SVG avatars: a pastel background with translucent discs
//! placed by hashing the author name, so the same name always renders the
//! same avatar without any image assets.

use maud::{Markup, PreEscaped, html};

const COLORS: &[&str] = &[
    "#dc8a78", "#ea76cb", "#cba6f7", "#b4befe", "#8caaee", "#74c7ec", "#81c8be", "#94e2d5",
    "#a6d189", "#c6d57e", "#e5c890", "#ef9f76", "#f5c2e7", "#99d1db", "#b5ead7", "#fab387",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Generate SVG avatar from an author name
pub fn generate_svg(name: &str, size: u32) -> String {
    let h = hash(name);

    // Non-overlapping bit extraction keeps the three discs independent
    let bg = COLORS[(h % COLORS.len() as u64) as usize];
    let fg = COLORS[((h >> 4) % COLORS.len() as u64) as usize];

    let cx1 = 20 + ((h >> 8) % 60) as u32;
    let cy1 = 20 + ((h >> 16) % 60) as u32;
    let r1 = 18 + ((h >> 24) % 22) as u32;

    let cx2 = 20 + ((h >> 32) % 60) as u32;
    let cy2 = 20 + ((h >> 40) % 60) as u32;
    let r2 = 12 + ((h >> 48) % 18) as u32;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><rect width="100" height="100" fill="{bg}"/><circle cx="{cx1}" cy="{cy1}" r="{r1}" fill="white" opacity="0.55"/><circle cx="{cx2}" cy="{cy2}" r="{r2}" fill="{fg}" opacity="0.7"/></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" title=(name) { (PreEscaped(generate_svg(name, size))) } }
}
