//! Terminal presentation: components, pages, the interactive app and a plain
//! text renderer for non-interactive output.

pub mod app;
pub mod components;
pub mod pages;
pub mod text;
pub mod theme;
pub mod view;

use ratatui::text::Line;

pub use app::{run, AppOptions};

/// Unstyled contents of `lines`, one row per line, trailing blanks trimmed.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| &*span.content)
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
