//! Plain text rendering of a page, used by `flowboard page`.

use ratatui::text::Line;

use crate::state::{PageState, Sidebar, Theme};

use super::components;
use super::pages::{self, PageBody, PageContext};
use super::plain_text;

/// Layout pieces to include around the page.
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub width: usize,
    /// Sidebar and top bar, when the route uses the app layout.
    pub chrome: Option<Sidebar>,
    pub theme: Theme,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            width: 80,
            chrome: None,
            theme: Theme::default(),
        }
    }
}

/// A page flattened to text.
#[derive(Debug, Clone)]
pub struct TextPage {
    pub title: String,
    pub text: String,
}

pub fn render_page(ctx: &PageContext<'_>, page: &PageState, options: TextOptions) -> TextPage {
    let palette = &ctx.palette;
    let mut sections: Vec<String> = Vec::new();

    if let Some(sidebar) = options.chrome.filter(|_| page.route().uses_app_layout()) {
        sections.push(plain_text(&[components::top_bar(
            ctx.data,
            options.theme,
            options.width,
            palette,
        )]));
        sections.push(plain_text(&components::sidebar(
            ctx.data,
            &page.route(),
            sidebar,
            palette,
        )));
    }

    let rendered = pages::render(ctx, page, options.width);
    if !rendered.header.is_empty() {
        sections.push(plain_text(&rendered.header));
    }
    match rendered.body {
        PageBody::Lines(lines) => sections.push(plain_text(&lines)),
        PageBody::Columns(columns) => {
            for column in columns {
                let mut lines: Vec<Line<'static>> = vec![column.title];
                lines.extend(column.lines);
                sections.push(plain_text(&lines));
            }
        }
    }

    if let Some(task) = page
        .modal()
        .and_then(|modal| modal.task_id())
        .and_then(|id| ctx.data.task(id))
    {
        sections.push("-".repeat(options.width.min(40)));
        sections.push(plain_text(&components::task_detail(task, palette)));
    }

    let mut text = sections
        .into_iter()
        .map(|section| section.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n\n");
    text.push('\n');
    TextPage {
        title: rendered.title,
        text,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dataset::Dataset;
    use crate::query::DueDateReference;
    use crate::route::Route;
    use crate::ui::theme::Palette;

    fn context(data: &Dataset) -> PageContext<'_> {
        PageContext {
            data,
            palette: Palette::for_theme(Theme::Dark),
            due_reference: DueDateReference::legacy(),
            now: NaiveDate::from_ymd_opt(2026, 2, 18)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn chrome_only_wraps_app_routes() {
        let data = Dataset::builtin();
        let ctx = context(&data);
        let options = TextOptions {
            chrome: Some(Sidebar::default()),
            ..TextOptions::default()
        };

        let dashboard = render_page(&ctx, &PageState::for_route(&Route::Dashboard), options).text;
        assert!(dashboard.contains("Search tasks, projects..."));
        assert!(dashboard.contains("Good evening, Fisnik"));

        let landing = render_page(&ctx, &PageState::for_route(&Route::Landing), options).text;
        assert!(!landing.contains("Search tasks, projects..."));
        assert!(landing.contains("Everything your team needs"));
    }

    #[test]
    fn open_modal_is_appended() {
        let data = Dataset::builtin();
        let ctx = context(&data);
        let mut page = PageState::for_route(&Route::Project("proj-1".to_string()));
        if let (Some(modal), Some(task)) = (page.modal_mut(), data.task("task-1")) {
            modal.open(task);
        }
        let text = render_page(&ctx, &page, TextOptions::default()).text;
        assert!(text.contains("Comments (2)"));
        assert!(text.contains("Write a comment..."));
    }
}
