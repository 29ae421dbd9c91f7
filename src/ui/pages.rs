//! Page containers: wire query results and page state into components.

use chrono::{NaiveDateTime, Timelike};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::dataset::Dataset;
use crate::model::Task;
use crate::query::{self, DueDateReference};
use crate::state::{DashboardState, PageState, ProjectDetailState, ViewButton, ViewMode};

use super::components::{self, BRAND};
use super::theme::Palette;

pub const PROJECT_NOT_FOUND: &str = "Project not found.";
const NO_TASKS: &str = "No tasks";

const FEATURES: [(&str, &str); 4] = [
    (
        "Real-time collaboration",
        "Work together seamlessly with live cursors, instant updates, and threaded comments.",
    ),
    (
        "Flexible views",
        "Switch between list, board, and calendar views to match how you think.",
    ),
    (
        "Integrated notes & wiki",
        "Keep documentation alongside your tasks. No more context-switching between tools.",
    ),
    (
        "Simple subscriptions",
        "Transparent pricing that scales with your team. No per-seat surprises.",
    ),
];

/// Inputs shared by every page render.
pub struct PageContext<'a> {
    pub data: &'a Dataset,
    pub palette: Palette,
    pub due_reference: DueDateReference,
    /// Local wall-clock time; drives the greeting and the clock-based due date.
    pub now: NaiveDateTime,
}

/// A titled column of the board view.
pub struct Column {
    pub title: Line<'static>,
    pub lines: Vec<Line<'static>>,
    pub selected_line: Option<usize>,
}

pub enum PageBody {
    Lines(Vec<Line<'static>>),
    Columns(Vec<Column>),
}

pub struct Page {
    pub title: String,
    pub header: Vec<Line<'static>>,
    pub body: PageBody,
    /// Body line holding the cursor, for scrolling.
    pub selected_line: Option<usize>,
}

impl Page {
    fn lines(title: impl Into<String>, header: Vec<Line<'static>>, body: Vec<Line<'static>>) -> Self {
        Self {
            title: title.into(),
            header,
            body: PageBody::Lines(body),
            selected_line: None,
        }
    }
}

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Task-bearing controls of a page in cursor order.
///
/// Project pages use board order (todo, in progress, done) in both views,
/// so switching views keeps the cursor on the same task.
pub fn page_tasks<'a>(data: &'a Dataset, page: &PageState) -> Vec<&'a Task> {
    match page {
        PageState::Dashboard(_) => query::todays_tasks_for_current_user(data),
        PageState::Project(state) => query::board_columns(data, &state.project_id)
            .into_iter()
            .flat_map(|column| column.tasks)
            .collect(),
        PageState::Landing | PageState::SignIn | PageState::SignUp => Vec::new(),
    }
}

pub fn render(ctx: &PageContext<'_>, page: &PageState, width: usize) -> Page {
    match page {
        PageState::Landing => landing(ctx),
        PageState::Dashboard(state) => dashboard(ctx, state, width),
        PageState::Project(state) => project_detail(ctx, state, width),
        PageState::SignIn => placeholder(ctx, "Log in", "Sign in is not available in this demo."),
        PageState::SignUp => placeholder(
            ctx,
            "Start for free",
            "Sign up is not available in this demo.",
        ),
    }
}

fn landing(ctx: &PageContext<'_>) -> Page {
    let palette = &ctx.palette;
    let accent = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let mut body = vec![
        Line::from(Span::styled(" Now in public beta → ", palette.muted_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Focus on what matters.",
            palette.heading().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            "Task management, projects, and team wikis in one beautiful workspace.",
            palette.muted_style(),
        )),
        Line::from(Span::styled(
            "Built for small teams who move fast.",
            palette.muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Start for free → ]", accent),
            Span::raw("   "),
            Span::styled("See how it works", palette.muted_style()),
        ]),
        Line::from(""),
        components::section_header("Everything your team needs", palette),
        Line::from(Span::styled(
            "Simple tools that work together beautifully, so you can stay focused on shipping.",
            palette.muted_style(),
        )),
        Line::from(""),
    ];
    for (title, description) in FEATURES {
        body.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(palette.primary)),
            Span::styled(title, palette.heading()),
        ]));
        body.push(Line::from(Span::styled(
            format!("  {description}"),
            palette.muted_style(),
        )));
    }
    body.push(Line::from(""));
    body.push(components::section_header("Ready to get started?", palette));
    body.push(Line::from(Span::styled(
        format!("Join thousands of teams already shipping faster with {BRAND}."),
        palette.muted_style(),
    )));
    body.push(Line::from(Span::styled("[ Create your workspace → ]", accent)));
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        format!("⚡ {BRAND}  Task management for teams who value simplicity and speed."),
        palette.muted_style(),
    )));
    body.push(Line::from(Span::styled(
        format!("© 2026 {BRAND}. All rights reserved."),
        Style::default().fg(palette.muted_dark),
    )));

    let header = vec![Line::from(vec![
        Span::styled(format!("⚡ {BRAND}"), accent),
        Span::raw("    "),
        Span::styled("Features  Pricing  Log in", palette.muted_style()),
    ])];
    Page::lines(BRAND, header, body)
}

fn placeholder(ctx: &PageContext<'_>, title: &str, message: &str) -> Page {
    let palette = &ctx.palette;
    Page::lines(
        title,
        vec![components::section_header(title, palette)],
        vec![Line::from(Span::styled(message.to_string(), palette.muted_style()))],
    )
}

fn dashboard(ctx: &PageContext<'_>, state: &DashboardState, width: usize) -> Page {
    let palette = &ctx.palette;
    let data = ctx.data;
    let mine = query::todays_tasks_for_current_user(data);
    let stats = query::dashboard_stats(data, ctx.due_reference, ctx.now.date());

    let header = vec![
        Line::from(Span::styled(
            format!("{}, {}", greeting(ctx.now.hour()), data.current_user().name),
            palette.heading(),
        )),
        Line::from(Span::styled(
            format!("You have {} tasks to focus on today.", mine.len()),
            palette.muted_style(),
        )),
    ];

    let due_label = if stats.reference_fixed {
        format!(
            "Tasks due today ({})",
            components::format_due_short(stats.reference_date)
        )
    } else {
        "Tasks due today".to_string()
    };
    let cards = [
        components::stat_card(&due_label, stats.due_today, palette),
        components::stat_card("In progress", stats.in_progress, palette),
        components::stat_card("Active projects", stats.active_projects, palette),
    ];
    let mut body = Vec::new();
    for row in 0..2 {
        let mut spans = Vec::new();
        for card in &cards {
            let mut cell = card[row].clone();
            let used: usize = cell.spans.iter().map(|s| s.content.chars().count()).sum();
            cell.spans.push(Span::raw(" ".repeat(26usize.saturating_sub(used))));
            spans.extend(cell.spans);
        }
        body.push(Line::from(spans));
    }
    body.push(Line::from(""));

    body.push(Line::from(vec![
        Span::styled("My tasks", palette.heading()),
        Span::styled("   + Add task", palette.muted_style()),
    ]));
    let mut selected_line = None;
    for (idx, task) in mine.iter().enumerate() {
        let selected = idx == state.cursor.index();
        if selected {
            selected_line = Some(body.len());
        }
        body.push(components::task_row(task, selected, width, palette));
    }
    body.push(Line::from(""));

    body.push(components::section_header("Recent projects", palette));
    for project in data.projects() {
        body.push(Line::from(vec![
            components::project_swatch(&project.color, palette),
            Span::raw(" "),
            Span::styled(project.name.clone(), palette.heading()),
        ]));
        body.push(Line::from(Span::styled(
            format!("  {}", project.description),
            palette.muted_style(),
        )));
        let mut members = vec![Span::raw("  ")];
        for member in project.members.iter().take(3) {
            members.push(components::avatar(member, palette));
        }
        members.push(Span::styled(
            format!("  {} tasks", project.task_count),
            palette.muted_style(),
        ));
        body.push(Line::from(members));
    }

    Page {
        title: "Dashboard".to_string(),
        header,
        body: PageBody::Lines(body),
        selected_line,
    }
}

fn view_switcher(view: ViewMode, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for button in ViewButton::ALL {
        let style = if view.is_active(button) {
            Style::default()
                .fg(palette.text)
                .bg(palette.selection)
                .add_modifier(Modifier::BOLD)
        } else if button.is_enabled() {
            palette.muted_style()
        } else {
            Style::default()
                .fg(palette.muted_dark)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        };
        let text = if view.is_active(button) {
            format!("[{}]", button.label())
        } else {
            format!(" {} ", button.label())
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn project_detail(ctx: &PageContext<'_>, state: &ProjectDetailState, width: usize) -> Page {
    let palette = &ctx.palette;
    let Some(project) = ctx.data.project(&state.project_id) else {
        return Page::lines(
            "Project",
            Vec::new(),
            vec![Line::from(Span::styled(PROJECT_NOT_FOUND, palette.muted_style()))],
        );
    };

    let mut members = Vec::new();
    for member in &project.members {
        members.push(components::avatar(member, palette));
    }
    members.push(Span::styled("   + Add task", palette.muted_style()));
    let header = vec![
        Line::from(vec![
            components::project_swatch(&project.color, palette),
            Span::raw(" "),
            Span::styled(project.name.clone(), palette.heading()),
        ]),
        Line::from(Span::styled(project.description.clone(), palette.muted_style())),
        Line::from(members),
        Line::from(""),
        view_switcher(state.view, palette),
        Line::from(""),
    ];

    let columns = query::board_columns(ctx.data, &project.id);
    let cursor = state.cursor.index();
    let mut position = 0usize;

    let (body, selected_line) = match state.view {
        ViewMode::Board => {
            let column_width = (width / columns.len().max(1)).saturating_sub(2);
            let mut rendered = Vec::with_capacity(columns.len());
            for column in &columns {
                let title = Line::from(vec![
                    Span::styled(column.label, palette.muted_style().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!(" {}", column.tasks.len()),
                        Style::default().fg(palette.muted_dark),
                    ),
                ]);
                let mut lines = Vec::new();
                let mut selected_line = None;
                for task in &column.tasks {
                    let selected = position == cursor;
                    if selected {
                        selected_line = Some(lines.len());
                    }
                    lines.extend(components::task_card(task, selected, column_width, palette));
                    position += 1;
                }
                if column.tasks.is_empty() {
                    lines.push(Line::from(Span::styled(NO_TASKS, palette.muted_style())));
                }
                rendered.push(Column {
                    title,
                    lines,
                    selected_line,
                });
            }
            (PageBody::Columns(rendered), None)
        }
        ViewMode::List => {
            let mut lines = Vec::new();
            let mut selected_line = None;
            for column in columns.iter().filter(|column| !column.tasks.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("{} ({})", column.label.to_uppercase(), column.tasks.len()),
                    palette.muted_style().add_modifier(Modifier::BOLD),
                )));
                for task in &column.tasks {
                    let selected = position == cursor;
                    if selected {
                        selected_line = Some(lines.len());
                    }
                    lines.push(components::task_row(task, selected, width, palette));
                    position += 1;
                }
                lines.push(Line::from(""));
            }
            (PageBody::Lines(lines), selected_line)
        }
    };

    Page {
        title: project.name.clone(),
        header,
        body,
        selected_line,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::state::Theme;
    use crate::ui::plain_text;

    fn context(data: &Dataset, hour: u32) -> PageContext<'_> {
        PageContext {
            data,
            palette: Palette::for_theme(Theme::Dark),
            due_reference: DueDateReference::legacy(),
            now: NaiveDate::from_ymd_opt(2026, 2, 18)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        }
    }

    fn body_text(page: &Page) -> String {
        match &page.body {
            PageBody::Lines(lines) => plain_text(lines),
            PageBody::Columns(columns) => columns
                .iter()
                .map(|column| {
                    format!(
                        "{}\n{}",
                        plain_text(&[column.title.clone()]),
                        plain_text(&column.lines)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    #[test]
    fn greeting_follows_hour() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
    }

    #[test]
    fn dashboard_lists_my_open_tasks_and_stats() {
        let data = Dataset::builtin();
        let ctx = context(&data, 9);
        let page = render(&ctx, &PageState::Dashboard(DashboardState::default()), 80);
        let header = plain_text(&page.header);
        assert!(header.contains("Good morning, Fisnik"));
        assert!(header.contains("You have 2 tasks to focus on today."));

        let body = body_text(&page);
        assert!(body.contains("Tasks due today (Feb 18)"));
        assert!(body.contains("Design hero section"));
        assert!(body.contains("Review pull request #42"));
        assert!(!body.contains("Fix navigation responsiveness"));
        assert!(body.contains("12 tasks"));
        assert_eq!(page.selected_line, Some(4));
    }

    #[test]
    fn unknown_project_renders_not_found() {
        let data = Dataset::builtin();
        let ctx = context(&data, 9);
        let page = render(
            &ctx,
            &PageState::Project(ProjectDetailState::new("proj-404")),
            80,
        );
        assert_eq!(body_text(&page), PROJECT_NOT_FOUND);
    }

    #[test]
    fn board_shows_three_columns_with_counts() {
        let data = Dataset::builtin();
        let ctx = context(&data, 9);
        let page = render(&ctx, &PageState::Project(ProjectDetailState::new("proj-2")), 90);
        let PageBody::Columns(columns) = &page.body else {
            panic!("board view renders columns");
        };
        let titles: Vec<String> = columns
            .iter()
            .map(|column| plain_text(&[column.title.clone()]))
            .collect();
        assert_eq!(titles, vec!["To Do 2", "In Progress 0", "Done 0"]);
        assert_eq!(plain_text(&columns[1].lines), NO_TASKS);
    }

    #[test]
    fn list_view_omits_empty_groups() {
        let data = Dataset::builtin();
        let ctx = context(&data, 9);
        let mut state = ProjectDetailState::new("proj-2");
        state.view = ViewMode::List;
        let page = render(&ctx, &PageState::Project(state), 90);
        let body = body_text(&page);
        assert!(body.contains("TO DO (2)"));
        assert!(!body.contains("IN PROGRESS"));
        assert!(!body.contains("DONE"));
    }

    #[test]
    fn project_cursor_order_is_board_order() {
        let data = Dataset::builtin();
        let page = PageState::Project(ProjectDetailState::new("proj-1"));
        let ids: Vec<&str> = page_tasks(&data, &page)
            .into_iter()
            .map(|task| task.id.as_str())
            .collect();
        assert_eq!(ids, vec!["task-2", "task-1", "task-6", "task-9"]);
    }
}
