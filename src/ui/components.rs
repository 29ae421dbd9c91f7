//! Presentation pieces shared by the pages: badges, avatars, task cards, the
//! task detail modal, the sidebar and the top bar.
//!
//! Everything here is a pure function of its inputs and produces owned
//! `ratatui` lines, so the same output feeds the terminal UI and the plain
//! text renderer.

use chrono::{DateTime, NaiveDate, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::dataset::Dataset;
use crate::model::{Task, TaskPriority, TaskStatus, User};
use crate::route::Route;
use crate::state::{Sidebar, Theme, UserMenuItem};

use super::theme::{parse_hsl, Palette};

pub const BRAND: &str = "Flowboard";
const STATUS_DOT: &str = "●";
const PROJECT_GLYPH: &str = "#";

pub fn format_due_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn format_due_long(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

pub fn format_comment_time(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %-I:%M %p").to_string()
}

pub fn avatar(user: &User, palette: &Palette) -> Span<'static> {
    let glyph = user.initial();
    let color = palette.avatar_color(&glyph);
    Span::styled(
        format!("({glyph})"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn priority_badge(priority: TaskPriority, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {} ", priority.as_str().to_ascii_uppercase()),
        palette.priority_style(priority),
    )
}

pub fn status_dot(status: TaskStatus, palette: &Palette) -> Span<'static> {
    Span::styled(STATUS_DOT, Style::default().fg(palette.status_color(status)))
}

pub fn status_label(status: TaskStatus, palette: &Palette) -> Span<'static> {
    Span::styled(status.label(), Style::default().fg(palette.muted))
}

/// Color swatch for a project, falling back to the primary color.
pub fn project_swatch(color_hint: &str, palette: &Palette) -> Span<'static> {
    let color = parse_hsl(color_hint).unwrap_or(palette.primary);
    Span::styled(STATUS_DOT, Style::default().fg(color))
}

fn span_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|span| span.content.chars().count()).sum()
}

fn truncate_text(value: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max {
        return value.to_string();
    }
    if max <= 3 {
        return chars[..max].iter().collect();
    }
    let mut out: String = chars[..(max - 3)].iter().collect();
    out.push_str("...");
    out
}

/// Left and right groups on one line, right group flush with `width`.
fn spread(mut left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used = span_width(&left) + span_width(&right);
    if width > used {
        left.push(Span::raw(" ".repeat(width - used)));
    } else {
        left.push(Span::raw(" "));
    }
    left.extend(right);
    Line::from(left)
}

fn task_meta(task: &Task, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = vec![priority_badge(task.priority, palette)];
    if let Some(due) = task.due_date {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("◷ {}", format_due_short(due)),
            palette.muted_style(),
        ));
    }
    if let Some(assignee) = task.assignee.as_ref() {
        spans.push(Span::raw(" "));
        spans.push(avatar(assignee, palette));
    }
    spans
}

fn selection_marker(selected: bool, palette: &Palette) -> Span<'static> {
    if selected {
        Span::styled("▌", Style::default().fg(palette.primary))
    } else {
        Span::raw(" ")
    }
}

fn highlight(line: Line<'static>, selected: bool, palette: &Palette) -> Line<'static> {
    if selected {
        line.patch_style(palette.selected())
    } else {
        line
    }
}

/// Row variant of a task card: status dot, title, badge, due date, avatar.
pub fn task_row(task: &Task, selected: bool, width: usize, palette: &Palette) -> Line<'static> {
    let right = task_meta(task, palette);
    let fixed = 4 + span_width(&right) + 1;
    let title = truncate_text(&task.title, width.saturating_sub(fixed).max(8));
    let left = vec![
        selection_marker(selected, palette),
        status_dot(task.status, palette),
        Span::raw(" "),
        Span::styled(title, Style::default().fg(palette.text)),
    ];
    highlight(spread(left, right, width), selected, palette)
}

/// Card variant of a task card: title line over a metadata line.
pub fn task_card(
    task: &Task,
    selected: bool,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2);
    let title = Line::from(vec![
        selection_marker(selected, palette),
        Span::styled(
            truncate_text(&task.title, inner),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    let meta = Line::from(
        std::iter::once(Span::raw(" "))
            .chain(task_meta(task, palette))
            .collect::<Vec<_>>(),
    );
    vec![
        highlight(title, selected, palette),
        highlight(meta, selected, palette),
        Line::from(""),
    ]
}

pub fn section_header(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), palette.heading()))
}

/// Contents of the task detail modal.
pub fn task_detail(task: &Task, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            task.title.clone(),
            palette.heading().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            priority_badge(task.priority, palette),
            Span::raw("  "),
            status_dot(task.status, palette),
            Span::raw(" "),
            status_label(task.status, palette),
        ]),
        Line::from(""),
    ];

    let mut assignee = vec![Span::styled("Assignee   ", palette.muted_style())];
    match task.assignee.as_ref() {
        Some(user) => {
            assignee.push(avatar(user, palette));
            assignee.push(Span::raw(format!(" {}", user.name)));
        }
        None => assignee.push(Span::styled("Unassigned", palette.muted_style())),
    }
    lines.push(Line::from(assignee));

    let due = match task.due_date {
        Some(date) => Span::raw(format_due_long(date)),
        None => Span::styled("No due date", palette.muted_style()),
    };
    lines.push(Line::from(vec![Span::styled("Due date   ", palette.muted_style()), due]));
    lines.push(Line::from(""));

    lines.push(section_header("Description", palette));
    let description = task
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("No description added yet.");
    lines.push(Line::from(Span::styled(description.to_string(), palette.muted_style())));
    lines.push(Line::from(""));

    lines.push(section_header("Attachments", palette));
    lines.push(Line::from(Span::styled("No attachments yet.", palette.muted_style())));
    lines.push(Line::from(""));

    let mut comments_header = vec![Span::styled("Comments", palette.heading())];
    if let Some(comments) = task.comments.as_ref() {
        comments_header.push(Span::styled(
            format!(" ({})", comments.len()),
            palette.muted_style(),
        ));
    }
    lines.push(Line::from(comments_header));
    for comment in task.comments.iter().flatten() {
        lines.push(Line::from(vec![
            avatar(&comment.author, palette),
            Span::raw(" "),
            Span::styled(comment.author.name.clone(), palette.heading()),
            Span::raw("  "),
            Span::styled(format_comment_time(comment.created_at), palette.muted_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", comment.content),
            palette.muted_style(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Write a comment... ]  Comment",
        Style::default().fg(palette.muted_dark),
    )));
    lines
}

/// One dashboard stat card.
pub fn stat_card(label: &str, value: usize, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(label.to_string(), palette.muted_style())),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
    ]
}

fn sidebar_link(
    glyph: &str,
    label: &str,
    active: bool,
    sidebar: Sidebar,
    palette: &Palette,
) -> Line<'static> {
    let style = if active {
        Style::default()
            .fg(palette.text)
            .bg(palette.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.muted_style()
    };
    let text = if sidebar.collapsed {
        format!(" {glyph}")
    } else {
        let width = usize::from(Sidebar::EXPANDED_WIDTH).saturating_sub(6);
        format!(" {glyph}  {}", truncate_text(label, width))
    };
    Line::from(Span::styled(text, style))
}

/// Sidebar: brand, inbox, project links, settings and profile.
pub fn sidebar(
    data: &Dataset,
    route: &Route,
    sidebar: Sidebar,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let toggle = if sidebar.collapsed { "»" } else { "«" };
    let mut lines = Vec::new();
    if sidebar.collapsed {
        lines.push(Line::from(Span::styled(format!(" {toggle}"), palette.muted_style())));
    } else {
        lines.push(spread(
            vec![Span::styled(
                format!(" ⚡ {BRAND}"),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            )],
            vec![Span::styled(format!("{toggle} "), palette.muted_style())],
            usize::from(Sidebar::EXPANDED_WIDTH).saturating_sub(2),
        ));
    }
    lines.push(Line::from(""));
    lines.push(sidebar_link("▤", "Inbox", *route == Route::Dashboard, sidebar, palette));

    if !sidebar.collapsed {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " PROJECTS              +",
            Style::default().fg(palette.muted_dark),
        )));
    }
    for project in data.projects() {
        let active = matches!(route, Route::Project(id) if *id == project.id);
        let mut line = sidebar_link(PROJECT_GLYPH, &project.name, active, sidebar, palette);
        if !sidebar.collapsed {
            line.spans.push(Span::raw(" "));
            line.spans.push(project_swatch(&project.color, palette));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(sidebar_link("⚙", "Settings", false, sidebar, palette));
    lines.push(sidebar_link("☺", "Profile", false, sidebar, palette));
    lines
}

/// Top bar: search placeholder, theme toggle, bell, current user avatar.
pub fn top_bar(data: &Dataset, theme: Theme, width: usize, palette: &Palette) -> Line<'static> {
    let theme_glyph = if theme.is_dark() { "☀" } else { "☾" };
    spread(
        vec![Span::styled(
            " ⌕ Search tasks, projects...",
            Style::default().fg(palette.muted_dark),
        )],
        vec![
            Span::styled(theme_glyph, Style::default().fg(palette.text)),
            Span::raw("  "),
            Span::styled("♪", Style::default().fg(palette.text)),
            Span::styled("•", Style::default().fg(palette.primary)),
            Span::raw("  "),
            avatar(data.current_user(), palette),
            Span::raw(" "),
        ],
        width,
    )
}

/// User dropdown contents.
pub fn user_menu(data: &Dataset, palette: &Palette) -> Vec<Line<'static>> {
    let user = data.current_user();
    let mut lines = vec![
        Line::from(Span::styled(user.name.clone(), palette.heading())),
        Line::from(Span::styled(user.email.clone(), palette.muted_style())),
        Line::from(Span::styled("────────────", Style::default().fg(palette.border))),
    ];
    for item in UserMenuItem::ALL {
        if item == UserMenuItem::LogOut {
            lines.push(Line::from(Span::styled(
                "────────────",
                Style::default().fg(palette.border),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", item.key()), Style::default().fg(palette.primary)),
            Span::raw(item.label()),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::plain_text;

    fn palette() -> Palette {
        Palette::for_theme(Theme::Dark)
    }

    #[test]
    fn dates_use_short_month_names() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        assert_eq!(format_due_short(date), "Feb 19");
        assert_eq!(format_due_long(date), "Thu, Feb 19");
    }

    #[test]
    fn task_row_shows_badge_due_date_and_avatar() {
        let data = Dataset::builtin();
        let task = data.task("task-3").unwrap();
        let text = plain_text(&[task_row(task, false, 70, &palette())]);
        assert!(text.contains("Review pull request #42"));
        assert!(text.contains("URGENT"));
        assert!(text.contains("Feb 18"));
        assert!(text.contains("(F)"));
        assert_eq!(text.chars().count(), 70);
    }

    #[test]
    fn task_detail_uses_fallbacks_for_missing_fields() {
        let data = Dataset::builtin();
        let mut task = data.task("task-6").unwrap().clone();
        task.assignee = None;
        task.description = None;
        let text = plain_text(&task_detail(&task, &palette()));
        assert!(text.contains("Unassigned"));
        assert!(text.contains("No due date"));
        assert!(text.contains("No description added yet."));
        assert!(!text.contains("Comments ("));
    }

    #[test]
    fn task_detail_lists_comments() {
        let data = Dataset::builtin();
        let text = plain_text(&task_detail(data.task("task-1").unwrap(), &palette()));
        assert!(text.contains("Comments (2)"));
        assert!(text.contains("Alex Chen"));
        assert!(text.contains("Feb 17, 10:30 AM"));
    }

    #[test]
    fn collapsed_sidebar_hides_labels() {
        let data = Dataset::builtin();
        let mut state = Sidebar::default();
        let expanded = plain_text(&sidebar(&data, &Route::Dashboard, state, &palette()));
        assert!(expanded.contains("Website Redesign"));
        assert!(expanded.contains("Inbox"));

        state.toggle();
        let collapsed = plain_text(&sidebar(&data, &Route::Dashboard, state, &palette()));
        assert!(!collapsed.contains("Website Redesign"));
        assert!(!collapsed.contains("Inbox"));
        assert!(collapsed.contains('#'));
    }
}
