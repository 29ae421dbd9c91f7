use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::AppState;
use super::components;
use super::pages::{self, Column, PageBody};
use super::theme::Palette;

const HELP_KEY_WIDTH: usize = 10;
const MODAL_WIDTH: u16 = 72;
const USER_MENU_WIDTH: u16 = 28;

pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.size();
    let palette = app.palette();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(area);
    let body = chunks[0];
    let footer = chunks[1];

    let main = if app.route().uses_app_layout() {
        render_chrome(frame, app, body, &palette)
    } else {
        body
    };
    render_page(frame, app, main, &palette);
    render_footer(frame, app, footer, &palette);

    if let Some(task) = app.open_task() {
        render_task_modal(frame, area, components::task_detail(task, &palette), &palette);
    }
    if app.user_menu.open {
        render_user_menu(frame, area, app, &palette);
    }
    if app.show_help {
        render_help(frame, area, &palette);
    }
}

/// Sidebar and top bar; returns the area left for the page.
fn render_chrome(frame: &mut Frame, app: &AppState, area: Rect, palette: &Palette) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(app.sidebar.width()), Constraint::Min(0)].as_ref())
        .split(area);
    let sidebar = Paragraph::new(components::sidebar(
        &app.data,
        &app.route(),
        app.sidebar,
        palette,
    ))
    .block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(sidebar, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)].as_ref())
        .split(columns[1]);
    let top_bar = Paragraph::new(components::top_bar(
        &app.data,
        app.theme,
        rows[0].width as usize,
        palette,
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(top_bar, rows[0]);

    let main = rows[1];
    Rect::new(
        main.x + 1,
        main.y,
        main.width.saturating_sub(2),
        main.height,
    )
}

fn render_page(frame: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let ctx = app.context();
    let page = pages::render(&ctx, &app.page, area.width as usize);

    let header_height = (page.header.len() as u16).min(area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(0)].as_ref())
        .split(area);
    frame.render_widget(Paragraph::new(page.header), chunks[0]);

    match page.body {
        PageBody::Lines(lines) => {
            let offset = scroll_offset(lines.len(), page.selected_line, chunks[1].height as usize);
            let widget = Paragraph::new(lines).scroll((offset, 0));
            frame.render_widget(widget, chunks[1]);
        }
        PageBody::Columns(columns) => render_columns(frame, columns, chunks[1], palette),
    }
}

fn render_columns(frame: &mut Frame, columns: Vec<Column>, area: Rect, palette: &Palette) {
    let count = columns.len().max(1) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (column, slot) in columns.into_iter().zip(slots.iter()) {
        let inner_height = slot.height.saturating_sub(2) as usize;
        let offset = scroll_offset(column.lines.len(), column.selected_line, inner_height);
        let widget = Paragraph::new(column.lines).scroll((offset, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(column.title)
                .border_style(Style::default().fg(palette.border)),
        );
        frame.render_widget(widget, *slot);
    }
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let hint = Span::styled(app.footer_hint(), Style::default().fg(palette.muted_dark));
    let line = match app.info_message() {
        Some(info) => Line::from(vec![
            hint,
            Span::raw("  |  "),
            Span::styled(info.to_string(), Style::default().fg(palette.warning)),
        ]),
        None => Line::from(hint),
    };
    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(widget, area);
}

fn render_task_modal(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, palette: &Palette) {
    let width = MODAL_WIDTH.min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let modal = centered_rect(width, height, area);
    frame.render_widget(Clear, modal);
    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Task")
                .border_style(Style::default().fg(palette.primary)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, modal);
}

fn render_user_menu(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let lines = components::user_menu(&app.data, palette);
    let width = USER_MENU_WIDTH.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let menu = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + 2.min(area.height.saturating_sub(height)),
        width,
        height,
    );
    frame.render_widget(Clear, menu);
    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, menu);
}

fn render_help(frame: &mut Frame, area: Rect, palette: &Palette) {
    let width = 48u16.min(area.width.saturating_sub(4));
    let lines = build_help_lines(width.saturating_sub(2) as usize, palette);
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let modal = centered_rect(width, height, area);
    frame.render_widget(Clear, modal);
    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.surface))
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(widget, modal);
}

fn build_help_lines(width: usize, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        help_line("j/k", "move between tasks", width, palette),
        help_line("enter", "open task details", width, palette),
        help_line("esc", "close details or quit", width, palette),
        help_line("b/l/c", "board, list, calendar view", width, palette),
        help_line("1-9", "open project", width, palette),
        help_line("d", "dashboard", width, palette),
        help_line("h", "home page", width, palette),
        help_line("[", "collapse sidebar", width, palette),
        help_line("t", "toggle theme", width, palette),
        help_line("m", "user menu", width, palette),
        help_line("q", "quit", width, palette),
        help_line("?", "hide help", width, palette),
    ]
}

fn help_line(keys: &str, desc: &str, width: usize, palette: &Palette) -> Line<'static> {
    let key_text = format!("{keys:<HELP_KEY_WIDTH$}");
    let desc_width = width.saturating_sub(HELP_KEY_WIDTH + 1);
    let desc_text: String = desc.chars().take(desc_width).collect();
    Line::from(vec![
        Span::styled(
            key_text,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(desc_text, palette.muted_style()),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// First visible line so `selected` stays near the middle of `height` rows.
fn scroll_offset(total: usize, selected: Option<usize>, height: usize) -> u16 {
    if total <= height || height == 0 {
        return 0;
    }
    let selected = selected.unwrap_or(0);
    let start = selected.saturating_sub(height / 2).min(total - height);
    u16::try_from(start).unwrap_or(u16::MAX)
}
