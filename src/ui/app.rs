use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::Task;
use crate::query::DueDateReference;
use crate::route::Route;
use crate::state::{PageState, Sidebar, Theme, UserMenu, UserMenuItem, ViewButton};

use super::pages::{self, PageContext};
use super::theme::Palette;
use super::view;

const EVENT_POLL_MS: u64 = 120;

/// Starting point of an interactive session.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub route: Route,
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub due_reference: DueDateReference,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            route: Route::Dashboard,
            theme: Theme::default(),
            sidebar_collapsed: false,
            due_reference: DueDateReference::default(),
        }
    }
}

pub struct AppState {
    pub(crate) data: Dataset,
    pub(crate) due_reference: DueDateReference,
    pub(crate) page: PageState,
    pub(crate) sidebar: Sidebar,
    pub(crate) theme: Theme,
    pub(crate) user_menu: UserMenu,
    pub(crate) show_help: bool,
    info_message: Option<String>,
}

impl AppState {
    pub fn new(data: Dataset, options: AppOptions) -> Self {
        Self {
            data,
            due_reference: options.due_reference,
            page: PageState::for_route(&options.route),
            sidebar: Sidebar {
                collapsed: options.sidebar_collapsed,
            },
            theme: options.theme,
            user_menu: UserMenu::default(),
            show_help: false,
            info_message: None,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub(crate) fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    pub(crate) fn context(&self) -> PageContext<'_> {
        PageContext {
            data: &self.data,
            palette: self.palette(),
            due_reference: self.due_reference,
            now: Local::now().naive_local(),
        }
    }

    pub(crate) fn info_message(&self) -> Option<&str> {
        self.info_message.as_deref()
    }

    /// Task shown in the modal, if the modal is open on a known task.
    pub(crate) fn open_task(&self) -> Option<&Task> {
        let id = self.page.modal()?.task_id()?;
        self.data.task(id)
    }

    fn page_tasks(&self) -> Vec<&Task> {
        pages::page_tasks(&self.data, &self.page)
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.info_message = Some(message.into());
    }

    /// Replace the page with fresh state for `route`.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.page.route(), to = %route, "navigate");
        self.page = PageState::for_route(&route);
        self.user_menu.open = false;
        self.info_message = None;
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = self.page_tasks().len();
        if let Some(cursor) = self.page.cursor_mut() {
            if forward {
                cursor.next(len);
            } else {
                cursor.prev();
            }
        }
    }

    fn open_selected(&mut self) {
        let Some(index) = self.page.cursor().map(|cursor| cursor.index()) else {
            return;
        };
        let Some(task) = self.page_tasks().get(index).map(|task| (*task).clone()) else {
            return;
        };
        if let Some(modal) = self.page.modal_mut() {
            modal.open(&task);
        }
    }

    /// Swap the open modal to the neighbouring task in page order.
    fn step_modal(&mut self, forward: bool) {
        let tasks = self.page_tasks();
        let Some(current) = self
            .page
            .modal()
            .and_then(|modal| modal.task_id())
            .and_then(|id| tasks.iter().position(|task| task.id == id))
        else {
            return;
        };
        let target = if forward {
            (current + 1).min(tasks.len().saturating_sub(1))
        } else {
            current.saturating_sub(1)
        };
        if target == current {
            return;
        }
        let len = tasks.len();
        let task = tasks[target].clone();
        if let Some(cursor) = self.page.cursor_mut() {
            cursor.select(target, len);
        }
        if let Some(modal) = self.page.modal_mut() {
            modal.open(&task);
        }
    }

    fn close_modal(&mut self) {
        if let Some(modal) = self.page.modal_mut() {
            modal.close();
        }
    }

    fn press_view_button(&mut self, button: ViewButton) {
        let PageState::Project(state) = &mut self.page else {
            return;
        };
        if self.data.project(&state.project_id).is_none() {
            return;
        }
        if state.view.select(button) {
            self.info_message = None;
        } else {
            self.set_info(format!("{} view is coming soon", button.label()));
        }
    }

    fn open_project(&mut self, position: usize) {
        let Some(project) = self.data.projects().get(position) else {
            self.set_info(format!("no project {}", position + 1));
            return;
        };
        let route = Route::Project(project.id.clone());
        self.navigate(route);
    }

    pub(crate) fn footer_hint(&self) -> String {
        if self.user_menu.open {
            return "p profile  s settings  l log out  esc close".to_string();
        }
        if self.page.modal().is_some_and(|modal| modal.is_open()) {
            return "j/k next/prev task  esc close".to_string();
        }
        match &self.page {
            PageState::Landing => "enter open app  s sign up  i log in  q quit".to_string(),
            PageState::SignIn | PageState::SignUp => "esc back  q quit".to_string(),
            PageState::Dashboard(_) => {
                "j/k move  enter open  1-9 project  [ sidebar  t theme  m menu  ? help  q quit"
                    .to_string()
            }
            PageState::Project(_) => {
                "j/k move  enter open  b/l/c view  d dashboard  [ sidebar  t theme  ? help  q quit"
                    .to_string()
            }
        }
    }

    /// Apply one key press. Returns true when the session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.user_menu.open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.user_menu.toggle(),
                KeyCode::Char(ch) => {
                    if let Some(item) = UserMenuItem::ALL.into_iter().find(|item| item.key() == ch)
                    {
                        self.navigate(item.destination());
                    }
                }
                _ => {}
            }
            return false;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return false;
        }

        if self.page.modal().is_some_and(|modal| modal.is_open()) {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') | KeyCode::Enter => {
                    self.close_modal()
                }
                KeyCode::Char('j') | KeyCode::Char('n') | KeyCode::Down => self.step_modal(true),
                KeyCode::Char('k') | KeyCode::Char('p') | KeyCode::Up => self.step_modal(false),
                _ => {}
            }
            return false;
        }

        match self.page {
            PageState::Landing => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return true,
                    KeyCode::Enter | KeyCode::Char('d') => self.navigate(Route::Dashboard),
                    KeyCode::Char('s') => self.navigate(Route::SignUp),
                    KeyCode::Char('i') => self.navigate(Route::SignIn),
                    _ => {}
                }
                return false;
            }
            PageState::SignIn | PageState::SignUp => {
                match key.code {
                    KeyCode::Char('q') => return true,
                    KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace => {
                        self.navigate(Route::Landing)
                    }
                    _ => {}
                }
                return false;
            }
            PageState::Dashboard(_) | PageState::Project(_) => {}
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(false),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('b') => self.press_view_button(ViewButton::Board),
            KeyCode::Char('l') => self.press_view_button(ViewButton::List),
            KeyCode::Char('c') => self.press_view_button(ViewButton::Calendar),
            KeyCode::Char('[') => self.sidebar.toggle(),
            KeyCode::Char('t') => self.theme.toggle(),
            KeyCode::Char('m') => self.user_menu.toggle(),
            KeyCode::Char('d') => self.navigate(Route::Dashboard),
            KeyCode::Char('h') => self.navigate(Route::Landing),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(ch @ '1'..='9') => {
                let position = ch as usize - '1' as usize;
                self.open_project(position);
            }
            _ => {}
        }
        false
    }
}

pub fn run(data: Dataset, options: AppOptions) -> Result<()> {
    tracing::info!(route = %options.route, "starting terminal ui");
    let mut app = AppState::new(data, options);
    run_terminal(&mut app)
}

fn run_terminal(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| view::render(frame, app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewMode;

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_at(route: Route) -> AppState {
        AppState::new(
            Dataset::builtin(),
            AppOptions {
                route,
                ..AppOptions::default()
            },
        )
    }

    #[test]
    fn enter_opens_modal_on_cursor_task() {
        let mut app = app_at(Route::Dashboard);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.open_task().map(|task| task.id.as_str()), Some("task-3"));

        press(&mut app, KeyCode::Esc);
        assert!(app.open_task().is_none());
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn modal_steps_to_neighbouring_task() {
        let mut app = app_at(Route::Project("proj-1".to_string()));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.open_task().map(|task| task.id.as_str()), Some("task-2"));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.open_task().map(|task| task.id.as_str()), Some("task-1"));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.open_task().map(|task| task.id.as_str()), Some("task-2"));
    }

    #[test]
    fn calendar_button_keeps_view() {
        let mut app = app_at(Route::Project("proj-1".to_string()));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('c'));
        let PageState::Project(state) = &app.page else {
            panic!("project page");
        };
        assert_eq!(state.view, ViewMode::List);
        assert!(app.info_message().is_some());
    }

    #[test]
    fn navigation_resets_page_state() {
        let mut app = app_at(Route::Project("proj-1".to_string()));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('1'));
        let PageState::Project(state) = &app.page else {
            panic!("project page");
        };
        assert_eq!(state.project_id, "proj-1");
        assert_eq!(state.view, ViewMode::Board);
    }

    #[test]
    fn user_menu_log_out_returns_to_landing() {
        let mut app = app_at(Route::Dashboard);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.user_menu.open);
        assert!(!press(&mut app, KeyCode::Char('l')));
        assert_eq!(app.route(), Route::Landing);
        assert!(!app.user_menu.open);
    }

    #[test]
    fn chrome_toggles_do_not_touch_page() {
        let mut app = app_at(Route::Dashboard);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('t'));
        assert!(app.sidebar.collapsed);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.page.cursor().map(|cursor| cursor.index()), Some(1));
    }

    #[test]
    fn quit_keys() {
        let mut app = app_at(Route::Landing);
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.route(), Route::Dashboard);
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
