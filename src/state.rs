//! Transient UI state owned by pages and the layout.
//!
//! None of these types touch the dataset. Page state is created fresh on
//! navigation and dropped when the page is left.

use serde::{Deserialize, Serialize};

use crate::model::Task;
use crate::route::Route;

/// Task detail modal: closed, or open on one task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskModal {
    #[default]
    Closed,
    Open(String),
}

impl TaskModal {
    /// Open on `task`. Opening while already open replaces the task in a
    /// single transition.
    pub fn open(&mut self, task: &Task) {
        tracing::debug!(task = %task.id, "open task modal");
        *self = TaskModal::Open(task.id.clone());
    }

    pub fn close(&mut self) {
        if let TaskModal::Open(id) = self {
            tracing::debug!(task = %id, "close task modal");
        }
        *self = TaskModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TaskModal::Open(_))
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            TaskModal::Open(id) => Some(id),
            TaskModal::Closed => None,
        }
    }
}

/// Layout of the project detail page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Board,
    List,
}

/// The view switcher buttons, including the disabled calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewButton {
    Board,
    List,
    Calendar,
}

impl ViewButton {
    pub const ALL: [ViewButton; 3] = [ViewButton::Board, ViewButton::List, ViewButton::Calendar];

    pub fn label(self) -> &'static str {
        match self {
            ViewButton::Board => "Board",
            ViewButton::List => "List",
            ViewButton::Calendar => "Calendar",
        }
    }

    pub fn mode(self) -> Option<ViewMode> {
        match self {
            ViewButton::Board => Some(ViewMode::Board),
            ViewButton::List => Some(ViewMode::List),
            ViewButton::Calendar => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self.mode().is_some()
    }
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Board => "board",
            ViewMode::List => "list",
        }
    }

    /// Apply a view button press. Returns false when the button is disabled.
    pub fn select(&mut self, button: ViewButton) -> bool {
        match button.mode() {
            Some(mode) => {
                if *self != mode {
                    tracing::debug!(from = ?*self, to = ?mode, "switch project view");
                }
                *self = mode;
                true
            }
            None => false,
        }
    }

    pub fn is_active(self, button: ViewButton) -> bool {
        button.mode() == Some(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        tracing::debug!(theme = ?*self, "toggle theme");
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Sidebar chrome state. Purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub collapsed: bool,
}

impl Sidebar {
    pub const EXPANDED_WIDTH: u16 = 28;
    pub const COLLAPSED_WIDTH: u16 = 6;

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn width(self) -> u16 {
        if self.collapsed {
            Self::COLLAPSED_WIDTH
        } else {
            Self::EXPANDED_WIDTH
        }
    }
}

/// Keyboard stand-in for pointing at one of a page's task controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(self) -> usize {
        self.index
    }

    /// Clamp into `0..len`; stays at 0 for an empty list.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1).min(len - 1);
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump to `index`, clamped into `0..len`.
    pub fn select(&mut self, index: usize, len: usize) {
        self.index = index;
        self.clamp(len);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub modal: TaskModal,
    pub cursor: Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailState {
    pub project_id: String,
    pub view: ViewMode,
    pub modal: TaskModal,
    pub cursor: Cursor,
}

impl ProjectDetailState {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            view: ViewMode::Board,
            modal: TaskModal::Closed,
            cursor: Cursor::default(),
        }
    }
}

/// Top-bar user dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserMenu {
    pub open: bool,
}

/// Entries of the user dropdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Profile,
    Settings,
    LogOut,
}

impl UserMenuItem {
    pub const ALL: [UserMenuItem; 3] = [
        UserMenuItem::Profile,
        UserMenuItem::Settings,
        UserMenuItem::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserMenuItem::Profile => "Profile",
            UserMenuItem::Settings => "Settings",
            UserMenuItem::LogOut => "Log out",
        }
    }

    pub fn key(self) -> char {
        match self {
            UserMenuItem::Profile => 'p',
            UserMenuItem::Settings => 's',
            UserMenuItem::LogOut => 'l',
        }
    }

    pub fn destination(self) -> Route {
        match self {
            UserMenuItem::Profile | UserMenuItem::Settings => Route::Dashboard,
            UserMenuItem::LogOut => Route::Landing,
        }
    }
}

impl UserMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// State of whichever page is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Landing,
    Dashboard(DashboardState),
    Project(ProjectDetailState),
    SignIn,
    SignUp,
}

impl PageState {
    /// Fresh state for `route`. Nothing carries over from a previous page.
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Landing => PageState::Landing,
            Route::Dashboard => PageState::Dashboard(DashboardState::default()),
            Route::Project(id) => PageState::Project(ProjectDetailState::new(id.clone())),
            Route::SignIn => PageState::SignIn,
            Route::SignUp => PageState::SignUp,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            PageState::Landing => Route::Landing,
            PageState::Dashboard(_) => Route::Dashboard,
            PageState::Project(state) => Route::Project(state.project_id.clone()),
            PageState::SignIn => Route::SignIn,
            PageState::SignUp => Route::SignUp,
        }
    }

    pub fn modal(&self) -> Option<&TaskModal> {
        match self {
            PageState::Dashboard(state) => Some(&state.modal),
            PageState::Project(state) => Some(&state.modal),
            PageState::Landing | PageState::SignIn | PageState::SignUp => None,
        }
    }

    pub fn modal_mut(&mut self) -> Option<&mut TaskModal> {
        match self {
            PageState::Dashboard(state) => Some(&mut state.modal),
            PageState::Project(state) => Some(&mut state.modal),
            PageState::Landing | PageState::SignIn | PageState::SignUp => None,
        }
    }

    pub fn cursor_mut(&mut self) -> Option<&mut Cursor> {
        match self {
            PageState::Dashboard(state) => Some(&mut state.cursor),
            PageState::Project(state) => Some(&mut state.cursor),
            PageState::Landing | PageState::SignIn | PageState::SignUp => None,
        }
    }

    pub fn cursor(&self) -> Option<Cursor> {
        match self {
            PageState::Dashboard(state) => Some(state.cursor),
            PageState::Project(state) => Some(state.cursor),
            PageState::Landing | PageState::SignIn | PageState::SignUp => None,
        }
    }
}
