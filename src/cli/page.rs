//! flowboard page command implementation.

use chrono::Local;

use crate::error::{Error, Result};
use crate::output::{emit_text, OutputOptions};
use crate::route::Route;
use crate::state::{PageState, Sidebar, ViewButton};
use crate::ui::pages::{self, PageContext};
use crate::ui::text::{self, TextOptions};
use crate::ui::theme::Palette;

use super::Session;

const MIN_WIDTH: usize = 40;

pub struct PageOptions {
    pub path: String,
    pub view: String,
    pub open: Option<String>,
    pub chrome: bool,
    pub collapsed: bool,
    pub width: usize,
    pub output: OutputOptions,
}

#[derive(serde::Serialize)]
struct PageOutput {
    path: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_task: Option<String>,
    found: bool,
    text: String,
}

fn parse_view(value: &str) -> Result<ViewButton> {
    match value.trim().to_ascii_lowercase().as_str() {
        "board" => Ok(ViewButton::Board),
        "list" => Ok(ViewButton::List),
        "calendar" => Ok(ViewButton::Calendar),
        other => Err(Error::InvalidArgument(format!(
            "unknown view '{other}' (expected board or list)"
        ))),
    }
}

pub fn run(session: Session, options: PageOptions) -> Result<()> {
    let route: Route = options.path.parse()?;
    let mut page = PageState::for_route(&route);
    let mut warnings = Vec::new();

    let button = parse_view(&options.view)?;
    if let PageState::Project(state) = &mut page {
        if !state.view.select(button) {
            warnings.push(format!("{} view is not available yet", button.label()));
        }
    }

    if let Some(id) = options.open.as_deref() {
        if session.data.task(id).is_none() {
            return Err(Error::TaskNotFound(id.to_string()));
        }
        // Only a task card shown on this page can open the modal.
        let on_page = pages::page_tasks(&session.data, &page)
            .into_iter()
            .find(|task| task.id == id);
        match (page.modal_mut(), on_page) {
            (Some(modal), Some(task)) => modal.open(task),
            (Some(_), None) => {
                return Err(Error::InvalidArgument(format!("{id} is not on {route}")))
            }
            (None, _) => {
                return Err(Error::InvalidArgument(format!(
                    "{route} has no task modal"
                )))
            }
        }
    }

    let theme = session.config.ui.theme;
    let ctx = PageContext {
        data: &session.data,
        palette: Palette::for_theme(theme),
        due_reference: session.due_reference,
        now: Local::now().naive_local(),
    };
    let width = options.width.max(MIN_WIDTH);
    let chrome = options.chrome.then_some(Sidebar {
        collapsed: options.collapsed || session.config.ui.sidebar_collapsed,
    });
    let rendered = text::render_page(
        &ctx,
        &page,
        TextOptions {
            width,
            chrome,
            theme,
        },
    );

    let (view, found) = match &page {
        PageState::Project(state) => (
            Some(state.view.as_str()),
            session.data.project(&state.project_id).is_some(),
        ),
        _ => (None, true),
    };
    let output = PageOutput {
        path: route.path(),
        title: rendered.title,
        view,
        open_task: page
            .modal()
            .and_then(|modal| modal.task_id())
            .map(str::to_string),
        found,
        text: rendered.text,
    };
    emit_text(options.output, "page", &output, &output.text, &warnings)
}
