//! flowboard ui command implementation.

use crate::error::Result;
use crate::route::Route;
use crate::ui::{self, AppOptions};

use super::Session;

pub struct UiOptions {
    pub path: String,
}

pub fn run(session: Session, options: UiOptions) -> Result<()> {
    let route: Route = options.path.parse()?;
    let app_options = AppOptions {
        route,
        theme: session.config.ui.theme,
        sidebar_collapsed: session.config.ui.sidebar_collapsed,
        due_reference: session.due_reference,
    };
    ui::run(session.data, app_options)
}
