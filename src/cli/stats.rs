//! flowboard stats command implementation.

use chrono::Local;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::query;
use crate::ui::components::format_due_short;

use super::Session;

pub fn run(session: Session, output: OutputOptions) -> Result<()> {
    let today = Local::now().date_naive();
    let stats = query::dashboard_stats(&session.data, session.due_reference, today);

    let mut human = HumanOutput::new(format!(
        "Dashboard for {}",
        session.data.current_user().name
    ));
    human.push_summary("Tasks due today", stats.due_today.to_string());
    human.push_summary("In progress", stats.in_progress.to_string());
    human.push_summary("Active projects", stats.active_projects.to_string());
    let reference = if stats.reference_fixed {
        format!("{} (fixed)", format_due_short(stats.reference_date))
    } else {
        format!("{} (today)", format_due_short(stats.reference_date))
    };
    human.push_summary("Due date reference", reference);
    if stats.reference_fixed {
        human.push_next_step("set dashboard.due_today = \"today\" in .flowboard.toml to use the clock");
    }

    emit_success(output, "stats", &stats, Some(&human))
}
