//! Read-only views over the dataset.
//!
//! Every function here is total: unknown ids produce empty results, never
//! errors. Results keep the dataset's relative order.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::model::{Task, TaskStatus};

/// Date the legacy "due today" statistic compares against.
pub const LEGACY_DUE_TODAY: (i32, u32, u32) = (2026, 2, 18);

/// Tasks belonging to `project_id`.
pub fn tasks_by_project<'a>(data: &'a Dataset, project_id: &str) -> Vec<&'a Task> {
    data.tasks()
        .iter()
        .filter(|task| task.project_id == project_id)
        .collect()
}

/// Tasks belonging to `project_id` with exactly `status`.
pub fn tasks_by_project_and_status<'a>(
    data: &'a Dataset,
    project_id: &str,
    status: TaskStatus,
) -> Vec<&'a Task> {
    data.tasks()
        .iter()
        .filter(|task| task.project_id == project_id && task.status == status)
        .collect()
}

/// Not-done tasks assigned to the current user.
///
/// No date filtering happens here; "today" is the name of the dashboard
/// section, not a predicate.
pub fn todays_tasks_for_current_user(data: &Dataset) -> Vec<&Task> {
    let me = data.current_user_id();
    data.tasks()
        .iter()
        .filter(|task| task.is_assigned_to(me) && task.status != TaskStatus::Done)
        .collect()
}

/// One board column: a status and its tasks.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub label: &'static str,
    pub tasks: Vec<&'a Task>,
}

/// The three status columns of a project, in board order.
pub fn board_columns<'a>(data: &'a Dataset, project_id: &str) -> Vec<BoardColumn<'a>> {
    TaskStatus::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            label: status.label(),
            tasks: tasks_by_project_and_status(data, project_id, status),
        })
        .collect()
}

/// What the "due today" statistic compares due dates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateReference {
    /// A pinned calendar date.
    Fixed(NaiveDate),
    /// The local date at render time.
    SystemClock,
}

impl DueDateReference {
    /// The pinned date the dashboard has always used.
    pub fn legacy() -> Self {
        let (year, month, day) = LEGACY_DUE_TODAY;
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => DueDateReference::Fixed(date),
            None => DueDateReference::SystemClock,
        }
    }

    /// Resolve against `today`, the caller's notion of the current date.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            DueDateReference::Fixed(date) => date,
            DueDateReference::SystemClock => today,
        }
    }

    pub fn resolve_now(self) -> NaiveDate {
        self.resolve(Local::now().date_naive())
    }

    pub fn is_fixed(self) -> bool {
        matches!(self, DueDateReference::Fixed(_))
    }
}

impl Default for DueDateReference {
    fn default() -> Self {
        Self::legacy()
    }
}

/// Numbers shown in the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub due_today: usize,
    pub in_progress: usize,
    pub active_projects: usize,
    pub reference_date: NaiveDate,
    pub reference_fixed: bool,
}

/// Stats derived from [`todays_tasks_for_current_user`].
pub fn dashboard_stats(
    data: &Dataset,
    reference: DueDateReference,
    today: NaiveDate,
) -> DashboardStats {
    let reference_date = reference.resolve(today);
    let mine = todays_tasks_for_current_user(data);
    DashboardStats {
        due_today: mine
            .iter()
            .filter(|task| task.due_date == Some(reference_date))
            .count(),
        in_progress: mine
            .iter()
            .filter(|task| task.status == TaskStatus::InProgress)
            .count(),
        active_projects: data.projects().len(),
        reference_date,
        reference_fixed: reference.is_fixed(),
    }
}

/// Stored versus real task count for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCountDrift {
    pub project_id: String,
    pub stored: u32,
    pub actual: usize,
}

impl TaskCountDrift {
    pub fn is_consistent(&self) -> bool {
        usize::try_from(self.stored)
            .map(|stored| stored == self.actual)
            .unwrap_or(false)
    }
}

/// The denormalized `task_count` of every project next to the real count.
pub fn task_count_drift(data: &Dataset) -> Vec<TaskCountDrift> {
    data.projects()
        .iter()
        .map(|project| TaskCountDrift {
            project_id: project.id.clone(),
            stored: project.task_count,
            actual: tasks_by_project(data, &project.id).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_reference_is_pinned() {
        let reference = DueDateReference::legacy();
        let unrelated = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(
            reference.resolve(unrelated),
            NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
        );
        assert!(reference.is_fixed());
    }

    #[test]
    fn system_clock_reference_follows_today() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        assert_eq!(DueDateReference::SystemClock.resolve(today), today);
    }

    #[test]
    fn drift_consistency() {
        let drift = TaskCountDrift {
            project_id: "p".to_string(),
            stored: 2,
            actual: 2,
        };
        assert!(drift.is_consistent());
    }
}
