use chrono::NaiveDate;
use flowboard::dataset::Dataset;
use flowboard::model::{Project, Task, TaskPriority, TaskStatus, User};
use flowboard::query::{
    board_columns, dashboard_stats, task_count_drift, tasks_by_project,
    tasks_by_project_and_status, todays_tasks_for_current_user, DueDateReference,
};

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("User {id}"),
        email: format!("{id}@example.com"),
        avatar: String::new(),
    }
}

fn task(id: &str, project: &str, status: TaskStatus, assignee: Option<&User>) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        status,
        priority: TaskPriority::Medium,
        assignee: assignee.cloned(),
        due_date: None,
        project_id: project.to_string(),
        comments: None,
    }
}

#[test]
fn tasks_by_project_matches_builtin_scenario() {
    let data = Dataset::builtin();
    assert_eq!(
        ids(&tasks_by_project(&data, "proj-1")),
        vec!["task-1", "task-2", "task-6", "task-9"]
    );
    assert_eq!(
        ids(&tasks_by_project_and_status(&data, "proj-1", TaskStatus::Done)),
        vec!["task-6", "task-9"]
    );
    assert!(tasks_by_project(&data, "proj-404").is_empty());
}

#[test]
fn statuses_partition_project_tasks() {
    let data = Dataset::builtin();
    for project in data.projects() {
        let all = tasks_by_project(&data, &project.id);
        let mut split: Vec<&Task> = TaskStatus::ALL
            .iter()
            .flat_map(|&status| tasks_by_project_and_status(&data, &project.id, status))
            .collect();
        assert_eq!(split.len(), all.len());
        split.sort_by_key(|task| task.id.clone());
        let mut sorted = all.clone();
        sorted.sort_by_key(|task| task.id.clone());
        assert_eq!(ids(&split), ids(&sorted));
    }
}

#[test]
fn board_columns_are_in_status_order() {
    let data = Dataset::builtin();
    let columns = board_columns(&data, "proj-3");
    let labels: Vec<&str> = columns.iter().map(|column| column.label).collect();
    assert_eq!(labels, vec!["To Do", "In Progress", "Done"]);
    assert_eq!(ids(&columns[0].tasks), vec!["task-3", "task-10"]);
    assert_eq!(ids(&columns[1].tasks), vec!["task-5", "task-8"]);
    assert!(columns[2].tasks.is_empty());
}

#[test]
fn todays_tasks_exclude_done_and_other_assignees() {
    let data = Dataset::builtin();
    let mine = todays_tasks_for_current_user(&data);
    assert_eq!(ids(&mine), vec!["task-1", "task-3"]);
    for task in mine {
        assert_ne!(task.status, TaskStatus::Done);
        assert!(task.is_assigned_to(data.current_user_id()));
    }
}

#[test]
fn dangling_and_unassigned_tasks_are_tolerated() {
    let me = user("me");
    let other = user("other");
    let data = Dataset::new(
        vec![me.clone(), other.clone()],
        Vec::new(),
        vec![
            task("a", "ghost-project", TaskStatus::Todo, Some(&me)),
            task("b", "ghost-project", TaskStatus::Todo, None),
            task("c", "ghost-project", TaskStatus::Done, Some(&me)),
            task("d", "ghost-project", TaskStatus::InProgress, Some(&other)),
        ],
        "me",
    )
    .expect("dataset");

    assert_eq!(ids(&todays_tasks_for_current_user(&data)), vec!["a"]);
    assert_eq!(tasks_by_project(&data, "ghost-project").len(), 4);
    assert!(task_count_drift(&data).is_empty());
}

#[test]
fn dashboard_stats_use_pinned_reference() {
    let data = Dataset::builtin();
    let stats = dashboard_stats(&data, DueDateReference::legacy(), date(2030, 1, 1));
    assert_eq!(stats.due_today, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.active_projects, 3);
    assert_eq!(stats.reference_date, date(2026, 2, 18));
    assert!(stats.reference_fixed);
}

#[test]
fn dashboard_stats_follow_clock_reference() {
    let data = Dataset::builtin();
    let stats = dashboard_stats(&data, DueDateReference::SystemClock, date(2026, 2, 19));
    assert_eq!(stats.due_today, 1);
    assert_eq!(stats.reference_date, date(2026, 2, 19));
    assert!(!stats.reference_fixed);

    let stats = dashboard_stats(&data, DueDateReference::SystemClock, date(2026, 3, 1));
    assert_eq!(stats.due_today, 0);
}

#[test]
fn builtin_task_counts_drift_from_tasks() {
    let data = Dataset::builtin();
    let drift: Vec<(String, u32, usize)> = task_count_drift(&data)
        .into_iter()
        .map(|entry| (entry.project_id, entry.stored, entry.actual))
        .collect();
    assert_eq!(
        drift,
        vec![
            ("proj-1".to_string(), 12, 4),
            ("proj-2".to_string(), 8, 2),
            ("proj-3".to_string(), 24, 4),
        ]
    );
}

#[test]
fn consistent_counts_report_no_drift() {
    let me = user("me");
    let project = Project {
        id: "p".to_string(),
        name: "P".to_string(),
        description: String::new(),
        color: String::new(),
        members: vec![me.clone()],
        task_count: 1,
    };
    let data = Dataset::new(
        vec![me.clone()],
        vec![project],
        vec![task("a", "p", TaskStatus::Todo, Some(&me))],
        "me",
    )
    .expect("dataset");
    assert!(task_count_drift(&data).iter().all(|entry| entry.is_consistent()));
}
