//! flowboard task command implementations.

use crate::error::{Error, Result};
use crate::model::{Task, TaskStatus};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::query;
use crate::ui::components::{format_comment_time, format_due_long, format_due_short};

use super::Session;

pub struct ListOptions {
    pub project: Option<String>,
    pub status: Option<String>,
    pub mine: bool,
    pub output: OutputOptions,
}

pub struct ShowOptions {
    pub id: String,
    pub output: OutputOptions,
}

#[derive(serde::Serialize)]
struct TaskListOutput<'a> {
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
    mine: bool,
    tasks: Vec<&'a Task>,
}

fn list_line(task: &Task) -> String {
    let mut line = format!(
        "{} [{}] {} ({})",
        task.id,
        task.status.as_str(),
        task.title,
        task.priority
    );
    if let Some(assignee) = task.assignee.as_ref() {
        line.push_str(&format!(" @{}", assignee.name));
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!(" due {}", format_due_short(due)));
    }
    line
}

pub fn run_list(session: Session, options: ListOptions) -> Result<()> {
    let status = options
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()?;
    let data = &session.data;

    let tasks: Vec<&Task> = match (options.project.as_deref(), status) {
        (Some(project), Some(status)) => query::tasks_by_project_and_status(data, project, status),
        (Some(project), None) => query::tasks_by_project(data, project),
        (None, Some(_)) => {
            return Err(Error::InvalidArgument(
                "--status requires --project".to_string(),
            ))
        }
        (None, None) if options.mine => query::todays_tasks_for_current_user(data),
        (None, None) => data.tasks().iter().collect(),
    };

    let mut human = HumanOutput::new(if options.mine {
        format!("Tasks for {}", data.current_user().name)
    } else {
        "Tasks".to_string()
    });
    human.push_summary("Total", tasks.len().to_string());
    if let Some(project) = options.project.as_deref() {
        human.push_summary("Project", project.to_string());
        if data.project(project).is_none() {
            human.push_warning(format!("no project with id '{project}'"));
        }
    }
    if let Some(status) = status {
        human.push_summary("Status", status.label());
    }
    for task in &tasks {
        human.push_detail(list_line(task));
    }
    if let Some(first) = tasks.first() {
        human.push_next_step(format!("flowboard task {}", first.id));
    }

    let output = TaskListOutput {
        total: tasks.len(),
        project: options.project.as_deref(),
        status,
        mine: options.mine,
        tasks,
    };
    emit_success(options.output, "tasks", &output, Some(&human))
}

pub fn run_show(session: Session, options: ShowOptions) -> Result<()> {
    let task = session
        .data
        .task(&options.id)
        .ok_or_else(|| Error::TaskNotFound(options.id.clone()))?;

    let mut human = HumanOutput::new(format!("Task {}: {}", task.id, task.title));
    human.push_summary("Status", task.status.label());
    human.push_summary("Priority", task.priority.as_str());
    let project = session
        .data
        .project(&task.project_id)
        .map(|project| project.name.clone())
        .unwrap_or_else(|| task.project_id.clone());
    human.push_summary("Project", project);
    human.push_summary(
        "Assignee",
        task.assignee
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_else(|| "Unassigned".to_string()),
    );
    human.push_summary(
        "Due date",
        task.due_date
            .map(format_due_long)
            .unwrap_or_else(|| "No due date".to_string()),
    );
    human.push_summary(
        "Description",
        task.description
            .clone()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| "No description added yet.".to_string()),
    );
    human.push_summary("Comments", task.comment_count().to_string());
    for comment in task.comments.iter().flatten() {
        human.push_detail(format!(
            "{} ({}): {}",
            comment.author.name,
            format_comment_time(comment.created_at),
            comment.content
        ));
    }
    human.push_next_step(format!(
        "flowboard page /projects/{} --open {}",
        task.project_id, task.id
    ));

    emit_success(options.output, "task", task, Some(&human))
}
