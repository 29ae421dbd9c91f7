//! flowboard projects command implementation.

use crate::error::Result;
use crate::model::User;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::query;

use super::Session;

#[derive(serde::Serialize)]
struct ProjectSummary<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    color: &'a str,
    members: &'a [User],
    task_count: u32,
    actual_task_count: usize,
}

#[derive(serde::Serialize)]
struct ProjectListOutput<'a> {
    total: usize,
    consistent: bool,
    projects: Vec<ProjectSummary<'a>>,
}

pub fn run_list(session: Session, output: OutputOptions) -> Result<()> {
    let data = &session.data;
    let drift = query::task_count_drift(data);

    let mut human = HumanOutput::new("Projects");
    human.push_summary("Total", data.projects().len().to_string());

    let mut projects = Vec::with_capacity(data.projects().len());
    for (project, counts) in data.projects().iter().zip(&drift) {
        let members = project
            .members
            .iter()
            .map(|member| member.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        human.push_detail(format!(
            "{} {} ({} tasks) [{}]",
            project.id, project.name, project.task_count, members
        ));
        if !counts.is_consistent() {
            tracing::warn!(
                project = %project.id,
                stored = counts.stored,
                actual = counts.actual,
                "stored task count differs from tasks"
            );
            human.push_warning(format!(
                "{} says {} tasks but has {}",
                project.id, counts.stored, counts.actual
            ));
        }
        projects.push(ProjectSummary {
            id: &project.id,
            name: &project.name,
            description: &project.description,
            color: &project.color,
            members: &project.members,
            task_count: project.task_count,
            actual_task_count: counts.actual,
        });
    }
    if let Some(first) = data.projects().first() {
        human.push_next_step(format!("flowboard page /projects/{}", first.id));
    }

    let result = ProjectListOutput {
        total: projects.len(),
        consistent: drift.iter().all(|counts| counts.is_consistent()),
        projects,
    };
    emit_success(output, "projects", &result, Some(&human))
}
