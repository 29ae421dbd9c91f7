//! The in-memory dataset every view reads from.
//!
//! The builtin dataset is a fixed literal compiled into the binary. A
//! different dataset can be supplied as a JSON file; it is read once at
//! startup and never written back.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Comment, Project, Task, TaskPriority, TaskStatus, User};

/// Identifier of the builtin "me" user.
pub const BUILTIN_CURRENT_USER_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    current_user: usize,
}

/// On-disk shape of a dataset override file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub current_user: String,
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl Dataset {
    /// Build a dataset from arbitrary records.
    ///
    /// Only the current user is checked. Tasks pointing at unknown projects
    /// are kept as-is; they simply never show up on a project page.
    pub fn new(
        users: Vec<User>,
        projects: Vec<Project>,
        tasks: Vec<Task>,
        current_user_id: &str,
    ) -> Result<Self> {
        let current_user = users
            .iter()
            .position(|user| user.id == current_user_id)
            .ok_or_else(|| {
                Error::InvalidDataset(format!(
                    "current user '{current_user_id}' is not a known user"
                ))
            })?;
        Ok(Self {
            users,
            projects,
            tasks,
            current_user,
        })
    }

    /// Load a dataset override file (JSON, see [`DatasetFile`]).
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DatasetFile = serde_json::from_str(&content)
            .map_err(|err| Error::InvalidDataset(format!("{}: {err}", path.display())))?;
        let dataset = Self::from_file(file)
            .map_err(|err| match err {
                Error::InvalidDataset(reason) => {
                    Error::InvalidDataset(format!("{}: {reason}", path.display()))
                }
                other => other,
            })?;
        tracing::info!(
            path = %path.display(),
            users = dataset.users.len(),
            projects = dataset.projects.len(),
            tasks = dataset.tasks.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn from_file(file: DatasetFile) -> Result<Self> {
        Self::new(file.users, file.projects, file.tasks, &file.current_user)
    }

    pub fn to_file(&self) -> DatasetFile {
        DatasetFile {
            current_user: self.current_user_id().to_string(),
            users: self.users.clone(),
            projects: self.projects.clone(),
            tasks: self.tasks.clone(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn current_user(&self) -> &User {
        &self.users[self.current_user]
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user().id
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// The fixed demo dataset.
    pub fn builtin() -> Self {
        let users = vec![
            user("1", "Fisnik", "fisnik@demo.com", "F"),
            user("2", "Alex Chen", "alex@demo.com", "A"),
            user("3", "Sofia Rivera", "sofia@demo.com", "S"),
            user("4", "Marcus Webb", "marcus@demo.com", "M"),
        ];
        let [fisnik, alex, sofia, marcus] = [0, 1, 2, 3].map(|idx| users[idx].clone());

        let projects = vec![
            Project {
                id: "proj-1".to_string(),
                name: "Website Redesign".to_string(),
                description: "Complete overhaul of the marketing site with new brand guidelines"
                    .to_string(),
                color: "hsl(239 84% 67%)".to_string(),
                members: vec![fisnik.clone(), alex.clone(), sofia.clone()],
                task_count: 12,
            },
            Project {
                id: "proj-2".to_string(),
                name: "Q2 Marketing Campaign".to_string(),
                description: "Launch multi-channel campaign for Q2 product release".to_string(),
                color: "hsl(142 71% 45%)".to_string(),
                members: vec![fisnik.clone(), marcus.clone()],
                task_count: 8,
            },
            Project {
                id: "proj-3".to_string(),
                name: "Mobile App v1".to_string(),
                description: "First version of the mobile companion app".to_string(),
                color: "hsl(38 92% 50%)".to_string(),
                members: vec![fisnik.clone(), alex.clone(), sofia.clone(), marcus.clone()],
                task_count: 24,
            },
        ];

        let tasks = vec![
            Task {
                comments: Some(vec![
                    comment(
                        "c1",
                        "I've shared some initial wireframes in Figma. Let me know your thoughts!",
                        &alex,
                        WIREFRAMES_SHARED_AT,
                    ),
                    comment(
                        "c2",
                        "Looks great! I'd suggest making the CTA more prominent.",
                        &fisnik,
                        CTA_FEEDBACK_AT,
                    ),
                ]),
                ..task(
                    "task-1",
                    "Design hero section",
                    "Create a compelling hero section with clear value proposition and CTA",
                    TaskStatus::InProgress,
                    TaskPriority::High,
                    &fisnik,
                    date(2026, 2, 19),
                    "proj-1",
                )
            },
            task(
                "task-2",
                "Write copy for landing page",
                "Draft compelling copy for all landing page sections",
                TaskStatus::Todo,
                TaskPriority::Medium,
                &sofia,
                date(2026, 2, 20),
                "proj-1",
            ),
            task(
                "task-3",
                "Review pull request #42",
                "Review and approve the authentication flow PR",
                TaskStatus::Todo,
                TaskPriority::Urgent,
                &fisnik,
                date(2026, 2, 18),
                "proj-3",
            ),
            task(
                "task-4",
                "Set up email templates",
                "Design and implement transactional email templates",
                TaskStatus::Todo,
                TaskPriority::Low,
                &marcus,
                date(2026, 2, 22),
                "proj-2",
            ),
            task(
                "task-5",
                "Implement user onboarding flow",
                "Build the step-by-step onboarding experience for new users",
                TaskStatus::InProgress,
                TaskPriority::High,
                &alex,
                date(2026, 2, 21),
                "proj-3",
            ),
            task(
                "task-6",
                "Fix navigation responsiveness",
                "Ensure navigation works perfectly on all screen sizes",
                TaskStatus::Done,
                TaskPriority::Medium,
                &fisnik,
                None,
                "proj-1",
            ),
            task(
                "task-7",
                "Create social media assets",
                "Design banner images and post templates for Q2 campaign",
                TaskStatus::Todo,
                TaskPriority::Medium,
                &sofia,
                date(2026, 2, 25),
                "proj-2",
            ),
            task(
                "task-8",
                "API integration testing",
                "Write and run integration tests for all API endpoints",
                TaskStatus::InProgress,
                TaskPriority::High,
                &marcus,
                date(2026, 2, 19),
                "proj-3",
            ),
            task(
                "task-9",
                "Update brand color palette",
                "Refresh the color palette based on new brand guidelines",
                TaskStatus::Done,
                TaskPriority::Low,
                &sofia,
                None,
                "proj-1",
            ),
            task(
                "task-10",
                "Performance optimization",
                "Optimize bundle size and loading performance",
                TaskStatus::Todo,
                TaskPriority::High,
                &alex,
                date(2026, 2, 23),
                "proj-3",
            ),
        ];

        let current_user = users
            .iter()
            .position(|user| user.id == BUILTIN_CURRENT_USER_ID)
            .unwrap_or(0);
        Self {
            users,
            projects,
            tasks,
            current_user,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

fn user(id: &str, name: &str, email: &str, avatar: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

const WIREFRAMES_SHARED_AT: NaiveDateTime = at(2026, 2, 17, 10, 30);
const CTA_FEEDBACK_AT: NaiveDateTime = at(2026, 2, 17, 11, 15);

/// Wall-clock time for a builtin literal; an invalid literal fails the build.
const fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => match date.and_hms_opt(hour, minute, 0) {
            Some(at) => at,
            None => panic!("invalid builtin time"),
        },
        None => panic!("invalid builtin date"),
    }
}

fn comment(id: &str, content: &str, author: &User, created_at: NaiveDateTime) -> Comment {
    Comment {
        id: id.to_string(),
        content: content.to_string(),
        author: author.clone(),
        created_at: created_at.and_utc(),
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    assignee: &User,
    due_date: Option<NaiveDate>,
    project_id: &str,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        status,
        priority,
        assignee: Some(assignee.clone()),
        due_date,
        project_id: project_id.to_string(),
        comments: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_identical_on_every_call() {
        assert_eq!(Dataset::builtin(), Dataset::builtin());
    }

    #[test]
    fn builtin_shape() {
        let data = Dataset::builtin();
        assert_eq!(data.users().len(), 4);
        assert_eq!(data.projects().len(), 3);
        assert_eq!(data.tasks().len(), 10);
        assert_eq!(data.current_user().name, "Fisnik");
        let hero = data.task("task-1").expect("task-1");
        assert_eq!(hero.comment_count(), 2);
        let first = &hero.comments.as_ref().expect("comments")[0];
        assert_eq!(first.created_at.to_rfc3339(), "2026-02-17T10:30:00+00:00");
        assert_eq!(hero.due_date, NaiveDate::from_ymd_opt(2026, 2, 19));
        assert!(data.task("task-6").unwrap().due_date.is_none());
    }

    #[test]
    fn new_rejects_unknown_current_user() {
        let err = Dataset::new(Vec::new(), Vec::new(), Vec::new(), "ghost").unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn from_json_path_reads_serialized_dataset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        let json = serde_json::to_string(&Dataset::builtin().to_file()).expect("serialize");
        std::fs::write(&path, json).expect("write dataset");

        let loaded = Dataset::from_json_path(&path).expect("load");
        assert_eq!(loaded, Dataset::builtin());
    }

    #[test]
    fn from_json_path_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Dataset::from_json_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::ReadFile { .. }));
    }

    #[test]
    fn from_json_path_reports_file_on_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"users\": 3 }").expect("write dataset");

        match Dataset::from_json_path(&path) {
            Err(Error::InvalidDataset(reason)) => assert!(reason.contains("broken.json")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
