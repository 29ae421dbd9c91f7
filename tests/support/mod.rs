#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;

/// Scratch working directory for CLI runs, isolated from any
/// `.flowboard.toml` or `FLOWBOARD_*` variables of the caller.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel_path);
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file(".flowboard.toml", contents)
    }

    /// A two-project dataset with one task per status and no comments.
    pub fn write_small_dataset(&self) -> PathBuf {
        let ada = json!({"id": "u1", "name": "Ada", "email": "ada@example.com", "avatar": "A"});
        let bo = json!({"id": "u2", "name": "Bo", "email": "bo@example.com", "avatar": "B"});
        let data = json!({
            "current_user": "u1",
            "users": [ada, bo],
            "projects": [
                {
                    "id": "p1",
                    "name": "Launch",
                    "description": "Ship it",
                    "color": "hsl(239 84% 67%)",
                    "members": [ada, bo],
                    "task_count": 3
                },
                {
                    "id": "p2",
                    "name": "Docs",
                    "description": "Write it down",
                    "color": "hsl(38 92% 50%)",
                    "members": [bo],
                    "task_count": 5
                }
            ],
            "tasks": [
                {
                    "id": "t1",
                    "title": "Plan launch",
                    "status": "todo",
                    "priority": "high",
                    "assignee": ada,
                    "due_date": "2026-02-18",
                    "project_id": "p1"
                },
                {
                    "id": "t2",
                    "title": "Build landing page",
                    "status": "in_progress",
                    "priority": "medium",
                    "assignee": bo,
                    "project_id": "p1"
                },
                {
                    "id": "t3",
                    "title": "Announce",
                    "status": "done",
                    "priority": "low",
                    "project_id": "p1"
                }
            ]
        });
        self.write_file(
            "board.json",
            &serde_json::to_string_pretty(&data).expect("serialize dataset"),
        )
    }

    pub fn flowboard(&self) -> Command {
        let mut cmd = Command::cargo_bin("flowboard").expect("binary");
        cmd.current_dir(self.path())
            .env_remove("FLOWBOARD_DATA")
            .env_remove("FLOWBOARD_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("valid json output")
}
