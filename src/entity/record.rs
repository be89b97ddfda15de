//! Plain domain records.
//!
//! Records mirror what the host hands over: own identifiers plus whatever
//! relations were materialized. Every relation is optional; the resolver
//! decides what a missing one means.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    pub full_path: String,
}

impl Project {
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            id: 0,
            full_path: full_path.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: u64,
    pub full_path: String,
}

impl Group {
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            id: 0,
            full_path: full_path.into(),
        }
    }
}

/// A user; its namespace path is the username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    pub username: String,
}

impl User {
    #[inline]
    pub fn full_path(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    pub id: String,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: u64,
    pub iid: u64,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequest {
    #[serde(default)]
    pub id: u64,
    pub iid: u64,
    pub project: Option<Project>,
}

/// A milestone belongs to either a project or a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default)]
    pub id: u64,
    pub iid: u64,
    pub project_id: Option<u64>,
    pub project: Option<Project>,
    pub group_id: Option<u64>,
    pub group: Option<Group>,
}

impl Milestone {
    /// Scope is decided by `project_id` alone, an embedded project without it
    /// does not make the milestone project-scoped.
    #[inline]
    pub fn is_project_milestone(&self) -> bool {
        self.project_id.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnippet {
    pub id: u64,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalSnippet {
    pub id: u64,
}

/// A project wiki.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wiki {
    pub container: Option<Project>,
}

impl Wiki {
    /// Path every page of this wiki lives under: `/{container}/-/wikis`.
    pub fn wiki_base_path(&self) -> Option<String> {
        let container = self.container.as_ref()?;
        Some(format!("/{}/-/wikis", container.full_path))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    pub slug: String,
    pub wiki: Option<Wiki>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiBuild {
    pub id: u64,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    pub id: u64,
    pub project: Option<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_base_path() {
        let wiki = Wiki {
            container: Some(Project::new("gitlab-org/gitlab")),
        };
        assert_eq!(wiki.wiki_base_path().as_deref(), Some("/gitlab-org/gitlab/-/wikis"));
        assert_eq!(Wiki::default().wiki_base_path(), None);
    }

    #[test]
    fn test_milestone_scope() {
        let group_milestone = Milestone {
            iid: 1,
            group_id: Some(9),
            ..Default::default()
        };
        assert!(!group_milestone.is_project_milestone());

        let project_milestone = Milestone {
            iid: 1,
            project_id: Some(3),
            ..Default::default()
        };
        assert!(project_milestone.is_project_milestone());

        let embedded_project_only = Milestone {
            iid: 1,
            project: Some(Project::new("g/p")),
            group_id: Some(9),
            ..Default::default()
        };
        assert!(!embedded_project_only.is_project_milestone());
    }

    #[test]
    fn test_optional_relations_default_to_none() {
        let commit: Commit = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();
        assert_eq!(commit.project, None);

        let issue: Issue = serde_json::from_str(
            r#"{"iid": 4, "project": {"full_path": "g/p"}, "title": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(issue.project, Some(Project::new("g/p")));
    }
}
