//! Notes and the things they are attached to.

use super::record::{Commit, Issue, MergeRequest, PersonalSnippet, Project, ProjectSnippet};
use serde::{Deserialize, Serialize};

/// Note flavour. All flavours on the same noteable share one URL rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    #[default]
    Note,
    DiffNote,
    DiscussionNote,
    LegacyDiffNote,
}

impl NoteType {
    /// Map a host type tag (`"DiffNote"`, ...) to a flavour.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Note" => Some(Self::Note),
            "DiffNote" => Some(Self::DiffNote),
            "DiscussionNote" => Some(Self::DiscussionNote),
            "LegacyDiffNote" => Some(Self::LegacyDiffNote),
            _ => None,
        }
    }
}

/// What kind of record a note is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteableType {
    Commit,
    Issue,
    MergeRequest,
    ProjectSnippet,
    PersonalSnippet,
}

impl NoteableType {
    /// Map a `noteable_type` value to a noteable type with a URL rule.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Commit" => Some(Self::Commit),
            "Issue" => Some(Self::Issue),
            "MergeRequest" => Some(Self::MergeRequest),
            "ProjectSnippet" => Some(Self::ProjectSnippet),
            "PersonalSnippet" => Some(Self::PersonalSnippet),
            _ => None,
        }
    }
}

/// The materialized noteable, when the host provides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Noteable {
    Commit(Commit),
    Issue(Issue),
    MergeRequest(MergeRequest),
    ProjectSnippet(ProjectSnippet),
    PersonalSnippet(PersonalSnippet),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    #[serde(default)]
    pub note_type: NoteType,
    pub noteable_type: NoteableType,
    pub noteable_id: Option<u64>,
    /// Set for notes on commits, whose noteable has no numeric id.
    pub commit_id: Option<String>,
    pub project: Option<Project>,
    pub noteable: Option<Noteable>,
}

impl Note {
    pub fn new(id: u64, noteable_type: NoteableType) -> Self {
        Self {
            id,
            note_type: NoteType::Note,
            noteable_type,
            noteable_id: None,
            commit_id: None,
            project: None,
            noteable: None,
        }
    }

    /// Project-scoped number of the issue this note is on.
    pub fn issue_iid(&self) -> Option<u64> {
        match self.noteable.as_ref()? {
            Noteable::Issue(issue) => Some(issue.iid),
            _ => None,
        }
    }

    /// Project-scoped number of the merge request this note is on.
    pub fn merge_request_iid(&self) -> Option<u64> {
        match self.noteable.as_ref()? {
            Noteable::MergeRequest(mr) => Some(mr.iid),
            _ => None,
        }
    }
}
