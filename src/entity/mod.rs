//! Resolvable domain entities.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `record` | Plain records (project, issue, snippet, ...)    |
//! | `note`   | Notes, note flavours and noteables              |
//! | `decode` | JSON decoding keyed by the host `type` tag      |

mod decode;
mod note;
mod record;

pub use note::{Note, NoteType, Noteable, NoteableType};
pub use record::{
    CiBuild, Commit, Design, Group, Issue, MergeRequest, Milestone, PersonalSnippet, Project,
    ProjectSnippet, User, Wiki, WikiPage,
};

use crate::loader::Lazy;

/// Any entity handed to the resolver.
///
/// `Deferred` stands in for an entity that is materialized on first access;
/// `Unknown` is a host object that has no URL rule.
#[derive(Debug, Clone)]
pub enum Entity {
    Project(Project),
    Group(Group),
    User(User),
    Commit(Commit),
    Issue(Issue),
    MergeRequest(MergeRequest),
    Milestone(Milestone),
    ProjectSnippet(ProjectSnippet),
    PersonalSnippet(PersonalSnippet),
    Wiki(Wiki),
    WikiPage(WikiPage),
    CiBuild(CiBuild),
    Design(Design),
    Note(Note),
    Deferred(Lazy<Entity>),
    Unknown { type_name: String },
}

impl Entity {
    /// Wrap a loader in a deferred placeholder.
    pub fn deferred(init: impl FnOnce() -> Option<Entity> + Send + 'static) -> Self {
        Self::Deferred(Lazy::new(init))
    }

    pub fn unknown(type_name: impl Into<String>) -> Self {
        Self::Unknown {
            type_name: type_name.into(),
        }
    }

    /// Host type name, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Project(_) => "Project",
            Self::Group(_) => "Group",
            Self::User(_) => "User",
            Self::Commit(_) => "Commit",
            Self::Issue(_) => "Issue",
            Self::MergeRequest(_) => "MergeRequest",
            Self::Milestone(_) => "Milestone",
            Self::ProjectSnippet(_) => "ProjectSnippet",
            Self::PersonalSnippet(_) => "PersonalSnippet",
            Self::Wiki(_) => "Wiki",
            Self::WikiPage(_) => "WikiPage",
            Self::CiBuild(_) => "CiBuild",
            Self::Design(_) => "Design",
            Self::Note(note) => match note.note_type {
                NoteType::Note => "Note",
                NoteType::DiffNote => "DiffNote",
                NoteType::DiscussionNote => "DiscussionNote",
                NoteType::LegacyDiffNote => "LegacyDiffNote",
            },
            Self::Deferred(_) => "Deferred",
            Self::Unknown { type_name } => type_name.as_str(),
        }
    }
}

macro_rules! impl_from_record {
    ($($record:ident),* $(,)?) => {
        $(
            impl From<$record> for Entity {
                fn from(record: $record) -> Self {
                    Self::$record(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Project,
    Group,
    User,
    Commit,
    Issue,
    MergeRequest,
    Milestone,
    ProjectSnippet,
    PersonalSnippet,
    Wiki,
    WikiPage,
    CiBuild,
    Design,
    Note,
);

impl From<Lazy<Entity>> for Entity {
    fn from(lazy: Lazy<Entity>) -> Self {
        Self::Deferred(lazy)
    }
}
