//! Kind classification.

use crate::entity::{Entity, NoteableType};
use crate::error::UrlError;
use std::fmt;

/// Closed set of URL rules.
///
/// Every resolvable entity maps to exactly one kind. Note flavours are
/// collapsed here: a diff note and a plain note on the same issue share
/// `NoteOnIssue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Project,
    Group,
    User,
    Commit,
    Issue,
    MergeRequest,
    ProjectMilestone,
    GroupMilestone,
    ProjectSnippet,
    PersonalSnippet,
    WikiHome,
    WikiPage,
    CiBuild,
    Design,
    NoteOnCommit,
    NoteOnIssue,
    NoteOnMergeRequest,
    NoteOnProjectSnippet,
    NoteOnPersonalSnippet,
}

impl Kind {
    pub const ALL: [Kind; 19] = [
        Kind::Project,
        Kind::Group,
        Kind::User,
        Kind::Commit,
        Kind::Issue,
        Kind::MergeRequest,
        Kind::ProjectMilestone,
        Kind::GroupMilestone,
        Kind::ProjectSnippet,
        Kind::PersonalSnippet,
        Kind::WikiHome,
        Kind::WikiPage,
        Kind::CiBuild,
        Kind::Design,
        Kind::NoteOnCommit,
        Kind::NoteOnIssue,
        Kind::NoteOnMergeRequest,
        Kind::NoteOnProjectSnippet,
        Kind::NoteOnPersonalSnippet,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Group => "group",
            Self::User => "user",
            Self::Commit => "commit",
            Self::Issue => "issue",
            Self::MergeRequest => "merge_request",
            Self::ProjectMilestone => "project_milestone",
            Self::GroupMilestone => "group_milestone",
            Self::ProjectSnippet => "project_snippet",
            Self::PersonalSnippet => "personal_snippet",
            Self::WikiHome => "wiki_home",
            Self::WikiPage => "wiki_page",
            Self::CiBuild => "ci_build",
            Self::Design => "design",
            Self::NoteOnCommit => "note_on_commit",
            Self::NoteOnIssue => "note_on_issue",
            Self::NoteOnMergeRequest => "note_on_merge_request",
            Self::NoteOnProjectSnippet => "note_on_project_snippet",
            Self::NoteOnPersonalSnippet => "note_on_personal_snippet",
        }
    }

    /// Human-readable path template, for listings.
    pub const fn template(self) -> &'static str {
        match self {
            Self::Project => "/{full_path}",
            Self::Group => "/groups/{full_path}",
            Self::User => "/{full_path}",
            Self::Commit => "/{project.full_path}/-/commit/{id}",
            Self::Issue => "/{project.full_path}/-/issues/{iid}",
            Self::MergeRequest => "/{project.full_path}/-/merge_requests/{iid}",
            Self::ProjectMilestone => "/{project.full_path}/-/milestones/{iid}",
            Self::GroupMilestone => "/groups/{group.full_path}/-/milestones/{iid}",
            Self::ProjectSnippet => "/{project.full_path}/snippets/{id}[/raw]",
            Self::PersonalSnippet => "/snippets/{id}[/raw]",
            Self::WikiHome => "/{container.full_path}/-/wikis/home",
            Self::WikiPage => "{wiki.wiki_base_path}/{slug}",
            Self::CiBuild => "/{project.full_path}/-/jobs/{id}",
            Self::Design => {
                "/{project.full_path}/-/design_management/designs/{id}/{ref[/resized_image/{size}]|raw_image}"
            }
            Self::NoteOnCommit => "/{project.full_path}/-/commit/{commit_id}#note_{id}",
            Self::NoteOnIssue => "/{project.full_path}/-/issues/{noteable.iid}#note_{id}",
            Self::NoteOnMergeRequest => {
                "/{project.full_path}/-/merge_requests/{noteable.iid}#note_{id}"
            }
            Self::NoteOnProjectSnippet => "/{project.full_path}/snippets/{noteable_id}#note_{id}",
            Self::NoteOnPersonalSnippet => "/snippets/{noteable_id}#note_{id}",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified entity: its kind plus the concrete record behind any placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Classified<'a> {
    pub kind: Kind,
    pub entity: &'a Entity,
}

/// Determine the URL rule for `entity`.
///
/// Deferred placeholders are forced first, so the kind always reflects the
/// materialized record. A placeholder that materializes to nothing, or a
/// record without a rule, is an [`UrlError::UnsupportedType`].
pub fn classify(entity: &Entity) -> Result<Classified<'_>, UrlError> {
    let entity = materialize(entity)?;

    let kind = match entity {
        Entity::Project(_) => Kind::Project,
        Entity::Group(_) => Kind::Group,
        Entity::User(_) => Kind::User,
        Entity::Commit(_) => Kind::Commit,
        Entity::Issue(_) => Kind::Issue,
        Entity::MergeRequest(_) => Kind::MergeRequest,
        Entity::Milestone(milestone) if milestone.is_project_milestone() => Kind::ProjectMilestone,
        Entity::Milestone(_) => Kind::GroupMilestone,
        Entity::ProjectSnippet(_) => Kind::ProjectSnippet,
        Entity::PersonalSnippet(_) => Kind::PersonalSnippet,
        Entity::Wiki(_) => Kind::WikiHome,
        Entity::WikiPage(_) => Kind::WikiPage,
        Entity::CiBuild(_) => Kind::CiBuild,
        Entity::Design(_) => Kind::Design,
        Entity::Note(note) => match note.noteable_type {
            NoteableType::Commit => Kind::NoteOnCommit,
            NoteableType::Issue => Kind::NoteOnIssue,
            NoteableType::MergeRequest => Kind::NoteOnMergeRequest,
            NoteableType::ProjectSnippet => Kind::NoteOnProjectSnippet,
            NoteableType::PersonalSnippet => Kind::NoteOnPersonalSnippet,
        },
        Entity::Deferred(_) | Entity::Unknown { .. } => {
            return Err(UrlError::unsupported(entity.type_name()));
        }
    };

    Ok(Classified { kind, entity })
}

/// Force placeholders (possibly nested) down to a concrete record.
fn materialize(mut entity: &Entity) -> Result<&Entity, UrlError> {
    while let Entity::Deferred(lazy) = entity {
        entity = lazy.force().ok_or_else(|| UrlError::unsupported("none"))?;
    }
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Milestone, Note, NoteType, Project};
    use crate::loader::Lazy;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Kind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Kind::ALL.len());
    }

    #[test]
    fn test_classify_project() {
        let entity = Entity::from(Project::new("g/p"));
        assert_eq!(classify(&entity).unwrap().kind, Kind::Project);
    }

    #[test]
    fn test_classify_milestone_scope() {
        let project_milestone = Entity::from(Milestone {
            iid: 1,
            project_id: Some(1),
            ..Default::default()
        });
        let group_milestone = Entity::from(Milestone {
            iid: 1,
            group_id: Some(1),
            ..Default::default()
        });
        assert_eq!(classify(&project_milestone).unwrap().kind, Kind::ProjectMilestone);
        assert_eq!(classify(&group_milestone).unwrap().kind, Kind::GroupMilestone);
    }

    #[test]
    fn test_note_flavours_collapse() {
        for note_type in [
            NoteType::Note,
            NoteType::DiffNote,
            NoteType::DiscussionNote,
            NoteType::LegacyDiffNote,
        ] {
            let mut note = Note::new(1, NoteableType::MergeRequest);
            note.note_type = note_type;
            assert_eq!(
                classify(&Entity::from(note)).unwrap().kind,
                Kind::NoteOnMergeRequest
            );
        }
    }

    #[test]
    fn test_classify_unwraps_placeholders() {
        let entity = Entity::deferred(|| Some(Project::new("g/p").into()));
        let classified = classify(&entity).unwrap();
        assert_eq!(classified.kind, Kind::Project);
        assert!(matches!(classified.entity, Entity::Project(_)));
    }

    #[test]
    fn test_classify_nested_placeholders() {
        let inner = Lazy::ready(Entity::from(Project::new("g/p")));
        let entity = Entity::deferred(move || Some(Entity::Deferred(inner)));
        assert_eq!(classify(&entity).unwrap().kind, Kind::Project);
    }

    #[test]
    fn test_classify_empty_placeholder() {
        let entity = Entity::deferred(|| None);
        let err = classify(&entity).unwrap_err();
        assert!(matches!(err, UrlError::UnsupportedType { type_name } if type_name == "none"));
    }

    #[test]
    fn test_classify_unknown() {
        let err = classify(&Entity::unknown("Label")).unwrap_err();
        assert!(matches!(err, UrlError::UnsupportedType { type_name } if type_name == "Label"));
    }

    #[test]
    fn test_placeholder_wrapping_unknown_reports_inner_type() {
        let entity = Entity::deferred(|| Some(Entity::unknown("Label")));
        let err = classify(&entity).unwrap_err();
        assert!(matches!(err, UrlError::UnsupportedType { type_name } if type_name == "Label"));
    }
}
