//! Path builder table.
//!
//! One builder per [`Kind`]. A builder returns `None` as soon as a relation
//! or attribute it needs is missing; the composer turns that into an empty
//! URL.

use super::{Kind, UrlOptions};
use crate::entity::{Entity, Note};

/// Builds the path for one kind.
pub type PathBuilder = fn(&Entity, &UrlOptions) -> Option<String>;

/// Look up the builder for `kind`.
pub fn builder(kind: Kind) -> PathBuilder {
    match kind {
        Kind::Project => project,
        Kind::Group => group,
        Kind::User => user,
        Kind::Commit => commit,
        Kind::Issue => issue,
        Kind::MergeRequest => merge_request,
        Kind::ProjectMilestone => project_milestone,
        Kind::GroupMilestone => group_milestone,
        Kind::ProjectSnippet => project_snippet,
        Kind::PersonalSnippet => personal_snippet,
        Kind::WikiHome => wiki_home,
        Kind::WikiPage => wiki_page,
        Kind::CiBuild => ci_build,
        Kind::Design => design,
        Kind::NoteOnCommit => note_on_commit,
        Kind::NoteOnIssue => note_on_issue,
        Kind::NoteOnMergeRequest => note_on_merge_request,
        Kind::NoteOnProjectSnippet => note_on_project_snippet,
        Kind::NoteOnPersonalSnippet => note_on_personal_snippet,
    }
}

/// Build the path for an already classified entity, rendering modifiers applied.
///
/// `entity` must be the concrete record returned by [`classify`](super::classify).
pub fn build_path(kind: Kind, entity: &Entity, options: &UrlOptions) -> Option<String> {
    builder(kind)(entity, options)
}

// ============================================================================
// project-level records
// ============================================================================

fn project(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Project(project) = entity else {
        return None;
    };
    Some(format!("/{}", project.full_path))
}

fn group(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Group(group) = entity else {
        return None;
    };
    Some(format!("/groups/{}", group.full_path))
}

fn user(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::User(user) = entity else {
        return None;
    };
    Some(format!("/{}", user.full_path()))
}

fn commit(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Commit(commit) = entity else {
        return None;
    };
    let project = commit.project.as_ref()?;
    Some(format!("/{}/-/commit/{}", project.full_path, commit.id))
}

fn issue(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Issue(issue) = entity else {
        return None;
    };
    let project = issue.project.as_ref()?;
    Some(format!("/{}/-/issues/{}", project.full_path, issue.iid))
}

fn merge_request(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::MergeRequest(mr) = entity else {
        return None;
    };
    let project = mr.project.as_ref()?;
    Some(format!("/{}/-/merge_requests/{}", project.full_path, mr.iid))
}

fn project_milestone(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Milestone(milestone) = entity else {
        return None;
    };
    let project = milestone.project.as_ref()?;
    Some(format!("/{}/-/milestones/{}", project.full_path, milestone.iid))
}

fn group_milestone(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Milestone(milestone) = entity else {
        return None;
    };
    let group = milestone.group.as_ref()?;
    Some(format!("/groups/{}/-/milestones/{}", group.full_path, milestone.iid))
}

fn ci_build(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::CiBuild(build) = entity else {
        return None;
    };
    let project = build.project.as_ref()?;
    Some(format!("/{}/-/jobs/{}", project.full_path, build.id))
}

// ============================================================================
// snippets & wikis
// ============================================================================

fn project_snippet(entity: &Entity, options: &UrlOptions) -> Option<String> {
    let Entity::ProjectSnippet(snippet) = entity else {
        return None;
    };
    let project = snippet.project.as_ref()?;
    let path = format!("/{}/snippets/{}", project.full_path, snippet.id);
    Some(with_raw(path, options))
}

fn personal_snippet(entity: &Entity, options: &UrlOptions) -> Option<String> {
    let Entity::PersonalSnippet(snippet) = entity else {
        return None;
    };
    Some(with_raw(format!("/snippets/{}", snippet.id), options))
}

/// `raw` switches a snippet link to its raw download.
fn with_raw(mut path: String, options: &UrlOptions) -> String {
    if options.raw {
        path.push_str("/raw");
    }
    path
}

fn wiki_home(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::Wiki(wiki) = entity else {
        return None;
    };
    let container = wiki.container.as_ref()?;
    Some(format!("/{}/-/wikis/home", container.full_path))
}

fn wiki_page(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let Entity::WikiPage(page) = entity else {
        return None;
    };
    let base = page.wiki.as_ref()?.wiki_base_path()?;
    Some(format!("{}/{}", base, page.slug))
}

// ============================================================================
// designs
// ============================================================================

fn design(entity: &Entity, options: &UrlOptions) -> Option<String> {
    let Entity::Design(design) = entity else {
        return None;
    };
    let project = design.project.as_ref()?;
    Some(format!(
        "/{}/-/design_management/designs/{}/{}",
        project.full_path,
        design.id,
        design_variant(options)
    ))
}

/// Trailing segment of a design image: a ref (optionally resized) or the raw image.
fn design_variant(options: &UrlOptions) -> String {
    match (&options.git_ref, &options.size) {
        (Some(git_ref), Some(size)) => format!("{git_ref}/resized_image/{size}"),
        (Some(git_ref), None) => git_ref.clone(),
        (None, _) => "raw_image".to_string(),
    }
}

// ============================================================================
// notes
// ============================================================================

fn as_note(entity: &Entity) -> Option<&Note> {
    match entity {
        Entity::Note(note) => Some(note),
        _ => None,
    }
}

fn note_on_commit(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let note = as_note(entity)?;
    let project = note.project.as_ref()?;
    let commit_id = note.commit_id.as_deref()?;
    Some(format!("/{}/-/commit/{}#note_{}", project.full_path, commit_id, note.id))
}

fn note_on_issue(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let note = as_note(entity)?;
    let project = note.project.as_ref()?;
    let iid = note.issue_iid()?;
    Some(format!("/{}/-/issues/{}#note_{}", project.full_path, iid, note.id))
}

fn note_on_merge_request(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let note = as_note(entity)?;
    let project = note.project.as_ref()?;
    let iid = note.merge_request_iid()?;
    Some(format!(
        "/{}/-/merge_requests/{}#note_{}",
        project.full_path, iid, note.id
    ))
}

fn note_on_project_snippet(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let note = as_note(entity)?;
    let project = note.project.as_ref()?;
    let snippet_id = note.noteable_id?;
    Some(format!("/{}/snippets/{}#note_{}", project.full_path, snippet_id, note.id))
}

fn note_on_personal_snippet(entity: &Entity, _: &UrlOptions) -> Option<String> {
    let note = as_note(entity)?;
    let snippet_id = note.noteable_id?;
    Some(format!("/snippets/{}#note_{}", snippet_id, note.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{
        Design, Issue, MergeRequest, Noteable, NoteableType, PersonalSnippet, Project, Wiki,
        WikiPage,
    };

    fn design_entity() -> Entity {
        Entity::from(Design {
            id: 7,
            project: Some(Project::new("g/p")),
        })
    }

    #[test]
    fn test_design_variants() {
        let entity = design_entity();
        let path = |options: UrlOptions| build_path(Kind::Design, &entity, &options).unwrap();

        assert_eq!(
            path(UrlOptions::new()),
            "/g/p/-/design_management/designs/7/raw_image"
        );
        assert_eq!(
            path(UrlOptions::new().with_ref("feature")),
            "/g/p/-/design_management/designs/7/feature"
        );
        assert_eq!(
            path(UrlOptions::new().with_ref("feature").with_size("small")),
            "/g/p/-/design_management/designs/7/feature/resized_image/small"
        );
        // size alone is meaningless without a ref
        assert_eq!(
            path(UrlOptions::new().with_size("small")),
            "/g/p/-/design_management/designs/7/raw_image"
        );
    }

    #[test]
    fn test_raw_only_affects_snippets() {
        let snippet = Entity::from(PersonalSnippet { id: 42 });
        assert_eq!(
            build_path(Kind::PersonalSnippet, &snippet, &UrlOptions::new().raw()).as_deref(),
            Some("/snippets/42/raw")
        );

        let project = Entity::from(Project::new("g/p"));
        assert_eq!(
            build_path(Kind::Project, &project, &UrlOptions::new().raw()).as_deref(),
            Some("/g/p")
        );
        assert_eq!(
            build_path(Kind::Design, &design_entity(), &UrlOptions::new().raw()).as_deref(),
            Some("/g/p/-/design_management/designs/7/raw_image")
        );
    }

    #[test]
    fn test_wiki_page_without_container() {
        let page = Entity::from(WikiPage {
            slug: "home".into(),
            wiki: Some(Wiki::default()),
        });
        assert_eq!(build_path(Kind::WikiPage, &page, &UrlOptions::new()), None);
    }

    #[test]
    fn test_issue_note_without_noteable() {
        let mut note = Note::new(1, NoteableType::Issue);
        note.project = Some(Project::new("g/p"));
        assert_eq!(
            build_path(Kind::NoteOnIssue, &Entity::from(note), &UrlOptions::new()),
            None
        );
    }

    #[test]
    fn test_issue_note_on_merge_request_noteable() {
        let mut note = Note::new(5, NoteableType::Issue);
        note.project = Some(Project::new("g/p"));
        note.noteable = Some(Noteable::MergeRequest(MergeRequest {
            iid: 99,
            ..Default::default()
        }));
        let entity = Entity::from(note);
        assert_eq!(build_path(Kind::NoteOnIssue, &entity, &UrlOptions::new()), None);

        let Entity::Note(mut note) = entity else {
            unreachable!()
        };
        note.noteable_type = NoteableType::MergeRequest;
        note.noteable = Some(Noteable::Issue(Issue {
            iid: 12,
            ..Default::default()
        }));
        assert_eq!(
            build_path(Kind::NoteOnMergeRequest, &Entity::from(note), &UrlOptions::new()),
            None
        );
    }

    #[test]
    fn test_mismatched_kind_yields_none() {
        let project = Entity::from(Project::new("g/p"));
        assert_eq!(build_path(Kind::Commit, &project, &UrlOptions::new()), None);
    }
}
