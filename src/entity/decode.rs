//! JSON decoding of host entities.
//!
//! The host tags each object with its class name in `"type"`. Namespaced
//! class names (`Ci::Build`, `DesignManagement::Design`) are accepted next
//! to the short ones. Tags without a URL rule decode to [`Entity::Unknown`]
//! so that the resolver, not the decoder, reports them. The same holds for a
//! note attached to something without a rule (`"Epic"`, ...).

use super::{Entity, Note, NoteType, NoteableType};
use crate::error::UrlError;
use serde_json::Value;

impl Entity {
    /// Decode one entity from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, UrlError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode one entity from a parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, UrlError> {
        let type_name = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(UrlError::MissingType)?
            .to_string();

        let entity = match type_name.as_str() {
            "Project" => Self::Project(serde_json::from_value(value)?),
            "Group" => Self::Group(serde_json::from_value(value)?),
            "User" => Self::User(serde_json::from_value(value)?),
            "Commit" => Self::Commit(serde_json::from_value(value)?),
            "Issue" => Self::Issue(serde_json::from_value(value)?),
            "MergeRequest" => Self::MergeRequest(serde_json::from_value(value)?),
            "Milestone" => Self::Milestone(serde_json::from_value(value)?),
            "ProjectSnippet" => Self::ProjectSnippet(serde_json::from_value(value)?),
            "PersonalSnippet" => Self::PersonalSnippet(serde_json::from_value(value)?),
            "Wiki" | "ProjectWiki" => Self::Wiki(serde_json::from_value(value)?),
            "WikiPage" => Self::WikiPage(serde_json::from_value(value)?),
            "CiBuild" | "Ci::Build" => Self::CiBuild(serde_json::from_value(value)?),
            "Design" | "DesignManagement::Design" => Self::Design(serde_json::from_value(value)?),
            tag => match NoteType::from_tag(tag) {
                Some(note_type) => Self::note_from_value(value, tag, note_type)?,
                None => Self::unknown(tag),
            },
        };

        Ok(entity)
    }

    /// Decode a note once its `noteable_type` is settled.
    ///
    /// The host writes `"Snippet"` for notes on both snippet kinds, the
    /// embedded noteable's own tag tells which one it is.
    fn note_from_value(mut value: Value, tag: &str, note_type: NoteType) -> Result<Self, UrlError> {
        let noteable_tag = match value.get("noteable_type").and_then(Value::as_str) {
            Some("Snippet") => value
                .pointer("/noteable/type")
                .and_then(Value::as_str)
                .or(Some("Snippet")),
            other => other,
        }
        .map(str::to_string);

        if let Some(noteable_tag) = noteable_tag {
            if NoteableType::from_tag(&noteable_tag).is_none() {
                return Ok(Self::unknown(format!("{tag} on {noteable_tag}")));
            }
            value["noteable_type"] = Value::String(noteable_tag);
        }

        let mut note: Note = serde_json::from_value(value)?;
        note.note_type = note_type;
        Ok(Self::Note(note))
    }

    /// Decode either a single entity or an array of entities.
    pub fn many_from_json(json: &str) -> Result<Vec<Self>, UrlError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            value => Ok(vec![Self::from_value(value)?]),
        }
    }
}
