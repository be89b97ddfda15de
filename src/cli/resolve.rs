//! `urlbuilder resolve`
//!
//! Reads one JSON entity or an array of them and prints one URL per line.
//! Unresolvable entities print an empty line so that output lines stay
//! aligned with the input. Unsupported types are reported on stderr and fail
//! the command after every entity has been processed.

use super::ResolveArgs;
use crate::entity::Entity;
use crate::loader::BatchLoader;
use crate::resolver::{UrlOptions, resolve};
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use std::io::{self, Read, Write};
use std::path::Path;

pub fn run(args: &ResolveArgs) -> Result<()> {
    let input = read_input(&args.input)?;
    let entities = Entity::many_from_json(&input)
        .with_context(|| format!("failed to decode entities from {}", args.input.display()))?;

    let entities = if args.deferred {
        defer_all(entities)
    } else {
        entities
    };

    let options = UrlOptions::from(args);
    let mut out = io::stdout().lock();
    let failures = resolve_all(&entities, &options, &mut out)?;
    out.flush()?;

    if failures > 0 {
        bail!(
            "{} of {} entities could not be resolved",
            failures,
            entities.len()
        );
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Swap every entity for a placeholder served by one batch loader.
fn defer_all(entities: Vec<Entity>) -> Vec<Entity> {
    let count = entities.len();
    let loader = BatchLoader::new(move |indices: Vec<usize>| {
        indices
            .into_iter()
            .filter_map(|i| entities.get(i).map(|e| (i, e.clone())))
            .collect()
    });
    (0..count).map(|i| Entity::Deferred(loader.load(i))).collect()
}

/// Write one line per entity, returning the number of unsupported ones.
fn resolve_all(entities: &[Entity], options: &UrlOptions, out: &mut impl Write) -> Result<usize> {
    let mut failures = 0;
    for (index, entity) in entities.iter().enumerate() {
        match resolve(entity, options) {
            Ok(url) => {
                if url.is_empty() {
                    debug!("url"; "entity #{} is unresolvable", index);
                }
                writeln!(out, "{url}")?;
            }
            Err(e) => {
                log!("error"; "entity #{}: {}", index, e);
                writeln!(out)?;
                failures += 1;
            }
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Commit, PersonalSnippet, Project};

    fn lines(entities: &[Entity], options: &UrlOptions) -> (Vec<String>, usize) {
        let mut buf = Vec::new();
        let failures = resolve_all(entities, options, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        (text.lines().map(str::to_string).collect(), failures)
    }

    #[test]
    fn test_resolve_all_keeps_lines_aligned() {
        let entities = vec![
            Entity::from(Project::new("g/p")),
            Entity::from(Commit {
                id: "abc".into(),
                project: None,
            }),
            Entity::unknown("Label"),
            Entity::from(PersonalSnippet { id: 42 }),
        ];

        let (lines, failures) = lines(&entities, &UrlOptions::new().only_path().raw());
        assert_eq!(lines, vec!["/g/p", "", "", "/snippets/42/raw"]);
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_defer_all_is_transparent() {
        let eager = vec![
            Entity::from(Project::new("g/p")),
            Entity::from(PersonalSnippet { id: 1 }),
        ];
        let deferred = defer_all(eager.clone());
        assert!(deferred.iter().all(|e| matches!(e, Entity::Deferred(_))));

        let options = UrlOptions::new().only_path();
        assert_eq!(lines(&deferred, &options), lines(&eager, &options));
    }
}
