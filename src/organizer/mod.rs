// Document organizer - normalization, lookup, and grouping transforms.
// Pure functions over immutable snapshots; invoked once per build pass.

use crate::document::{NormalizedEntry, RawDocument};
use crate::error::{DocNavError, Result};
use crate::nav::Group;
use chrono::{DateTime, NaiveDate};

/// Slugify a title for display-safe use.
/// Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(input: &str) -> String {
    slug::slugify(input)
}

/// Normalize raw documents into canonical entries.
/// Deterministic and pure: the same input always yields the same entries.
/// Slugs are not deduplicated; two documents sharing a title share a slug,
/// and the display layer must tolerate that.
pub fn normalize(documents: &[RawDocument]) -> Result<Vec<NormalizedEntry>> {
    documents.iter().map(normalize_one).collect()
}

fn normalize_one(doc: &RawDocument) -> Result<NormalizedEntry> {
    // Defensive: schema validation upstream should make this unreachable
    let title = doc
        .data
        .get("title")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DocNavError::MissingTitle {
            collection: doc.collection.clone(),
            id: doc.id.clone(),
        })?;

    Ok(NormalizedEntry {
        id: doc.id.clone(),
        collection: doc.collection.clone(),
        title: slugify(title),
        path: doc.path.clone(),
        rendered: doc.rendered.clone(),
        data: doc.data.clone(),
    })
}

/// Find the entry whose source path ends with the given suffix.
///
/// Tie-break contract: if more than one entry matches, the first match in
/// input order wins. Zero matches is a configuration error - the referenced
/// document must exist.
pub fn locate<'a>(entries: &'a [NormalizedEntry], suffix: &str) -> Result<&'a NormalizedEntry> {
    entries
        .iter()
        .find(|entry| {
            log::debug!("locate candidate: {}", entry.path);
            entry.path.ends_with(suffix)
        })
        .ok_or_else(|| DocNavError::NotFound {
            suffix: suffix.to_string(),
        })
}

/// Bucket entries into "Month Year" groups, chronologically.
///
/// Entries are sorted ascending by `date_field` (stable: ties keep input
/// order), then partitioned into contiguous month+year runs. Group titles
/// are labels like "January 2025" and groups come out oldest-first.
pub fn group_by_month(entries: &[NormalizedEntry], date_field: &str) -> Result<Vec<Group>> {
    let mut dated: Vec<(NaiveDate, &NormalizedEntry)> = entries
        .iter()
        .map(|entry| Ok((entry_date(entry, date_field)?, entry)))
        .collect::<Result<_>>()?;
    dated.sort_by_key(|(date, _)| *date);

    let mut groups: Vec<Group> = Vec::new();
    for (date, entry) in dated {
        // Input is sorted, so entries of one month are contiguous
        let label = date.format("%B %Y").to_string();
        if groups.last().map_or(true, |group| group.title != label) {
            groups.push(Group {
                title: label,
                documents: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.documents.push(entry.clone());
        }
    }
    Ok(groups)
}

fn entry_date(entry: &NormalizedEntry, field: &str) -> Result<NaiveDate> {
    let value = entry
        .data
        .get(field)
        .ok_or_else(|| invalid_field(entry, field, "is missing"))?;
    let raw = value
        .as_str()
        .ok_or_else(|| invalid_field(entry, field, "is not a date string"))?;
    parse_date(raw).ok_or_else(|| invalid_field(entry, field, "is not an ISO date or RFC 3339 datetime"))
}

/// Accept the two forms the loader's date coercion produces
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

fn invalid_field(entry: &NormalizedEntry, field: &str, message: &str) -> DocNavError {
    DocNavError::InvalidField {
        collection: entry.collection.clone(),
        id: entry.id.clone(),
        message: format!("field '{field}' {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RenderedContent;
    use pretty_assertions::assert_eq;

    fn raw(id: &str, title: &str, date: Option<&str>) -> RawDocument {
        let mut yaml = format!("title: \"{title}\"\nhidden: false");
        if let Some(date) = date {
            yaml.push_str(&format!("\nreleaseDate: \"{date}\""));
        }
        RawDocument {
            id: id.to_string(),
            collection: "release_notes".to_string(),
            path: format!("content/release-notes/{id}.mdx"),
            rendered: RenderedContent::new("<p>body</p>"),
            data: serde_yaml::from_str(&yaml).unwrap(),
        }
    }

    #[test]
    fn test_normalize_slugifies_titles() {
        let docs = vec![raw("v1", "Getting Started!", None)];
        let entries = normalize(&docs).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "getting-started");
        assert_eq!(entries[0].id, "v1");
        assert_eq!(entries[0].path, "content/release-notes/v1.mdx");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let docs = vec![raw("a", "First Post", None), raw("b", "Second: Post?", None)];
        let first = normalize(&docs).unwrap();
        let second = normalize(&docs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_normalize_missing_title() {
        let mut doc = raw("bad", "x", None);
        doc.data = serde_yaml::from_str("hidden: false").unwrap();

        let err = normalize(&[doc]).unwrap_err();
        assert!(
            matches!(err, DocNavError::MissingTitle { ref collection, ref id }
                if collection == "release_notes" && id == "bad")
        );
    }

    #[test]
    fn test_normalize_non_string_title() {
        let mut doc = raw("bad", "x", None);
        doc.data = serde_yaml::from_str("title: 42").unwrap();

        let err = normalize(&[doc]).unwrap_err();
        assert!(matches!(err, DocNavError::MissingTitle { .. }));
    }

    #[test]
    fn test_normalize_duplicate_titles_share_slug() {
        let docs = vec![raw("a", "Release", None), raw("b", "Release", None)];
        let entries = normalize(&docs).unwrap();
        assert_eq!(entries[0].title, entries[1].title);
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Getting Started!");
        assert_eq!(once, "getting-started");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_locate_by_suffix() {
        let docs = vec![raw("intro", "Intro", None), raw("setup", "Setup", None)];
        let entries = normalize(&docs).unwrap();

        let found = locate(&entries, "setup.mdx").unwrap();
        assert_eq!(found.id, "setup");
    }

    #[test]
    fn test_locate_missing() {
        let entries = normalize(&[raw("intro", "Intro", None)]).unwrap();
        let err = locate(&entries, "missing.mdx").unwrap_err();
        assert!(matches!(err, DocNavError::NotFound { ref suffix } if suffix == "missing.mdx"));
    }

    #[test]
    fn test_locate_first_match_wins() {
        // Both paths end in ".mdx"; input order decides
        let docs = vec![raw("first", "First", None), raw("second", "Second", None)];
        let entries = normalize(&docs).unwrap();

        let found = locate(&entries, ".mdx").unwrap();
        assert_eq!(found.id, "first");
    }

    #[test]
    fn test_group_by_month_scenario() {
        let docs = vec![
            raw("r1", "v1.0", Some("2025-01-05")),
            raw("r2", "v1.1", Some("2025-01-20")),
            raw("r3", "v2.0", Some("2025-02-01")),
        ];
        let entries = normalize(&docs).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "January 2025");
        let january: Vec<&str> = groups[0].documents.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(january, ["v1-0", "v1-1"]);
        assert_eq!(groups[1].title, "February 2025");
        assert_eq!(groups[1].documents[0].title, "v2-0");
    }

    #[test]
    fn test_group_by_month_sorts_unordered_input() {
        let docs = vec![
            raw("r3", "v2.0", Some("2025-02-01")),
            raw("r2", "v1.1", Some("2025-01-20")),
            raw("r1", "v1.0", Some("2025-01-05")),
        ];
        let entries = normalize(&docs).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();

        assert_eq!(groups[0].title, "January 2025");
        let ids: Vec<&str> = groups[0].documents.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2"]);
    }

    #[test]
    fn test_group_by_month_completeness() {
        let docs = vec![
            raw("a", "A", Some("2024-12-31")),
            raw("b", "B", Some("2025-01-01")),
            raw("c", "C", Some("2025-01-15")),
            raw("d", "D", Some("2025-03-02")),
        ];
        let entries = normalize(&docs).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();

        let grouped: Vec<&NormalizedEntry> =
            groups.iter().flat_map(|g| g.documents.iter()).collect();
        assert_eq!(grouped.len(), entries.len());
        for entry in &entries {
            assert!(grouped.iter().any(|g| g.id == entry.id));
        }
    }

    #[test]
    fn test_group_by_month_stable_on_ties() {
        let docs = vec![
            raw("first", "First", Some("2025-01-10")),
            raw("second", "Second", Some("2025-01-10")),
        ];
        let entries = normalize(&docs).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();

        let ids: Vec<&str> = groups[0].documents.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_group_by_month_single_entry() {
        let entries = normalize(&[raw("only", "Only", Some("2025-06-09"))]).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "June 2025");
        assert_eq!(groups[0].documents.len(), 1);
    }

    #[test]
    fn test_group_by_month_same_month() {
        let docs = vec![
            raw("a", "A", Some("2025-04-01")),
            raw("b", "B", Some("2025-04-15")),
            raw("c", "C", Some("2025-04-30")),
        ];
        let entries = normalize(&docs).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].documents.len(), 3);
    }

    #[test]
    fn test_group_by_month_empty_input() {
        assert_eq!(group_by_month(&[], "releaseDate").unwrap(), vec![]);
    }

    #[test]
    fn test_group_by_month_accepts_rfc3339() {
        let entries =
            normalize(&[raw("a", "A", Some("2025-01-05T12:30:00+00:00"))]).unwrap();
        let groups = group_by_month(&entries, "releaseDate").unwrap();
        assert_eq!(groups[0].title, "January 2025");
    }

    #[test]
    fn test_group_by_month_missing_field() {
        let entries = normalize(&[raw("a", "A", None)]).unwrap();
        let err = group_by_month(&entries, "releaseDate").unwrap_err();
        assert!(matches!(err, DocNavError::InvalidField { ref id, .. } if id == "a"));
    }

    #[test]
    fn test_group_by_month_unparsable_date() {
        let entries = normalize(&[raw("a", "A", Some("next tuesday"))]).unwrap();
        let err = group_by_month(&entries, "releaseDate").unwrap_err();
        assert!(matches!(err, DocNavError::InvalidField { .. }));
    }
}
