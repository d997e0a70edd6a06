//! Query view: the filtered, recency-sorted list of notes shown to the user.
//!
//! Recomputed from scratch on every call. Collections are personal-sized, so
//! there is no index to keep in sync with the store.

use crate::entity::Note;

/// Filter `notes` by `term` and order the result by most recent update.
///
/// A note matches when the lowercased term occurs in its lowercased title or
/// content; the empty term matches every note. Notes with equal `updated_at`
/// keep their collection order. The input is never modified.
pub fn query<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    let needle = term.to_lowercase();

    let mut view: Vec<&Note> = notes
        .iter()
        .filter(|note| matches_term(note, &needle))
        .collect();

    // sort_by is stable
    view.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    view
}

/// Check a note against an already-lowercased search term.
fn matches_term(note: &Note, needle: &str) -> bool {
    needle.is_empty()
        || note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PaletteColor;

    fn note(id: &str, title: &str, content: &str, updated_at: i64) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            color: PaletteColor::default(),
            created_at: 0,
            updated_at,
        }
    }

    fn ids(view: &[&Note]) -> Vec<String> {
        view.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_filter_by_content() {
        let notes = vec![
            note("1", "Grocery", "milk", 10),
            note("2", "Work", "report", 20),
        ];

        assert_eq!(ids(&query(&notes, "milk")), vec!["1"]);
        assert_eq!(query(&notes, "").len(), 2);
        assert!(query(&notes, "xyz").is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let notes = vec![
            note("1", "Grocery", "milk", 10),
            note("2", "Work", "Quarterly REPORT", 20),
        ];

        assert_eq!(ids(&query(&notes, "GROC")), vec!["1"]);
        assert_eq!(ids(&query(&notes, "report")), vec!["2"]);
    }

    #[test]
    fn test_title_or_content_match() {
        let notes = vec![
            note("1", "Ideas", "write a novel", 10),
            note("2", "Novel notes", "chapter one", 20),
            note("3", "Errands", "bank", 30),
        ];

        assert_eq!(ids(&query(&notes, "novel")), vec!["2", "1"]);
    }

    #[test]
    fn test_sorted_by_updated_at_descending() {
        let notes = vec![
            note("a", "A", "", 100),
            note("b", "B", "", 300),
            note("c", "C", "", 200),
        ];

        let view = query(&notes, "");
        let updated: Vec<i64> = view.iter().map(|n| n.updated_at).collect();
        assert_eq!(updated, vec![300, 200, 100]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let notes = vec![
            note("x", "X", "", 50),
            note("y", "Y", "", 50),
            note("z", "Z", "", 50),
        ];

        assert_eq!(ids(&query(&notes, "")), vec!["x", "y", "z"]);
        assert_eq!(query(&notes, ""), query(&notes, ""));
    }

    #[test]
    fn test_input_is_untouched() {
        let notes = vec![note("a", "A", "", 1), note("b", "B", "", 2)];
        let before = notes.clone();

        let _ = query(&notes, "");

        assert_eq!(notes, before);
    }

    #[test]
    fn test_non_ascii_terms() {
        let notes = vec![note("1", "Reunião", "Café às 10h", 1)];

        assert_eq!(query(&notes, "REUNIÃO").len(), 1);
        assert_eq!(query(&notes, "café").len(), 1);
    }
}
