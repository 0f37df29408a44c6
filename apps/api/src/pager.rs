//! Reading-cursor logic over a profile's stored search results.
//!
//! This module is the single authority on where a user sits in their result
//! list. Two distinct read operations exist on purpose: `current_item` is for
//! the turn that presents a listing (cursor not yet moved), `last_shown_item`
//! is for follow-up turns that enrich the listing a previous turn already
//! presented (cursor already moved past it). Callers declare which one their
//! position in the conversation flow requires instead of inlining an offset.

use crate::models::job::JobListing;
use crate::models::user::UserProfile;

/// Where a profile sits in the result-reading lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No search has stored results yet.
    Uninitialized,
    /// The cursor points at an unread listing.
    Paging,
    /// Every stored listing has been read.
    Exhausted,
}

pub fn page_state(profile: &UserProfile) -> PageState {
    if profile.search_results.is_empty() {
        PageState::Uninitialized
    } else if profile.reading_index < profile.search_results.len() {
        PageState::Paging
    } else {
        PageState::Exhausted
    }
}

/// The next unread listing, if any. Does not move the cursor.
pub fn current_item(profile: &UserProfile) -> Option<&JobListing> {
    profile.search_results.get(profile.reading_index)
}

/// The cursor position after the current item has been presented.
///
/// Nothing is persisted here: the caller writes the new index in the same
/// store operation as any other state it changes in that turn, so a torn
/// update cannot leave the cursor and the rest of the record disagreeing.
pub fn advance(profile: &UserProfile) -> usize {
    profile.reading_index + 1
}

/// The listing presented by the most recent read turn.
///
/// Valid only once a read has advanced the cursor; before any read this is
/// `None` and the caller routes the user back to reading.
pub fn last_shown_item(profile: &UserProfile) -> Option<&JobListing> {
    let index = profile.reading_index.checked_sub(1)?;
    profile.search_results.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<JobListing> {
        vec![
            JobListing::sample("Job A", "Acme"),
            JobListing::sample("Job B", "Globex"),
            JobListing::sample("Job C", "Initech"),
        ]
    }

    #[test]
    fn test_current_item_returns_listing_at_cursor() {
        let profile = UserProfile::sample("u").with_results(results(), 1);
        assert_eq!(current_item(&profile).unwrap().title, "Job B");
    }

    #[test]
    fn test_current_item_empty_when_exhausted() {
        let profile = UserProfile::sample("u").with_results(results(), 3);
        assert!(current_item(&profile).is_none());
    }

    #[test]
    fn test_advance_yields_next_index() {
        let profile = UserProfile::sample("u").with_results(results(), 1);
        assert_eq!(advance(&profile), 2);
    }

    #[test]
    fn test_last_shown_after_one_advance_is_the_item_presented() {
        // Present at index 1, advance to 2: the follow-up turn must get the
        // listing that was at index 1.
        let mut profile = UserProfile::sample("u").with_results(results(), 1);
        let presented = current_item(&profile).unwrap().title.clone();
        profile.reading_index = advance(&profile);
        assert_eq!(last_shown_item(&profile).unwrap().title, presented);
    }

    #[test]
    fn test_last_shown_empty_before_any_read() {
        let profile = UserProfile::sample("u").with_results(results(), 0);
        assert!(last_shown_item(&profile).is_none());
    }

    #[test]
    fn test_page_state_lifecycle() {
        let fresh = UserProfile::sample("u");
        assert_eq!(page_state(&fresh), PageState::Uninitialized);

        let paging = UserProfile::sample("u").with_results(results(), 2);
        assert_eq!(page_state(&paging), PageState::Paging);

        let exhausted = UserProfile::sample("u").with_results(results(), 3);
        assert_eq!(page_state(&exhausted), PageState::Exhausted);
    }

    #[test]
    fn test_full_walk_never_reads_out_of_range() {
        let mut profile = UserProfile::sample("u").with_results(results(), 0);
        let mut seen = Vec::new();
        while let Some(listing) = current_item(&profile) {
            seen.push(listing.title.clone());
            profile.reading_index = advance(&profile);
        }
        assert_eq!(seen, vec!["Job A", "Job B", "Job C"]);
        assert_eq!(page_state(&profile), PageState::Exhausted);
    }
}
