//! Ranked view of a joke list
//!
//! The display order is derived on every read and never stored: highest
//! rating first, ties in list order.

use crate::store::JokeList;
use crate::types::{Joke, JokeId};

/// Jokes sorted by rating, descending
///
/// `sort_by` is stable, so equal ratings keep their insertion order.
pub fn ranked(list: &JokeList) -> Vec<&Joke> {
    let mut view: Vec<&Joke> = list.jokes().iter().collect();
    view.sort_by(|a, b| b.rating.cmp(&a.rating));
    view
}

/// Position of the first joke with this id in the ranked view
pub fn rank_of(list: &JokeList, id: JokeId) -> Option<usize> {
    ranked(list).iter().position(|joke| joke.id == id)
}

/// Position of the most recently added joke in the ranked view
///
/// Found by identity, not id, so a positional-policy collision still points
/// at the newer joke.
pub fn rank_of_newest(list: &JokeList) -> Option<usize> {
    let newest = list.jokes().last()?;
    ranked(list)
        .iter()
        .position(|joke| std::ptr::eq(*joke, newest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdPolicy;

    #[test]
    fn test_seed_view_order() {
        let list = JokeList::seeded(IdPolicy::Monotonic);
        let order: Vec<(u64, i64)> = ranked(&list).iter().map(|j| (j.id, j.rating)).collect();
        assert_eq!(order, vec![(1, 3), (2, 2), (3, 1), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_ties_keep_list_order() {
        let list = JokeList::from_jokes(
            vec![
                Joke { id: 9, text: "a".to_string(), rating: 1 },
                Joke { id: 2, text: "b".to_string(), rating: 4 },
                Joke { id: 5, text: "c".to_string(), rating: 1 },
                Joke { id: 1, text: "d".to_string(), rating: 1 },
            ],
            IdPolicy::Monotonic,
        );
        let order: Vec<u64> = ranked(&list).iter().map(|j| j.id).collect();
        assert_eq!(order, vec![2, 9, 5, 1]);
    }

    #[test]
    fn test_negative_ratings_sort_last() {
        let list = JokeList::from_jokes(
            vec![
                Joke { id: 1, text: "meh".to_string(), rating: -3 },
                Joke { id: 2, text: "ok".to_string(), rating: 0 },
            ],
            IdPolicy::Monotonic,
        );
        let order: Vec<u64> = ranked(&list).iter().map(|j| j.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_view_does_not_reorder_list() {
        let list = JokeList::from_jokes(
            vec![Joke::new(1, "low"), Joke { id: 2, text: "high".to_string(), rating: 8 }],
            IdPolicy::Monotonic,
        );
        let _ = ranked(&list);
        assert_eq!(list.jokes()[0].id, 1);
    }

    #[test]
    fn test_rank_of() {
        let list = JokeList::seeded(IdPolicy::Monotonic);
        assert_eq!(rank_of(&list, 1), Some(0));
        assert_eq!(rank_of(&list, 5), Some(4));
        assert_eq!(rank_of(&list, 77), None);
    }

    #[test]
    fn test_rank_of_newest_skips_older_duplicate() {
        let list = JokeList::from_jokes(
            vec![
                Joke { id: 1, text: "top".to_string(), rating: 2 },
                Joke { id: 2, text: "old".to_string(), rating: 0 },
                Joke { id: 2, text: "new".to_string(), rating: 0 },
            ],
            IdPolicy::Positional,
        );
        assert_eq!(rank_of(&list, 2), Some(1));
        assert_eq!(rank_of_newest(&list), Some(2));
    }

    #[test]
    fn test_rank_of_newest_above_downrated_duplicate() {
        let list = JokeList::from_jokes(
            vec![
                Joke { id: 2, text: "old".to_string(), rating: -4 },
                Joke { id: 2, text: "new".to_string(), rating: 0 },
            ],
            IdPolicy::Positional,
        );
        assert_eq!(rank_of_newest(&list), Some(0));
    }

    #[test]
    fn test_rank_of_newest_on_empty_list() {
        assert_eq!(rank_of_newest(&JokeList::new(IdPolicy::Monotonic)), None);
    }
}
