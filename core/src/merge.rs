use std::collections::HashMap;

use crate::index::{Occurrence, OccurrenceList};
use crate::loader::DocumentKeywords;

/// Move the last occurrence of `occurrences` into place, given that all
/// elements before it are already in descending frequency order.
///
/// The slot is found by binary search over the sorted prefix: the new
/// occurrence lands before the first existing entry whose frequency is not
/// greater than its own. Returns the midpoints probed by the search, which
/// is empty when the prefix holds at most one element.
pub fn insert_last_occurrence(occurrences: &mut [Occurrence]) -> Vec<usize> {
    let mut probes = Vec::new();
    if occurrences.len() < 2 {
        return probes;
    }
    let last = occurrences.len() - 1;
    let frequency = occurrences[last].frequency;

    let (mut start, mut end) = (0, last - 1);
    while start < end {
        let mid = (start + end) / 2;
        probes.push(mid);
        if occurrences[mid].frequency > frequency {
            start = mid + 1;
        } else {
            end = mid;
        }
    }
    // The search never looks past the prefix, so a new minimum stays at the tail.
    if occurrences[start].frequency > frequency {
        start += 1;
    }
    occurrences[start..].rotate_right(1);
    probes
}

/// Merge one document's keyword occurrences into the keyword table.
pub fn merge_keywords(index: &mut HashMap<String, OccurrenceList>, keywords: DocumentKeywords) {
    for (keyword, occurrence) in keywords {
        match index.get_mut(&keyword) {
            Some(occurrences) => {
                occurrences.push(occurrence);
                insert_last_occurrence(occurrences);
                debug_assert!(is_descending(occurrences));
            }
            None => {
                index.insert(keyword, vec![occurrence]);
            }
        }
    }
}

/// True when `occurrences` is in descending frequency order.
pub fn is_descending(occurrences: &[Occurrence]) -> bool {
    occurrences.windows(2).all(|w| w[0].frequency >= w[1].frequency)
}
