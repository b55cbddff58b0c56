mod occurrence;

pub use occurrence::{DocumentKeywords, Frequency, Occurrence};

use std::{cmp::Ordering, collections::HashMap};

use serde::Serialize;

const RESULT_LIMIT: usize = 5;

/// Index of all keywords across the corpus. Each keyword maps to the list of
/// its occurrences, kept in descending order of frequency. Equal frequencies
/// keep earlier-merged documents ahead of later ones.
#[derive(Debug, Default, Serialize)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
}

impl KeywordIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Merges the keywords of a single document into the index. Each
    /// occurrence is placed at its frequency-ordered position in the
    /// keyword's existing list; no full re-sort is performed.
    pub fn merge_keywords(&mut self, keywords: DocumentKeywords) {
        for (keyword, occurrence) in keywords {
            let occurrences = self.keywords.entry(keyword).or_default();
            occurrences.push(occurrence);

            if occurrences.len() > 1 {
                insert_last_occurrence(occurrences);
            }
        }
    }

    /// Search result for "kw1 or kw2", in descending order of frequency,
    /// limited to 5 documents. A document matching both keywords appears
    /// once; frequency ties are broken in favor of the first keyword.
    ///
    /// Keywords are looked up verbatim. No matches is an empty result, not
    /// an error.
    #[must_use]
    pub fn top_search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        let mut documents = Vec::new();

        match (self.keywords.get(kw1), self.keywords.get(kw2)) {
            (None, None) => {}
            (Some(occurrences), None) | (None, Some(occurrences)) => {
                let mut index = 0;
                while documents.len() < RESULT_LIMIT && index < occurrences.len() {
                    push_unique(&mut documents, &occurrences[index].document);
                    index += 1;
                }
            }
            (Some(first), Some(second)) => {
                let mut i = 0;
                let mut j = 0;

                while i < first.len() && j < second.len() && documents.len() < RESULT_LIMIT {
                    match first[i].frequency.cmp(&second[j].frequency) {
                        Ordering::Greater => {
                            push_unique(&mut documents, &first[i].document);
                            i += 1;
                        }
                        Ordering::Less => {
                            push_unique(&mut documents, &second[j].document);
                            j += 1;
                        }
                        Ordering::Equal => {
                            // The first keyword's document goes first. Both
                            // pointers advance even if the dedup rule
                            // suppressed an append.
                            push_unique(&mut documents, &first[i].document);
                            if documents.len() < RESULT_LIMIT {
                                push_unique(&mut documents, &second[j].document);
                            }
                            i += 1;
                            j += 1;
                        }
                    }
                }

                while i < first.len() && documents.len() < RESULT_LIMIT {
                    push_unique(&mut documents, &first[i].document);
                    i += 1;
                }

                while j < second.len() && documents.len() < RESULT_LIMIT {
                    push_unique(&mut documents, &second[j].document);
                    j += 1;
                }
            }
        }

        documents
    }
}

fn push_unique(documents: &mut Vec<String>, document: &str) {
    if !documents.iter().any(|existing| existing == document) {
        documents.push(document.to_string());
    }
}

/// Moves the last occurrence of the list to its frequency-ordered position.
/// Elements `0..len - 2` are already in descending order; the spot is found
/// by binary search over that prefix. An equal-frequency probe stops the
/// search immediately, so the new occurrence lands right after the first
/// equal entry the search hits. Returns the sequence of probed midpoints.
fn insert_last_occurrence(occurrences: &mut Vec<Occurrence>) -> Vec<usize> {
    debug_assert!(occurrences.len() >= 2);

    let mut probes = Vec::new();
    let target = occurrences[occurrences.len() - 1].frequency;

    let mut low = 0;
    let mut high = occurrences.len() - 2;

    while low < high {
        let mid = (low + high) / 2;
        probes.push(mid);

        match occurrences[mid].frequency.cmp(&target) {
            Ordering::Greater => low = mid + 1,
            Ordering::Equal => {
                low = mid;
                break;
            }
            Ordering::Less => high = mid,
        }
    }

    let last = occurrences.remove(occurrences.len() - 1);

    if target > occurrences[low].frequency {
        occurrences.insert(low, last);
    } else {
        occurrences.insert(low + 1, last);
    }

    probes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(document: &str, frequency: Frequency) -> Occurrence {
        Occurrence::new(document.to_string(), frequency)
    }

    fn document_keywords(document: &str, counts: &[(&str, Frequency)]) -> DocumentKeywords {
        counts
            .iter()
            .map(|&(keyword, frequency)| (keyword.to_string(), occurrence(document, frequency)))
            .collect()
    }

    #[test]
    fn merge_inserts_new_keyword_as_singleton() {
        let mut index = KeywordIndex::new();

        index.merge_keywords(document_keywords("doc1.txt", &[("deep", 3)]));

        assert_eq!(index.get("deep"), Some(&[occurrence("doc1.txt", 3)][..]));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn merge_orders_by_descending_frequency() {
        let mut index = KeywordIndex::new();

        index.merge_keywords(document_keywords("doc1.txt", &[("deep", 3)]));
        index.merge_keywords(document_keywords("doc2.txt", &[("deep", 5)]));

        assert_eq!(
            index.get("deep"),
            Some(&[occurrence("doc2.txt", 5), occurrence("doc1.txt", 3)][..])
        );
    }

    #[test]
    fn equal_frequencies_keep_arrival_order() {
        let mut index = KeywordIndex::new();

        index.merge_keywords(document_keywords("doc1.txt", &[("ocean", 4)]));
        index.merge_keywords(document_keywords("doc2.txt", &[("ocean", 4)]));
        index.merge_keywords(document_keywords("doc3.txt", &[("ocean", 2)]));

        assert_eq!(
            index.get("ocean"),
            Some(
                &[
                    occurrence("doc1.txt", 4),
                    occurrence("doc2.txt", 4),
                    occurrence("doc3.txt", 2)
                ][..]
            )
        );
    }

    #[test]
    fn merging_same_document_twice_appends_a_second_occurrence() {
        let mut index = KeywordIndex::new();
        let keywords = document_keywords("doc1.txt", &[("deep", 3)]);

        index.merge_keywords(keywords.clone());
        index.merge_keywords(keywords);

        let occurrences = index.get("deep").expect("Failed to get occurrences");
        assert_eq!(occurrences.len(), 2);
        assert!(occurrences
            .iter()
            .all(|occurrence| occurrence.document == "doc1.txt" && occurrence.frequency == 3));
    }

    #[test]
    fn merged_lists_stay_non_increasing() {
        let mut index = KeywordIndex::new();
        let frequencies = [7, 2, 9, 4, 4, 11, 1, 6];

        for (doc_id, frequency) in frequencies.iter().enumerate() {
            let document = format!("doc{doc_id}.txt");
            index.merge_keywords(document_keywords(&document, &[("tide", *frequency)]));
        }

        let occurrences = index.get("tide").expect("Failed to get occurrences");
        assert_eq!(occurrences.len(), frequencies.len());
        assert!(occurrences
            .windows(2)
            .all(|pair| pair[0].frequency >= pair[1].frequency));
    }

    #[test]
    fn insert_last_occurrence_probes_midpoints() {
        let mut occurrences = vec![
            occurrence("doc0.txt", 12),
            occurrence("doc1.txt", 8),
            occurrence("doc2.txt", 7),
            occurrence("doc3.txt", 5),
            occurrence("doc4.txt", 3),
            occurrence("doc5.txt", 2),
            occurrence("doc6.txt", 6),
        ];

        let probes = insert_last_occurrence(&mut occurrences);

        assert_eq!(probes, vec![2, 4, 3]);
        let frequencies: Vec<_> = occurrences
            .iter()
            .map(|occurrence| occurrence.frequency)
            .collect();
        assert_eq!(frequencies, vec![12, 8, 7, 6, 5, 3, 2]);
    }

    #[test]
    fn insert_last_occurrence_stops_at_first_equal_probe() {
        let mut occurrences = vec![
            occurrence("doc0.txt", 5),
            occurrence("doc1.txt", 5),
            occurrence("doc2.txt", 5),
            occurrence("doc3.txt", 5),
            occurrence("doc4.txt", 5),
            occurrence("doc5.txt", 5),
        ];

        let probes = insert_last_occurrence(&mut occurrences);

        // The first probe hits an equal frequency, so the search stops there
        // and the new occurrence goes right after it.
        assert_eq!(probes, vec![2]);
        assert_eq!(occurrences[3].document, "doc5.txt");
    }

    fn whale_ocean_index() -> KeywordIndex {
        // whale -> [(d1, 5), (d2, 2)], ocean -> [(d2, 2), (d3, 1)]
        let mut index = KeywordIndex::new();
        index.merge_keywords(document_keywords("d1", &[("whale", 5)]));
        index.merge_keywords(document_keywords("d2", &[("whale", 2), ("ocean", 2)]));
        index.merge_keywords(document_keywords("d3", &[("ocean", 1)]));
        index
    }

    #[test]
    fn top_search_merges_and_dedups_across_keywords() {
        let index = whale_ocean_index();

        assert_eq!(index.top_search("whale", "ocean"), vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn top_search_returns_empty_for_unknown_keywords() {
        let index = whale_ocean_index();

        assert!(index.top_search("nomatch1", "nomatch2").is_empty());
    }

    #[test]
    fn top_search_with_one_known_keyword_walks_its_list() {
        let index = whale_ocean_index();

        assert_eq!(index.top_search("whale", "nomatch"), vec!["d1", "d2"]);
        assert_eq!(index.top_search("nomatch", "ocean"), vec!["d2", "d3"]);
    }

    #[test]
    fn top_search_breaks_ties_in_favor_of_first_keyword() {
        let mut index = KeywordIndex::new();
        index.merge_keywords(document_keywords("d1", &[("ocean", 3)]));
        index.merge_keywords(document_keywords("d2", &[("whale", 3)]));

        assert_eq!(index.top_search("whale", "ocean"), vec!["d2", "d1"]);
        assert_eq!(index.top_search("ocean", "whale"), vec!["d1", "d2"]);
    }

    #[test]
    fn top_search_caps_results_at_five() {
        let mut index = KeywordIndex::new();

        for (doc_id, frequency) in (1..=8).rev().enumerate() {
            let document = format!("d{doc_id}");
            index.merge_keywords(document_keywords(&document, &[("tide", frequency)]));
        }

        assert_eq!(
            index.top_search("tide", "nomatch"),
            vec!["d0", "d1", "d2", "d3", "d4"]
        );
        assert_eq!(index.top_search("tide", "tide").len(), 5);
    }

    #[test]
    fn top_search_drains_the_longer_list_after_the_shorter() {
        let mut index = KeywordIndex::new();
        index.merge_keywords(document_keywords("d1", &[("whale", 9), ("reef", 1)]));
        index.merge_keywords(document_keywords("d2", &[("whale", 7)]));
        index.merge_keywords(document_keywords("d3", &[("whale", 4)]));

        assert_eq!(
            index.top_search("reef", "whale"),
            vec!["d1", "d2", "d3"]
        );
    }
}
