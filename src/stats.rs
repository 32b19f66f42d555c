use crate::Buckets;
use std::collections::BTreeMap;

/// Length summary of a bucket map.
///
/// There is no "empty" `Stats`: computing over a map without any words yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_count: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub per_length_count: BTreeMap<usize, usize>,
}

impl Stats {
    pub fn compute<T>(buckets: &Buckets<T>) -> Option<Self> {
        let total_count: usize = buckets.values().map(Vec::len).sum();
        if total_count == 0 {
            return None;
        }

        let per_length_count: BTreeMap<_, _> = buckets
            .iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(&length, words)| (length, words.len()))
            .collect();
        // Keys are ordered, so the extremes are the first and last entries.
        let (&min_length, _) = per_length_count.first_key_value()?;
        let (&max_length, _) = per_length_count.last_key_value()?;
        Some(Self {
            total_count,
            min_length,
            max_length,
            per_length_count,
        })
    }

    /// Combines summaries of disjoint word sets. `None`s do not affect the result.
    pub fn merge<'a>(all: impl IntoIterator<Item = &'a Stats>) -> Option<Self> {
        all.into_iter().fold(None, |acc: Option<Stats>, stats| {
            let Some(mut acc) = acc else {
                return Some(stats.clone());
            };
            acc.total_count += stats.total_count;
            acc.min_length = acc.min_length.min(stats.min_length);
            acc.max_length = acc.max_length.max(stats.max_length);
            for (&length, &count) in &stats.per_length_count {
                *acc.per_length_count.entry(length).or_insert(0) += count;
            }
            Some(acc)
        })
    }
}
