use crate::letters::{LettersSet, Scheme};
use crate::loader::Dictionary;
use crate::stats::Stats;
use crate::Buckets;
use log::debug;

fn length_range(min_length: i64, max_length: i64) -> Option<(usize, usize)> {
    if min_length < 0 || max_length < min_length || max_length == 0 {
        return None;
    }
    Some((usize::try_from(min_length).ok()?, usize::try_from(max_length).ok()?))
}

/// Collects words of `min_length..=max_length` characters that only use characters of the
/// letters set `letters_set`, grouped by length.
///
/// Words are not de-duplicated across dictionaries. Invalid parameters give an empty map.
pub fn filter<'a>(
    dictionaries: impl IntoIterator<Item = &'a Dictionary>,
    min_length: i64,
    max_length: i64,
    letters_set: &str,
) -> Buckets<&'a str> {
    let mut filtered: Buckets<&'a str> = Buckets::new();

    let Some((min, max)) = length_range(min_length, max_length) else {
        debug!("invalid length range {}..={}", min_length, max_length);
        return filtered;
    };
    let Some(set) = LettersSet::lookup(letters_set) else {
        debug!("unknown letters set '{}'", letters_set);
        return filtered;
    };

    for dictionary in dictionaries {
        for (&length, records) in dictionary.buckets().range(min..=max) {
            let accepted = records
                .iter()
                .map(|record| record.word.as_str())
                .filter(|word| set.admits(word));
            filtered
                .entry(length)
                .or_insert_with(Vec::new)
                .extend(accepted);
        }
    }
    // Lengths where nothing passed are not part of the result.
    filtered.retain(|_, words| !words.is_empty());
    filtered
}

/// Summarizes what [`filter`] would return, provided `scheme` names a known generation scheme.
pub fn filter_stats<'a>(
    dictionaries: impl IntoIterator<Item = &'a Dictionary>,
    min_length: i64,
    max_length: i64,
    letters_set: &str,
    scheme: &str,
) -> Option<Stats> {
    if Scheme::lookup(scheme).is_none() {
        debug!("unknown generation scheme '{}'", scheme);
        return None;
    }
    Stats::compute(&filter(dictionaries, min_length, max_length, letters_set))
}

#[cfg(test)]
mod tests {
    use crate::stats::Stats;
    use crate::store::Store;
    use crate::Buckets;
    use std::collections::BTreeMap;
    use std::fs;

    fn store(dictionaries: &[&str]) -> Store {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::default();
        for (i, content) in dictionaries.iter().enumerate() {
            let path = dir.path().join(format!("{}.txt", i));
            fs::write(&path, content).unwrap();
            assert!(store.add(&path).unwrap());
        }
        store
    }

    macro_rules! buckets {
        ($($len:literal => [$($word:literal),*]),* $(,)?) => {{
            let mut b: Buckets<&str> = Buckets::new();
            $(b.insert($len, vec![$($word),*]);)*
            b
        }};
    }

    mod validation {
        use super::*;

        #[test]
        fn bad_ranges() {
            let s = store(&["cat\ndog\nhorse\n"]);
            assert_eq!(s.filter(5, 3, "all"), buckets! {});
            assert_eq!(s.filter(-1, 10, "all"), buckets! {});
            assert_eq!(s.filter(0, 0, "all"), buckets! {});
            assert_eq!(s.filter_stats(5, 3, "all", "rand"), None);
        }

        #[test]
        fn zero_min_is_fine() {
            let s = store(&["cat\n"]);
            assert_eq!(s.filter(0, 3, "all"), buckets! { 3 => ["cat"] });
        }

        #[test]
        fn unknown_ids() {
            let s = store(&["cat\n"]);
            assert_eq!(s.filter(1, 10, "cwo99"), buckets! {});
            assert_eq!(s.filter_stats(1, 10, "cwo99", "rand"), None);
            assert_eq!(s.filter_stats(1, 10, "all", "fancy"), None);
            assert!(s.filter_stats(1, 10, "all", "rand").is_some());
        }
    }

    #[test]
    fn wildcard_is_union() {
        let s = store(&["cat\nxylophone\nzebra\n", "cat\nqi\n"]);
        assert_eq!(
            s.filter(2, 5, "all"),
            buckets! { 2 => ["qi"], 3 => ["cat", "cat"], 5 => ["zebra"] }
        );
        assert_eq!(
            s.filter(1, 100, "all").values().map(Vec::len).sum::<usize>(),
            5
        );
    }

    #[test]
    fn letters_set() {
        let s = store(&["ANTE\nRATE\ntea\nTeNt\neat\n", "ant\nnet\ncat\n"]);
        assert_eq!(
            s.filter(1, 10, "cwo1"),
            buckets! { 3 => ["tea", "eat", "ant", "net"], 4 => ["ANTE", "TeNt"] }
        );
    }

    #[test]
    fn range_is_inclusive() {
        let s = store(&["a\nan\nant\nante\nantenna\n"]);
        assert_eq!(
            s.filter(2, 4, "cwo1"),
            buckets! { 2 => ["an"], 3 => ["ant"], 4 => ["ante"] }
        );
    }

    #[test]
    fn stats() {
        let s = store(&["tea\neat\nrate\nneat\nantenna\n"]);
        assert_eq!(
            s.filter_stats(1, 20, "cwo1", "equal"),
            Some(Stats {
                total_count: 4,
                min_length: 3,
                max_length: 7,
                per_length_count: BTreeMap::from([(3, 2), (4, 1), (7, 1)]),
            })
        );
        // Nothing passes.
        assert_eq!(s.filter_stats(5, 6, "cwo1", "equal"), None);
    }

    #[test]
    fn repeatable() {
        let s = store(&["tea\neat\nrate\n", "neat\n"]);
        assert_eq!(s.filter(1, 9, "cwo3"), s.filter(1, 9, "cwo3"));
        assert_eq!(
            s.filter_stats(1, 9, "cwo3", "short"),
            s.filter_stats(1, 9, "cwo3", "short")
        );
        assert_eq!(s.list_info(), s.list_info());
    }
}
