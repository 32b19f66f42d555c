//! Fixed catalogues of allowed alphabets and material generation schemes.
//!
//! Both tables are generated at build time from `letters_sets.txt` and `schemes.txt`.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

include!(concat!(env!("OUT_DIR"), "/catalogue.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Every character is permitted.
    Any,
    /// Only these characters, compared case-insensitively.
    Only(&'static str),
}

/// A named allowed-alphabet constraint, typically the characters learned so far.
#[derive(Debug, PartialEq, Eq)]
pub struct LettersSet {
    pub id: &'static str,
    pub description: &'static str,
    pub alphabet: Alphabet,
}

/// Uppercased alphabets, built on first use.
static UPPERCASED: Lazy<HashMap<&'static str, HashSet<char>>> = Lazy::new(|| {
    LETTERS_SETS
        .values()
        .filter_map(|set| match set.alphabet {
            Alphabet::Any => None,
            Alphabet::Only(letters) => Some((set.id, uppercase(letters).collect())),
        })
        .collect()
});

fn uppercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_uppercase)
}

impl LettersSet {
    pub fn lookup(id: &str) -> Option<&'static LettersSet> {
        LETTERS_SETS.get(id)
    }

    /// Whether every distinct character of `word` is in this set, ignoring case.
    pub fn admits(&self, word: &str) -> bool {
        match self.alphabet {
            Alphabet::Any => true,
            Alphabet::Only(_) => match UPPERCASED.get(self.id) {
                Some(allowed) => uppercase(word).all(|c| allowed.contains(&c)),
                None => false,
            },
        }
    }
}

/// All letters sets, in the order they should be presented.
pub fn letters_sets() -> impl Iterator<Item = &'static LettersSet> {
    LETTERS_SET_IDS.iter().map(|id| &LETTERS_SETS[*id])
}

/// A named strategy for sampling words out of a filtered pool.
///
/// The sampling itself is done by whatever consumes the pool; this crate only knows the names.
#[derive(Debug, PartialEq, Eq)]
pub struct Scheme {
    pub id: &'static str,
    pub description: &'static str,
}

impl Scheme {
    pub fn lookup(id: &str) -> Option<&'static Scheme> {
        SCHEMES.get(id)
    }
}

pub fn schemes() -> impl Iterator<Item = &'static Scheme> {
    SCHEME_IDS.iter().map(|id| &SCHEMES[*id])
}

#[cfg(test)]
mod tests {
    mod registry {
        use crate::letters::{letters_sets, Alphabet, LettersSet};

        #[test]
        fn order() {
            let ids: Vec<_> = letters_sets().map(|set| set.id).collect();
            assert_eq!(ids.first(), Some(&"all"));
            assert_eq!(ids.last(), Some(&"cwo10"));
            assert_eq!(ids.len(), 11);
        }

        #[test]
        fn lookup() {
            let set = LettersSet::lookup("cwo1").unwrap();
            assert_eq!(set.description, "CWOPS session 1");
            assert_eq!(set.alphabet, Alphabet::Only("tean"));
            assert_eq!(LettersSet::lookup("all").unwrap().alphabet, Alphabet::Any);
            assert!(LettersSet::lookup("cwo11").is_none());
            assert!(LettersSet::lookup("CWO1").is_none());
        }

        #[test]
        fn sessions_only_grow() {
            let sets: Vec<_> = letters_sets().skip(1).collect();
            for pair in sets.windows(2) {
                let (Alphabet::Only(prev), Alphabet::Only(next)) =
                    (pair[0].alphabet, pair[1].alphabet)
                else {
                    panic!("only the first set is a wildcard");
                };
                assert!(
                    prev.chars().all(|c| next.contains(c)),
                    "{} is not a subset of {}",
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    mod admits {
        use crate::letters::LettersSet;

        macro_rules! check {
            ($set:literal admits $($word:literal),+) => {
                let set = LettersSet::lookup($set).unwrap();
                $(assert!(set.admits($word), "{} should admit {}", $set, $word);)+
            };
            ($set:literal rejects $($word:literal),+) => {
                let set = LettersSet::lookup($set).unwrap();
                $(assert!(!set.admits($word), "{} should reject {}", $set, $word);)+
            };
        }

        #[test]
        fn session_one() {
            check!("cwo1" admits "ANTE", "tea", "TeA", "neat");
            check!("cwo1" rejects "RATE", "rate", "cat");
        }

        #[test]
        fn repeats_are_fine() {
            check!("cwo1" admits "teen", "tenant", "eeee");
        }

        #[test]
        fn digits_and_punctuation() {
            check!("cwo2" admits "41", "note4");
            check!("cwo2" rejects "42");
            check!("cwo7" admits "4/5?");
        }

        #[test]
        fn wildcard() {
            check!("all" admits "xylophone", "ÄÖÜ", "anything-at-all");
        }
    }

    mod schemes {
        use crate::letters::{schemes, Scheme};

        #[test]
        fn catalogue() {
            let ids: Vec<_> = schemes().map(|s| s.id).collect();
            assert_eq!(ids, ["all", "rand", "equal", "short", "long"]);
            assert_eq!(
                Scheme::lookup("short").unwrap().description,
                "Prioritize shorter words"
            );
            assert!(Scheme::lookup("weighted").is_none());
        }
    }
}
