//! Builds pools of CW (Morse code) training words out of word-frequency dictionaries.
//!
//! Dictionaries are plain word lists or ispell-style `word/affix count` lists. They are indexed by
//! word length in a [`Store`], which can then be summarized with [`Stats`] and filtered by length
//! and by a [`LettersSet`] of characters the student already knows.
//!
//! ```no_run
//! let mut store = cwgen::Store::default();
//! store.add("/usr/share/dict/words")?;
//! let pool = store.filter(2, 5, "cwo3");
//! let stats = store.filter_stats(2, 5, "cwo3", "rand");
//! # Ok::<(), cwgen::DictionaryLoadError>(())
//! ```

use std::collections::BTreeMap;

pub mod error;
pub mod filter;
pub mod letters;
pub mod loader;
pub mod parser;
pub mod stats;
pub mod store;

pub use error::{DictionaryLoadError, Result};
pub use letters::{letters_sets, schemes, Alphabet, LettersSet, Scheme};
pub use loader::{Dictionary, DictionaryId};
pub use parser::{parse_line, Frequency, Line, WordRecord};
pub use stats::Stats;
pub use store::{DictionaryInfo, FormatErrorPolicy, Options, Store};

/// Words grouped by their length in characters.
pub type Buckets<T> = BTreeMap<usize, Vec<T>>;
