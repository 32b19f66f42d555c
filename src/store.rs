use crate::error::{DictionaryLoadError, Result};
use crate::filter;
use crate::loader::{self, Dictionary, DictionaryId};
use crate::stats::Stats;
use crate::Buckets;
use encoding_rs::Encoding;
use log::info;
use std::path::Path;

/// What to do with a line that has no usable word in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorPolicy {
    /// Log a warning and carry on with the next line.
    SkipLine,
    /// Discard everything read from the file so far and yield no dictionary.
    Reject,
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Options {
    /// Encoding of dictionary files. Legacy ispell lists are ISO-8859-1.
    pub encoding: &'static Encoding,

    pub on_format_error: FormatErrorPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            // The WHATWG mapping for the "iso-8859-1" label.
            encoding: encoding_rs::WINDOWS_1252,
            on_format_error: FormatErrorPolicy::SkipLine,
        }
    }
}

impl Options {
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self> {
        self.encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| DictionaryLoadError::UnknownEncoding(label.to_string()))?;
        Ok(self)
    }

    pub fn build(self) -> Store {
        Store {
            dictionaries: Vec::new(),
            options: self,
        }
    }
}

/// Per-dictionary summary, as shown in a dictionary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryInfo {
    pub id: DictionaryId,
    pub name: String,
    pub stats: Option<Stats>,
}

/// The set of loaded dictionaries. No two of them come from the same file.
#[derive(Debug)]
pub struct Store {
    dictionaries: Vec<Dictionary>,
    options: Options,
}

impl Default for Store {
    fn default() -> Self {
        Options::default().build()
    }
}

impl Store {
    pub fn builder() -> Options {
        Options::default()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Loads the dictionary at `path` unless a dictionary from the same file is already held.
    ///
    /// Returns `Ok(false)` only for such duplicates. A file without any words, or one discarded
    /// under [`FormatErrorPolicy::Reject`], is accepted with `Ok(true)` but adds nothing.
    pub fn add(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let source_path = std::fs::canonicalize(path).map_err(|source| DictionaryLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if self.dictionaries.iter().any(|d| d.source_path() == source_path) {
            info!("{} is already loaded", path.display());
            return Ok(false);
        }

        match loader::load(path, &self.options)? {
            Some(dictionary) => {
                info!(
                    "added {} ({} words) as {}",
                    dictionary.name(),
                    dictionary.word_count(),
                    dictionary.id()
                );
                self.dictionaries.push(dictionary);
            }
            None => info!("{} has no words, nothing added", path.display()),
        }
        Ok(true)
    }

    pub fn remove(&mut self, id: DictionaryId) -> bool {
        match self.dictionaries.iter().position(|d| d.id() == id) {
            Some(idx) => {
                let dictionary = self.dictionaries.remove(idx);
                info!("removed {} ({})", dictionary.name(), id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: DictionaryId) -> Option<&Dictionary> {
        self.dictionaries.iter().find(|d| d.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dictionary> {
        self.dictionaries.iter()
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    pub fn list_info(&self) -> Vec<DictionaryInfo> {
        self.dictionaries
            .iter()
            .map(|d| DictionaryInfo {
                id: d.id(),
                name: d.name().to_string(),
                stats: d.stats(),
            })
            .collect()
    }

    pub fn aggregate_stats(&self) -> Option<Stats> {
        let all: Vec<_> = self.dictionaries.iter().filter_map(Dictionary::stats).collect();
        Stats::merge(&all)
    }

    /// Words from all dictionaries with a length in `min_length..=max_length` that only use
    /// characters from the given letters set.
    pub fn filter(&self, min_length: i64, max_length: i64, letters_set: &str) -> Buckets<&str> {
        filter::filter(&self.dictionaries, min_length, max_length, letters_set)
    }

    pub fn filter_stats(
        &self,
        min_length: i64,
        max_length: i64,
        letters_set: &str,
        scheme: &str,
    ) -> Option<Stats> {
        filter::filter_stats(&self.dictionaries, min_length, max_length, letters_set, scheme)
    }
}
