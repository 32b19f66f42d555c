use crate::error::{DictionaryLoadError, Result};
use crate::parser::{parse_line, Line, WordRecord};
use crate::stats::Stats;
use crate::store::{FormatErrorPolicy, Options};
use crate::Buckets;
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a loaded dictionary. Never handed out twice within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryId(u64);

impl DictionaryId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One loaded word list, indexed by word length.
#[derive(Debug, Clone)]
pub struct Dictionary {
    id: DictionaryId,
    name: String,
    source_path: PathBuf,
    buckets: Buckets<WordRecord>,
}

impl Dictionary {
    pub fn id(&self) -> DictionaryId {
        self.id
    }

    /// The base name of the file this was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn buckets(&self) -> &Buckets<WordRecord> {
        &self.buckets
    }

    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn stats(&self) -> Option<Stats> {
        Stats::compute(&self.buckets)
    }
}

/// Reads and indexes the dictionary at `path`.
///
/// The dictionary is named after `path` as given, while its source path is canonical.
/// Returns `Ok(None)` when the file holds no words at all, or when a malformed line is found
/// under [`FormatErrorPolicy::Reject`]. Neither is an error.
pub fn load(path: &Path, options: &Options) -> Result<Option<Dictionary>> {
    let io_error = |source| DictionaryLoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let source_path = std::fs::canonicalize(path).map_err(io_error)?;
    let bytes = std::fs::read(&source_path).map_err(io_error)?;
    let text = options
        .encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| DictionaryLoadError::Decode {
            path: path.to_path_buf(),
            encoding: options.encoding.name(),
        })?;

    let mut buckets = Buckets::new();
    for (i, raw) in text.lines().enumerate() {
        match parse_line(raw) {
            Line::Word(record) => buckets
                .entry(record.length())
                .or_insert_with(Vec::new)
                .push(record),
            Line::Skip => {}
            Line::MultiWord(words) => {
                warn!(
                    "{}:{}: multi-word line [{}] not supported yet",
                    path.display(),
                    i + 1,
                    words
                );
            }
            Line::Malformed => match options.on_format_error {
                FormatErrorPolicy::SkipLine => {
                    warn!("{}:{}: skipping malformed line", path.display(), i + 1);
                }
                FormatErrorPolicy::Reject => {
                    warn!(
                        "{}:{}: malformed line, discarding the whole file",
                        path.display(),
                        i + 1
                    );
                    return Ok(None);
                }
            },
        }
    }

    if buckets.is_empty() {
        debug!("{}: no words found", path.display());
        return Ok(None);
    }

    let dictionary = Dictionary {
        id: DictionaryId::fresh(),
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        source_path,
        buckets,
    };
    debug!(
        "{}: loaded {} words as {}",
        path.display(),
        dictionary.word_count(),
        dictionary.id
    );
    Ok(Some(dictionary))
}
