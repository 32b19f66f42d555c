use std::fmt;

/// How often a word occurs, as given by the dictionary's second column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// A plain occurrence count, as found in ispell-style word lists.
    Count(u64),
    /// Anything that does not parse as a count is kept verbatim.
    Text(String),
}

impl From<&str> for Frequency {
    fn from(s: &str) -> Self {
        s.parse()
            .map(Frequency::Count)
            .unwrap_or_else(|_| Frequency::Text(s.to_string()))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Count(n) => write!(f, "{}", n),
            Frequency::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordRecord {
    pub word: String,
    pub affix: Option<String>,
    pub frequency: Option<Frequency>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            affix: None,
            frequency: None,
        }
    }

    /// Length in characters, which is the bucket key.
    pub fn length(&self) -> usize {
        self.word.chars().count()
    }
}

/// The outcome of parsing a single dictionary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Word(WordRecord),
    /// Blank line or `#` comment.
    Skip,
    /// `%`-prefixed multi-word line. Carries everything after the `%` for diagnostics only.
    MultiWord(&'a str),
    /// A line with no usable word, such as `/affix 12`.
    Malformed,
}

/// Parses `word[/affix] [frequency]`.
///
/// The line is split once on the first run of whitespace, so everything after the word is the
/// frequency column, internal spaces included.
pub fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim_start())),
        None => (line, None),
    };

    if head.is_empty() || head.starts_with('#') {
        return Line::Skip;
    }
    if head.starts_with('%') {
        return Line::MultiWord(line['%'.len_utf8()..].trim_start());
    }

    let (word, affix) = match head.split_once('/') {
        Some((word, affix)) => (word, Some(affix).filter(|a| !a.is_empty())),
        None => (head, None),
    };
    if word.is_empty() {
        return Line::Malformed;
    }

    Line::Word(WordRecord {
        word: word.to_string(),
        affix: affix.map(str::to_string),
        frequency: rest.map(Frequency::from),
    })
}
