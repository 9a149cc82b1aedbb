//! Parsing of raw tagger output into typed records.
//!
//! TreeTagger run with `-token -lemma -sgml` prints one line per input token
//! as `word<TAB>pos<TAB>lemma`, and echoes SGML lines (anything wrapped in
//! `<...>`) unchanged.

use std::fmt;

/// Lemma TreeTagger prints for tokens missing from its lexicon.
pub const UNKNOWN_LEMMA: &str = "<unknown>";

/// One line of tagger output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRecord {
    /// A recognized token with its part of speech and lemma.
    Regular {
        word: String,
        pos: String,
        lemma: String,
    },
    /// A token the tagger could not lemmatize.
    Unknown { word: String, pos: String },
    /// `<s>` / `</s>` sentence markers.
    SentenceBoundary,
    /// Any other SGML line passed through by the tagger.
    Markup(String),
}

impl TagRecord {
    /// Lemma for regular records; `None` for everything that is skipped.
    pub fn lemma(&self) -> Option<&str> {
        match self {
            Self::Regular { lemma, .. } => Some(lemma),
            _ => None,
        }
    }
}

/// A tagger output line that is neither a tag nor markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParseError {
    /// 1-based line number within the tagger output.
    pub line_number: usize,
    pub line: String,
    pub fields: usize,
}

impl fmt::Display for TagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed tagger output at line {}: expected 3 tab-separated fields, found {} in {:?}",
            self.line_number, self.fields, self.line
        )
    }
}

impl std::error::Error for TagParseError {}

/// Classify a single output line.
pub fn parse_line(line_number: usize, line: &str) -> Result<TagRecord, TagParseError> {
    let trimmed = line.trim_end_matches(['\r', '\n']);

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        return Ok(classify_markup(trimmed));
    }

    let fields: Vec<&str> = trimmed.split('\t').collect();
    match fields.as_slice() {
        [word, pos, lemma] if *lemma == UNKNOWN_LEMMA => Ok(TagRecord::Unknown {
            word: word.to_string(),
            pos: pos.to_string(),
        }),
        [word, pos, lemma] if !lemma.is_empty() => Ok(TagRecord::Regular {
            word: word.to_string(),
            pos: pos.to_string(),
            lemma: lemma.to_string(),
        }),
        _ => Err(TagParseError {
            line_number,
            line: trimmed.to_string(),
            fields: fields.len(),
        }),
    }
}

fn classify_markup(line: &str) -> TagRecord {
    let name = line
        .trim_start_matches('<')
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .next()
        .unwrap_or_default();

    if name == "s" {
        TagRecord::SentenceBoundary
    } else {
        TagRecord::Markup(line.to_string())
    }
}

/// Parse complete tagger output. Blank lines are ignored; the first
/// malformed line aborts parsing.
pub fn make_tags<'a, I>(lines: I) -> Result<Vec<TagRecord>, TagParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}
