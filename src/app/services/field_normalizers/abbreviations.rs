//! Whole-word abbreviation expansion that keeps the casing of the source text

use crate::constants::{CRIME_TYPE_ABBREVIATIONS, DISPOSITION_ABBREVIATIONS};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Build a case-insensitive, whole-word pattern for a literal token
///
/// Word boundaries are only asserted on sides where the token starts or ends
/// with a word character, so tokens such as `FOUND PROP.` still match.
pub(crate) fn whole_word_pattern(token: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let leading = if token.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trailing = if token.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    format!("(?i){}{}{}", leading, regex::escape(token), trailing)
}

/// Expansion table compiled into whole-word matchers
#[derive(Debug, Clone)]
pub struct AbbreviationTable {
    entries: Vec<(Regex, String)>,
}

impl AbbreviationTable {
    /// Compile a table of `(abbreviation, expansion)` pairs
    ///
    /// Longer abbreviations are tried first so `THEFT FM MTR` wins over any
    /// shorter entry it contains.
    pub fn new(pairs: &[(&str, &str)]) -> Result<Self, regex::Error> {
        let mut sorted: Vec<_> = pairs.to_vec();
        sorted.sort_by_key(|(abbreviation, _)| std::cmp::Reverse(abbreviation.len()));

        let entries = sorted
            .into_iter()
            .map(|(abbreviation, expansion)| {
                Regex::new(&whole_word_pattern(abbreviation))
                    .map(|re| (re, expansion.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Expand every abbreviation found in `text`
    pub fn expand(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (re, expansion)| {
                re.replace_all(&acc, |caps: &Captures| match_case(&caps[0], expansion))
                    .into_owned()
            })
    }
}

/// Default disposition table (`CLSD` → `CLOSED` ...)
pub fn disposition_table() -> &'static AbbreviationTable {
    static TABLE: OnceLock<AbbreviationTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        AbbreviationTable::new(DISPOSITION_ABBREVIATIONS).expect("valid disposition table")
    })
}

/// Default crime type table (`BURG` → `BURGLARY` ...)
pub fn crime_type_table() -> &'static AbbreviationTable {
    static TABLE: OnceLock<AbbreviationTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        AbbreviationTable::new(CRIME_TYPE_ABBREVIATIONS).expect("valid crime type table")
    })
}

/// Render `replacement` in the casing style of `found`
///
/// Lower-case input gives lower-case output, title-case input gives
/// title-case output, anything else is upper-cased.
pub(crate) fn match_case(found: &str, replacement: &str) -> String {
    let letters: Vec<char> = found.chars().filter(|c| c.is_alphabetic()).collect();

    if letters.iter().all(|c| c.is_lowercase()) {
        return replacement.to_lowercase();
    }

    let all_upper = letters.iter().all(|c| c.is_uppercase());
    let is_title = found
        .split(|c: char| !c.is_alphabetic())
        .filter(|run| !run.is_empty())
        .all(|run| {
            let mut chars = run.chars();
            chars.next().is_some_and(|c| c.is_uppercase()) && chars.all(|c| c.is_lowercase())
        });
    if is_title && !all_upper {
        return title_words(replacement);
    }

    replacement.to_uppercase()
}

fn title_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
