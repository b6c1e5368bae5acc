//! Title-casing of shouting free text
//!
//! Exports from records systems are frequently all capitals. Text that is
//! fully upper-case, or mostly so, is converted to title case with short
//! connecting words kept lower-case and known abbreviations restored.
//! Text that already mixes cases is left alone.

use super::abbreviations::whole_word_pattern;
use super::collapse_whitespace;
use crate::constants::UPPERCASE_RATIO_THRESHOLD;
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashSet;

/// Configured title-caser
#[derive(Debug, Clone)]
pub struct TitleCaser {
    stop_words: HashSet<String>,
    abbreviations: Vec<(Regex, String)>,
}

impl TitleCaser {
    /// Create a title-caser from stop words and abbreviations
    pub fn new<S: AsRef<str>>(stop_words: &[S], abbreviations: &[S]) -> Result<Self> {
        let stop_words = stop_words
            .iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let abbreviations = abbreviations
            .iter()
            .map(|a| a.as_ref().trim())
            .filter(|a| !a.is_empty())
            .map(|a| {
                Regex::new(&whole_word_pattern(a))
                    .map(|re| (re, a.to_uppercase()))
                    .map_err(|e| Error::invalid_pattern(a, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            stop_words,
            abbreviations,
        })
    }

    /// Check whether text is shouting and should be title-cased
    pub fn needs_title_case(text: &str) -> bool {
        let (letters, upper) = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .fold((0usize, 0usize), |(letters, upper), c| {
                (letters + 1, upper + usize::from(c.is_uppercase()))
            });

        if letters == 0 {
            return false;
        }
        upper == letters || (upper as f64 / letters as f64) > UPPERCASE_RATIO_THRESHOLD
    }

    /// Title-case `text` when it is shouting, otherwise return it trimmed
    pub fn apply(&self, text: &str) -> String {
        if !Self::needs_title_case(text) {
            return text.trim().to_string();
        }

        let lowered = collapse_whitespace(text).to_lowercase();
        let titled = lowered
            .split('-')
            .map(|segment| self.title_segment(segment))
            .collect::<Vec<_>>()
            .join("-");

        self.abbreviations
            .iter()
            .fold(titled, |acc, (re, upper)| {
                re.replace_all(&acc, upper.as_str()).into_owned()
            })
    }

    fn title_segment(&self, segment: &str) -> String {
        let mut seen_word = false;
        segment
            .split(' ')
            .map(|word| {
                if word.is_empty() {
                    return String::new();
                }
                let first = !seen_word;
                seen_word = true;
                if !first && self.stop_words.contains(word) {
                    word.to_string()
                } else {
                    capitalize_word(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Upper-case each letter that follows a non-letter
///
/// Apostrophes do not start a new word, so `it's` becomes `It's` rather
/// than `It'S`.
fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous: Option<char> = None;

    for c in word.chars() {
        let starts_word = previous.is_none_or(|p| !p.is_alphabetic() && p != '\'');
        if starts_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}
