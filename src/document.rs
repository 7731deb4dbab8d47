//! Sentence Extraction
//!
//! Minimal, line-oriented sentence splitting used to feed validators.
//! Sentences never span lines; a sentence ends after a run of terminators
//! or at the end of its line.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Position, Sentence};

static SENTENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?。！？]+[.!?。！？]*|[.!?。！？]+").expect("valid sentence pattern")
});

/// Split a single line into sentences
///
/// `line_num` is 1-based and copied into every sentence position.
pub fn split_line(line: &str, line_num: usize) -> Vec<Sentence> {
    SENTENCE_PATTERN
        .find_iter(line)
        .filter_map(|m| {
            let raw = m.as_str();
            let content = raw.trim_start();
            if content.trim_end().is_empty() {
                return None;
            }

            let start = m.start() + (raw.len() - content.len());
            let offset = line[..start].chars().count();
            Some(Sentence::new(content, Position::new(line_num, offset)))
        })
        .collect()
}

/// Split a whole document into sentences, in reading order
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| split_line(line, index + 1))
        .collect()
}
