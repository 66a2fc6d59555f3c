//! Line, word, byte, and character counting.
//!
//! The semantics follow the classic tool: a final line without a terminator
//! still counts, words are whitespace-separated tokens, and the longest-line
//! length includes the terminator.

use serde::Serialize;

/// Counts for a single input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Count {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
    pub characters: usize,
    pub longest_line: usize,
}

impl Count {
    /// Compute all counts for `content`. When `longest_in_chars` is set the
    /// longest-line length is measured in characters instead of bytes.
    ///
    /// Invalid UTF-8 is replaced lossily for the text-based counts; the byte
    /// count always reflects the raw input.
    pub fn from_content(content: &[u8], longest_in_chars: bool) -> Self {
        let text = String::from_utf8_lossy(content);
        Self {
            lines: count_lines(&text),
            words: count_words(&text),
            bytes: content.len(),
            characters: count_characters(&text),
            longest_line: longest_line_length(&text, longest_in_chars),
        }
    }

    /// Fold `other` into a running total. Longest-line totals take the
    /// maximum rather than the sum.
    pub fn accumulate(&mut self, other: &Count) {
        self.lines += other.lines;
        self.words += other.words;
        self.bytes += other.bytes;
        self.characters += other.characters;
        self.longest_line = self.longest_line.max(other.longest_line);
    }
}

/// Counts for one input within a run, tagged with its file name.
/// Standard input carries no name.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: Option<String>,
    pub count: Count,
}

/// The full result of a run: one entry per input plus an optional total
/// when more than one file was counted.
#[derive(Debug, Default, Clone)]
pub struct Report {
    pub files: Vec<FileReport>,
    pub total: Option<Count>,
}

fn count_lines(text: &str) -> usize {
    text.lines().count()
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn count_characters(text: &str) -> usize {
    text.chars().count()
}

fn longest_line_length(text: &str, in_chars: bool) -> usize {
    let mut max = 0;
    for line in text.lines() {
        // Length includes the line terminator.
        let len = if in_chars {
            line.chars().count()
        } else {
            line.len()
        } + 1;
        max = max.max(len);
    }
    max
}
