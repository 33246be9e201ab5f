//! Line splitting
//!
//! Turns raw file content into a [`LineSequence`]: one [`Line`] per line
//! terminator boundary, numbered from zero. Both `\n` and `\r\n` terminate a
//! line; a lone `\r` stays part of the text. The last line is kept even when
//! the content does not end with a terminator, and the sequence remembers
//! that fact so renderers can print the "No newline at end of file" marker.

use derive_new::new;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Line {
    index: usize,
    text: String,
}

impl Line {
    /// Zero-based position of the line in its own file.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based line number, as shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSequence {
    lines: Vec<Line>,
    missing_newline_at_eof: bool,
}

impl LineSequence {
    pub fn split(content: &str) -> Self {
        let lines = content
            .split_inclusive('\n')
            .enumerate()
            .map(|(index, raw)| {
                let text = match raw.strip_suffix('\n') {
                    Some(text) => text.strip_suffix('\r').unwrap_or(text),
                    None => raw,
                };
                Line::new(index, text.to_string())
            })
            .collect();

        LineSequence {
            lines,
            missing_newline_at_eof: !content.is_empty() && !content.ends_with('\n'),
        }
    }

    /// Splits raw bytes, replacing invalid UTF-8 with U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::split(&String::from_utf8_lossy(bytes))
    }

    /// Builds a newline-terminated sequence from already separated texts.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Line::new(index, text.into()))
            .collect();

        LineSequence {
            lines,
            missing_newline_at_eof: false,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn slice(&self, range: Range<usize>) -> &[Line] {
        &self.lines[range]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::text)
    }

    pub fn missing_newline_at_eof(&self) -> bool {
        self.missing_newline_at_eof
    }

    /// True when `index` is the final line and it has no terminator.
    pub fn is_unterminated(&self, index: usize) -> bool {
        self.missing_newline_at_eof && index + 1 == self.lines.len()
    }
}
