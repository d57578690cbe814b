// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Indentation-aware line buffer for generated source.
//!
//! Lines are stored with their nesting level and rendered with the
//! configured indent unit, so the same buffer serves both the file rewriter
//! and the derive macro.

use crate::config::Indent;

/// Generated source lines.
#[derive(Debug, Default)]
pub struct SourceWriter {
    lines: Vec<(usize, String)>,
    level: usize
}

impl SourceWriter {
    /// Empty buffer at level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line at the current level.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push((self.level, text.into()));
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push((0, String::new()));
        self
    }

    /// Append a line and indent the following ones.
    pub fn open(&mut self, text: impl Into<String>) -> &mut Self {
        self.line(text);
        self.level += 1;
        self
    }

    /// Outdent and append a line.
    pub fn close(&mut self, text: impl Into<String>) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self.line(text)
    }

    /// Indent the following lines.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Outdent the following lines.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Append `///` documentation, one line per text line.
    pub fn doc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self.line("///");
        }
        for line in text.lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
        self
    }

    /// Append the lines of another buffer, nested at the current level.
    pub fn append(&mut self, other: SourceWriter) -> &mut Self {
        for (level, text) in other.lines {
            if text.is_empty() {
                self.blank();
            } else {
                self.lines.push((self.level + level, text));
            }
        }
        self
    }

    /// Text of the only line, when exactly one was written.
    pub fn single_line(&self) -> Option<&str> {
        match self.lines.as_slice() {
            [(_, text)] => Some(text),
            _ => None
        }
    }

    /// Check if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered lines without line endings.
    ///
    /// Runs of blank lines collapse to one; leading and trailing blanks are
    /// dropped.
    pub fn lines(&self, indent: Indent) -> Vec<String> {
        let unit = indent.unit();
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for (level, text) in &self.lines {
            if text.is_empty() {
                if out.last().is_some_and(|last| !last.is_empty()) {
                    out.push(String::new());
                }
                continue;
            }
            out.push(format!("{}{text}", unit.repeat(*level)));
        }
        while out.last().is_some_and(String::is_empty) {
            out.pop();
        }
        out
    }

    /// Rendered text joined with `\n`.
    pub fn render(&self, indent: Indent) -> String {
        let mut text = self.lines(indent).join("\n");
        text.push('\n');
        text
    }
}
