//! Tolerant lookups over decoded document text.
//!
//! Every lookup returns `Option` so a missing or malformed section only leaves
//! the corresponding field at its default.

use regex::Regex;

use super::patterns::EMAIL;
use crate::models::record::{NO, YES};

/// Decoded document text with lowercase and per-line views.
pub struct DocumentText<'a> {
    text: &'a str,
    lower: String,
    lines: Vec<&'a str>,
}

impl<'a> DocumentText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            lines: text.lines().collect(),
        }
    }

    /// Original text.
    pub fn raw(&self) -> &'a str {
        self.text
    }

    /// Lowercased text.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Text split into lines.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// First capture group of the first match, trimmed.
    pub fn capture(&self, re: &Regex) -> Option<String> {
        capture_in(self.text, re)
    }

    /// First capture group of the first match, untouched.
    pub fn capture_raw(&self, re: &Regex) -> Option<&'a str> {
        re.captures(self.text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Like [`capture`](Self::capture) with a fallback value.
    pub fn capture_or(&self, re: &Regex, default: &str) -> String {
        self.capture(re).unwrap_or_else(|| default.to_string())
    }

    /// Groups 1 and 2 of the first match, trimmed.
    pub fn capture_pair(&self, re: &Regex) -> Option<(String, String)> {
        let caps = re.captures(self.text)?;
        let first = caps.get(1)?.as_str().trim().to_string();
        let second = caps.get(2)?.as_str().trim().to_string();
        Some((first, second))
    }

    /// Whether the lowercased text contains `phrase` (given in lowercase).
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.lower.contains(phrase)
    }

    /// Index of the first line containing `needle`, ignoring case.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.lines
            .iter()
            .position(|line| line.to_lowercase().contains(&needle))
    }

    /// Trimmed line `offset` lines below the first line containing `label`.
    ///
    /// Later occurrences of the label are tried when the first one is too
    /// close to the end of the document.
    pub fn line_after(&self, label: &str, offset: usize) -> Option<String> {
        let label = label.to_lowercase();
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&label))
            .find_map(|(i, _)| self.lines.get(i + offset))
            .map(|line| line.trim().to_string())
    }

    /// First non-empty trimmed line among the `count` lines after `index`.
    pub fn first_non_empty_after(&self, index: usize, count: usize) -> Option<String> {
        self.lines
            .iter()
            .skip(index + 1)
            .take(count)
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .map(str::to_string)
    }

    /// First email within `window` lines after the first line containing `label`.
    pub fn email_near(&self, label: &str, window: usize) -> Option<String> {
        let start = self.find_line(label)?;
        self.lines
            .iter()
            .skip(start + 1)
            .take(window)
            .find_map(|line| EMAIL.find(line))
            .map(|m| m.as_str().trim().to_string())
    }

    /// First email-shaped substring anywhere in the document.
    pub fn first_email(&self) -> Option<String> {
        EMAIL.find(self.text).map(|m| m.as_str().trim().to_string())
    }
}

/// First capture group of `re` in `text`, trimmed.
pub fn capture_in(text: &str, re: &Regex) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Map a marker test to the `ANO` / `NE` field values.
pub fn yes_no(present: bool) -> &'static str {
    if present { YES } else { NO }
}

/// Collapse every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
