//! Thin wrapper over the `fancy_regex` backend.
//!
//! All backend types stay private to this module; the rest of the crate and
//! its callers deal in [`SearchRegex`] and the crate error type. The
//! generated patterns rely on lookahead and named backreferences, which is
//! why the backend is `fancy_regex` and not the plain `regex` crate.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::{Error, Result};

/// A compiled search pattern.
#[derive(Debug, Clone)]
pub struct SearchRegex {
    backend: fancy_regex::Regex,
}

impl SearchRegex {
    /// Compiles `pattern` with the flag set every search pattern gets:
    /// multi-line, dot-matches-new-line, and case-insensitive unless
    /// `strict`.
    pub fn for_search(pattern: &str, strict: bool) -> Result<Self> {
        SearchRegexBuilder::new(pattern)
            .case_insensitive(!strict)
            .build()
    }

    pub fn as_str(&self) -> &str {
        self.backend.as_str()
    }

    pub fn is_match(&self, input: &str) -> Result<bool> {
        self.backend.is_match(input).map_err(Error::from_backend)
    }

    pub fn find(&self, input: &str) -> Result<Option<Match>> {
        let matched = self.backend.find(input).map_err(Error::from_backend)?;
        Ok(matched.map(Match::from_backend))
    }

    pub fn find_from(&self, input: &str, start: usize) -> Result<Option<Match>> {
        let matched = self
            .backend
            .find_from_pos(input, start)
            .map_err(Error::from_backend)?;
        Ok(matched.map(Match::from_backend))
    }

    pub fn find_all(&self, input: &str) -> Result<Vec<Match>> {
        let mut out = Vec::new();
        for matched in self.backend.find_iter(input) {
            let matched = matched.map_err(Error::from_backend)?;
            out.push(Match::from_backend(matched));
        }
        Ok(out)
    }

    pub fn captures(&self, input: &str) -> Result<Option<Captures>> {
        let captures = self.backend.captures(input).map_err(Error::from_backend)?;
        Ok(captures.map(|c| Captures::from_backend(&self.backend, &c)))
    }
}

/// Builder mirroring the flags the transformer hands out.
#[derive(Debug, Clone)]
pub struct SearchRegexBuilder {
    pattern: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
}

impl SearchRegexBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            case_insensitive: false,
            multi_line: true,
            dot_matches_new_line: true,
        }
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn multi_line(mut self, enabled: bool) -> Self {
        self.multi_line = enabled;
        self
    }

    pub fn dot_matches_new_line(mut self, enabled: bool) -> Self {
        self.dot_matches_new_line = enabled;
        self
    }

    pub fn build(self) -> Result<SearchRegex> {
        let mut builder = fancy_regex::RegexBuilder::new(&self.pattern);
        builder.case_insensitive(self.case_insensitive);
        builder.multi_line(self.multi_line);
        builder.dot_matches_new_line(self.dot_matches_new_line);
        let backend = builder.build().map_err(Error::from_backend)?;
        Ok(SearchRegex { backend })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures {
    groups: Vec<Option<Match>>,
    names: HashMap<String, usize>,
}

impl Captures {
    fn from_backend(regex: &fancy_regex::Regex, captures: &fancy_regex::Captures<'_>) -> Self {
        let groups = (0..captures.len())
            .map(|idx| captures.get(idx).map(Match::from_backend))
            .collect();
        let names = regex
            .capture_names()
            .enumerate()
            .filter_map(|(idx, name)| name.map(|n| (n.to_string(), idx)))
            .collect();
        Self { groups, names }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Match> {
        self.groups.get(index).and_then(Option::as_ref)
    }

    /// The match of a named group, when that group participated.
    pub fn name(&self, name: &str) -> Option<&Match> {
        self.names.get(name).and_then(|&idx| self.get(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    start: usize,
    end: usize,
    text: String,
}

impl Match {
    fn from_backend(matched: fancy_regex::Match<'_>) -> Self {
        Self {
            start: matched.start(),
            end: matched.end(),
            text: matched.as_str().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

impl Error {
    fn from_backend(value: fancy_regex::Error) -> Self {
        Error::RegexCompile(value.to_string())
    }
}

/// Escapes every regex metacharacter in `value`.
pub fn escape(value: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(value.len());
    let mut changed = false;
    for ch in value.chars() {
        if is_meta(ch) {
            out.push('\\');
            changed = true;
        }
        out.push(ch);
    }
    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(value)
    }
}

pub(crate) fn is_meta(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_apply() {
        let re = SearchRegex::for_search("a.b", false).unwrap();
        assert!(re.is_match("A\nB").unwrap());
        let strict = SearchRegex::for_search("a.b", true).unwrap();
        assert!(!strict.is_match("A\nB").unwrap());
        assert!(strict.is_match("a\nb").unwrap());
    }

    #[test]
    fn named_groups_round_trip() {
        let re = SearchRegexBuilder::new("(?<word>\\w+)-(\\d+)").build().unwrap();
        let captures = re.captures("abc-42").unwrap().unwrap();
        assert_eq!(captures.name("word").unwrap().as_str(), "abc");
        assert_eq!(captures.get(2).unwrap().as_str(), "42");
    }

    #[test]
    fn backreference_guard_compiles() {
        let re = SearchRegexBuilder::new("(?=(?<g1>a*))\\k<g1>b")
            .build()
            .unwrap();
        assert!(re.is_match("aaab").unwrap());
    }

    #[test]
    fn escape_covers_meta() {
        assert_eq!(escape("a+b"), "a\\+b");
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("[a]{2}"), "\\[a\\]\\{2\\}");
    }

    #[test]
    fn compile_error_is_typed() {
        let err = SearchRegexBuilder::new("(unclosed").build().unwrap_err();
        assert!(matches!(err, Error::RegexCompile(_)));
    }
}
