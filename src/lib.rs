use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    PatternSyntax(String),
    RegexCompile(String),
    DictionaryFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternSyntax(msg) => write!(f, "pattern syntax error: {msg}"),
            Self::RegexCompile(msg) => write!(f, "regex compile error: {msg}"),
            Self::DictionaryFormat(msg) => write!(f, "dictionary format error: {msg}"),
        }
    }
}

impl StdError for Error {}

mod grapheme;
pub mod migemo;
mod regex;
mod tables;
mod transform;
mod unicode_data;
mod unify;

pub use crate::grapheme::{
    core_pattern, grapheme_pattern, grapheme_pattern_with, segment, Grapheme, Graphemes,
    GroupNames,
};
pub use crate::migemo::dict::CompactDictionary;
pub use crate::migemo::dict_builder::CompactDictionaryBuilder;
pub use crate::migemo::MigemoEngine;
pub use crate::regex::{escape, Captures, Match, SearchRegex, SearchRegexBuilder};
pub use crate::tables::UnicodeTables;
pub use crate::transform::{SearchMode, TransformOptions};
pub use crate::unify::FoldKind;

/// One-stop handle bundling the Unicode tables with an optional Migemo
/// dictionary. Immutable after construction and `Send + Sync`; swapping a
/// dictionary means building a new `Finder`.
pub struct Finder {
    tables: UnicodeTables,
    migemo: MigemoEngine,
}

impl Finder {
    pub fn new() -> Self {
        Self {
            tables: UnicodeTables::bundled(),
            migemo: MigemoEngine::new(),
        }
    }

    pub fn with_dictionary(dict: CompactDictionary) -> Self {
        Self {
            tables: UnicodeTables::bundled(),
            migemo: MigemoEngine::with_dictionary(dict),
        }
    }

    /// Rewrites `query` into pattern source per `options`. `sample` prunes
    /// the grapheme pattern substituted for `.` under `extend_dot`; a
    /// pattern pruned by a sample must only run against that sample.
    pub fn transform(
        &self,
        query: &str,
        sample: Option<&str>,
        options: &TransformOptions,
    ) -> Result<String> {
        transform::transform(&self.tables, &self.migemo, query, sample, options)
    }

    /// [`Finder::transform`] followed by compilation with the search flags.
    pub fn compile(
        &self,
        query: &str,
        sample: Option<&str>,
        options: &TransformOptions,
    ) -> Result<SearchRegex> {
        transform::compile(&self.tables, &self.migemo, query, sample, options)
    }

    /// Canonicalizes `text` cluster by cluster.
    pub fn unify(&self, text: &str) -> String {
        unify::unify_string(&self.tables, text)
    }

    pub fn graphemes<'a>(&self, text: &'a str) -> Graphemes<'a> {
        grapheme::segment(&self.tables, text)
    }

    pub fn tables(&self) -> &UnicodeTables {
        &self.tables
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finder_wires_the_pieces_together() {
        let finder = Finder::new();
        assert_eq!(finder.unify("\u{0065}\u{0301}"), "e");
        assert_eq!(finder.graphemes("a\u{0301}b").count(), 2);
        let re = finder
            .compile("outer", None, &TransformOptions::default())
            .unwrap();
        let doc = finder.unify("o\u{0308}uter");
        assert!(re.is_match(&doc).unwrap());
    }

    #[test]
    fn errors_format_with_context() {
        let err = Error::PatternSyntax("trailing backslash".to_string());
        assert_eq!(err.to_string(), "pattern syntax error: trailing backslash");
        let err = Error::DictionaryFormat("truncated input".to_string());
        assert!(err.to_string().contains("truncated"));
    }
}
