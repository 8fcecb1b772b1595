//! Query-to-pattern rewriting.
//!
//! A raw query (literal text, a regular expression, or a Migemo-expanded
//! fragment) is rewritten into final pattern source that operates over
//! unified document text: metacharacters are escaped or preserved per mode,
//! fullwidth punctuation is normalized to its halfwidth form, whitespace
//! runs are folded to `\s+` (documents reflow whitespace unpredictably),
//! and plain text is unified so the pattern and the unified document agree
//! on character forms.

use crate::grapheme::{self, GroupNames};
use crate::migemo::MigemoEngine;
use crate::regex::{self, SearchRegex};
use crate::tables::UnicodeTables;
use crate::unify;
use crate::{Error, Result};

/// How the query string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Literal,
    Regex,
    Migemo,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    pub mode: SearchMode,
    /// Match exact characters only: no unification, case-sensitive.
    pub strict: bool,
    /// Replace a bare `.` with the full grapheme-cluster pattern so it
    /// matches one user-perceived character.
    pub extend_dot: bool,
}

/// Rewrites `query` into final pattern source. `sample` is only consulted
/// to prune the grapheme pattern substituted for `.` under `extend_dot`;
/// a pattern pruned by a sample must only run against that sample.
pub fn transform(
    tables: &UnicodeTables,
    migemo: &MigemoEngine,
    query: &str,
    sample: Option<&str>,
    options: &TransformOptions,
) -> Result<String> {
    match options.mode {
        SearchMode::Literal => transform_literal(tables, query, options),
        SearchMode::Regex => transform_regex(tables, query, sample, options),
        SearchMode::Migemo => {
            let expanded = migemo.query(query);
            transform_regex(tables, &expanded, sample, options)
        }
    }
}

/// [`transform`] followed by compilation with the search flag set.
pub fn compile(
    tables: &UnicodeTables,
    migemo: &MigemoEngine,
    query: &str,
    sample: Option<&str>,
    options: &TransformOptions,
) -> Result<SearchRegex> {
    let source = transform(tables, migemo, query, sample, options)?;
    SearchRegex::for_search(&source, options.strict)
}

/// Escapes all regex semantics: the whole query is matched verbatim
/// (modulo unification and whitespace folding).
pub fn transform_literal(
    tables: &UnicodeTables,
    query: &str,
    options: &TransformOptions,
) -> Result<String> {
    let mut out = String::with_capacity(query.len() * 2);
    for token in tokenize(query)? {
        match token {
            Token::Escaped(pair) => {
                // The user typed a backslash followed by a character; both
                // are literal here.
                out.push_str(&regex::escape(pair));
            }
            Token::Meta(c) => {
                out.push('\\');
                out.push(c);
            }
            Token::Class { body, .. } => {
                // Bracket text is matched verbatim too; reapply to the
                // contents and escape the brackets themselves.
                out.push_str("\\[");
                out.push_str(&transform_literal(tables, body, options)?);
                out.push_str("\\]");
            }
            Token::Run(run) => push_run(tables, &mut out, run, options.strict),
        }
    }
    Ok(out)
}

/// Preserves regex semantics; only literal runs and class contents are
/// folded and normalized.
pub fn transform_regex(
    tables: &UnicodeTables,
    query: &str,
    sample: Option<&str>,
    options: &TransformOptions,
) -> Result<String> {
    let mut names = GroupNames::new();
    let mut out = String::with_capacity(query.len() * 2);
    for token in tokenize(query)? {
        match token {
            Token::Escaped(pair) => out.push_str(pair),
            Token::Meta('.') if options.extend_dot => {
                out.push_str(&grapheme::grapheme_pattern_with(tables, sample, &mut names));
            }
            Token::Meta(c) => out.push(c),
            Token::Class { body, negated, .. } => {
                out.push_str(&rebuild_class(tables, body, negated, options.strict)?);
            }
            Token::Run(run) => push_run(tables, &mut out, run, options.strict),
        }
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// A backslash and the character it escapes.
    Escaped(&'a str),
    /// A bare metacharacter outside a class.
    Meta(char),
    /// A bracketed character class; `body` excludes brackets and any
    /// leading `^`.
    Class { body: &'a str, negated: bool },
    /// A run of ordinary text.
    Run(&'a str),
}

fn tokenize(src: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let bytes = src.as_bytes();
    let mut chars = src.char_indices().peekable();
    let mut run_start: Option<usize> = None;

    while let Some((i, c)) = chars.next() {
        if !matches!(
            c,
            '\\' | '[' | '.' | '*' | '+' | '?' | '(' | ')' | '{' | '}' | '|' | '^' | '$' | ']'
        ) {
            if run_start.is_none() {
                run_start = Some(i);
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            tokens.push(Token::Run(&src[start..i]));
        }
        match c {
            '\\' => {
                let Some(&(j, next)) = chars.peek() else {
                    return Err(Error::PatternSyntax(
                        "trailing backslash at end of pattern".to_string(),
                    ));
                };
                chars.next();
                tokens.push(Token::Escaped(&src[i..j + next.len_utf8()]));
            }
            '[' => match class_end(bytes, i) {
                Some(end) => {
                    let negated = bytes.get(i + 1) == Some(&b'^');
                    let body_start = if negated { i + 2 } else { i + 1 };
                    tokens.push(Token::Class {
                        body: &src[body_start..end],
                        negated,
                    });
                    while chars.peek().is_some_and(|&(k, _)| k <= end) {
                        chars.next();
                    }
                }
                // Unterminated class: hand the bracket through as a
                // metacharacter and let the mode decide.
                None => tokens.push(Token::Meta('[')),
            },
            _ => tokens.push(Token::Meta(c)),
        }
    }
    if let Some(start) = run_start.take() {
        tokens.push(Token::Run(&src[start..]));
    }
    Ok(tokens)
}

/// Byte index of the unescaped `]` closing the class opened at `open`.
fn class_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if bytes.get(i) == Some(&b'^') {
        i += 1;
    }
    // A `]` directly after the opening (or `^`) is a literal member.
    if bytes.get(i) == Some(&b']') {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b']' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Emits a plain text run: fullwidth meta punctuation is normalized to its
/// escaped halfwidth form, whitespace runs fold to `\s+`, and everything
/// else is unified (unless strict) and re-escaped.
fn push_run(tables: &UnicodeTables, out: &mut String, run: &str, strict: bool) {
    let mut in_space = false;
    for g in grapheme::segment(tables, run) {
        let mut cs = g.text.chars();
        let first = match cs.next() {
            Some(c) => c,
            None => continue,
        };
        let single = cs.next().is_none();

        if single && first.is_whitespace() {
            if !in_space {
                out.push_str("\\s+");
                in_space = true;
            }
            continue;
        }
        in_space = false;

        if single {
            if let Some(ascii) = fullwidth_meta(first) {
                out.push('\\');
                out.push(ascii);
                continue;
            }
        }

        if strict {
            out.push_str(&regex::escape(g.text));
        } else {
            let folded = unify::unify_grapheme(tables, g.text);
            out.push_str(&regex::escape(&folded));
        }
    }
}

/// Rebuilds a bracket class. Range triples (`a-z`) pass through untouched;
/// standalone members are normalized and folded, with multi-code-point fold
/// results lifted out of the class into a merged alternation, since a class
/// cannot hold a sequence. Negated classes are normalized but never folded.
fn rebuild_class(
    tables: &UnicodeTables,
    body: &str,
    negated: bool,
    strict: bool,
) -> Result<String> {
    let mut members = String::new();
    let mut alternates: Vec<String> = Vec::new();

    let items = class_items(tables, body)?;
    for item in items {
        match item {
            ClassItem::Escaped(pair) => members.push_str(pair),
            ClassItem::Range(range) => members.push_str(range),
            ClassItem::Member(text) => {
                let mut cs = text.chars();
                let Some(first) = cs.next() else {
                    continue;
                };
                let single = cs.next().is_none();
                if single {
                    if let Some(ascii) = fullwidth_meta(first) {
                        members.push('\\');
                        members.push(ascii);
                        continue;
                    }
                }
                if strict || negated {
                    push_class_member(&mut members, text);
                    continue;
                }
                let folded = unify::unify_grapheme(tables, text);
                if folded.chars().count() == 1 {
                    push_class_member(&mut members, &folded);
                } else {
                    alternates.push(regex::escape(&folded).into_owned());
                }
            }
        }
    }

    let neg = if negated { "^" } else { "" };
    if alternates.is_empty() {
        Ok(format!("[{neg}{members}]"))
    } else if members.is_empty() {
        Ok(format!("(?:{})", alternates.join("|")))
    } else {
        Ok(format!("(?:[{neg}{members}]|{})", alternates.join("|")))
    }
}

#[derive(Debug, Clone, Copy)]
enum ClassItem<'a> {
    Escaped(&'a str),
    /// `x-y` kept verbatim to preserve range semantics.
    Range(&'a str),
    /// One grapheme cluster.
    Member(&'a str),
}

fn class_items<'a>(tables: &UnicodeTables, body: &'a str) -> Result<Vec<ClassItem<'a>>> {
    let mut items = Vec::new();
    let mut i = 0;
    let bytes = body.as_bytes();
    while i < body.len() {
        if bytes[i] == b'\\' {
            let mut it = body[i..].char_indices();
            it.next();
            let Some((off, c)) = it.next() else {
                return Err(Error::PatternSyntax(
                    "trailing backslash in character class".to_string(),
                ));
            };
            let end = i + off + c.len_utf8();
            items.push(ClassItem::Escaped(&body[i..end]));
            i = end;
            continue;
        }
        // Range: CHAR '-' CHAR with the dash neither first nor last.
        let rest = &body[i..];
        if let Some(end) = range_len(rest) {
            items.push(ClassItem::Range(&rest[..end]));
            i += end;
            continue;
        }
        // One grapheme cluster; clusters inside classes are rare but legal
        // in source text, so take marks together with their base.
        let cluster_end = grapheme::segment(tables, rest)
            .next()
            .map(|g| g.text.len())
            .unwrap_or(rest.len());
        items.push(ClassItem::Member(&rest[..cluster_end]));
        i += cluster_end;
    }
    Ok(items)
}

/// Byte length of a leading `x-y` range of `s`, if present.
fn range_len(s: &str) -> Option<usize> {
    let mut it = s.char_indices();
    let (_, a) = it.next()?;
    if a == '-' {
        return None;
    }
    match it.next() {
        Some((_, '-')) => {}
        _ => return None,
    }
    let (b_off, b) = it.next()?;
    if b == '\\' {
        return None;
    }
    Some(b_off + b.len_utf8())
}

/// Fullwidth forms of the pattern metacharacters map onto their ASCII
/// counterparts (U+FF01..U+FF5E is a straight offset of the ASCII block).
fn fullwidth_meta(c: char) -> Option<char> {
    let cp = c as u32;
    if !(0xFF01..=0xFF5E).contains(&cp) {
        return None;
    }
    let ascii = char::from_u32(cp - 0xFEE0)?;
    regex::is_meta(ascii).then_some(ascii)
}

fn push_class_member(members: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '\\' | ']' | '[' | '^' | '-') {
            members.push('\\');
        }
        members.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(q: &str) -> String {
        transform_literal(&UnicodeTables::bundled(), q, &TransformOptions::default()).unwrap()
    }

    fn regex_mode(q: &str) -> String {
        transform_regex(
            &UnicodeTables::bundled(),
            q,
            None,
            &TransformOptions {
                mode: SearchMode::Regex,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn literal_escapes_every_metacharacter() {
        let source = literal("a+b.c?");
        let re = SearchRegex::for_search(&source, false).unwrap();
        assert!(re.is_match("a+b.c?").unwrap());
        assert!(!re.is_match("aab.c").unwrap());
    }

    #[test]
    fn whitespace_folds_to_runs() {
        let source = literal("def  ghi");
        assert!(source.contains("\\s+"));
        let re = SearchRegex::for_search(&source, false).unwrap();
        assert!(re.is_match("def \t  ghi").unwrap());
    }

    #[test]
    fn fullwidth_punctuation_normalizes() {
        // Fullwidth question mark becomes an escaped ASCII one.
        assert_eq!(literal("\u{FF1F}"), "\\?");
        assert_eq!(regex_mode("a\u{FF0B}"), "a\\+");
    }

    #[test]
    fn regex_mode_preserves_semantics() {
        let source = regex_mode("a(b|c)+d");
        let re = SearchRegex::for_search(&source, false).unwrap();
        assert!(re.is_match("abcbd").unwrap());
    }

    #[test]
    fn runs_are_unified_unless_strict() {
        let tables = UnicodeTables::bundled();
        let source = regex_mode("caf\u{E9}");
        let re = SearchRegex::for_search(&source, false).unwrap();
        assert!(re.is_match(&unify::unify_string(&tables, "CAF\u{C9}")).unwrap());

        let strict = transform_regex(
            &tables,
            "caf\u{E9}",
            None,
            &TransformOptions {
                mode: SearchMode::Regex,
                strict: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(strict.contains('\u{E9}'));
    }

    #[test]
    fn class_folding_lifts_sequences() {
        // ガ folds to a two-code-point sequence and must leave the class.
        let source = regex_mode("[a\u{30AC}]");
        assert!(source.starts_with("(?:["));
        let re = SearchRegex::for_search(&source, false).unwrap();
        assert!(re.is_match("\u{30AB}\u{3099}").unwrap());
        assert!(re.is_match("a").unwrap());
    }

    #[test]
    fn class_ranges_pass_through() {
        assert_eq!(regex_mode("[D-H]"), "[D-H]");
        assert_eq!(regex_mode("[^a-z]"), "[^a-z]");
    }

    #[test]
    fn trailing_backslash_is_a_syntax_error() {
        let err = regex_mode_err("abc\\");
        assert!(matches!(err, Error::PatternSyntax(_)));
        let err = transform_literal(
            &UnicodeTables::bundled(),
            "abc\\",
            &TransformOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::PatternSyntax(_)));
    }

    fn regex_mode_err(q: &str) -> Error {
        transform_regex(
            &UnicodeTables::bundled(),
            q,
            None,
            &TransformOptions {
                mode: SearchMode::Regex,
                ..Default::default()
            },
        )
        .unwrap_err()
    }

    #[test]
    fn extend_dot_substitutes_grapheme_pattern() {
        let tables = UnicodeTables::bundled();
        let source = transform_regex(
            &tables,
            "a.c",
            None,
            &TransformOptions {
                mode: SearchMode::Regex,
                extend_dot: true,
                ..Default::default()
            },
        )
        .unwrap();
        let re = SearchRegex::for_search(&format!("^{source}$"), false).unwrap();
        // One grapheme, not one code point.
        assert!(re.is_match("ab\u{301}\u{302}c").unwrap());
        assert!(!re.is_match("abbc").unwrap());
    }

    #[test]
    fn two_dots_under_extend_dot_do_not_collide() {
        let tables = UnicodeTables::bundled();
        let source = transform_regex(
            &tables,
            "a..b",
            None,
            &TransformOptions {
                mode: SearchMode::Regex,
                extend_dot: true,
                ..Default::default()
            },
        )
        .unwrap();
        // Distinct guard-group names let the pattern compile.
        SearchRegex::for_search(&source, false).unwrap();
    }

    #[test]
    fn migemo_mode_expands_before_rewriting() {
        let tables = UnicodeTables::bundled();
        let engine = MigemoEngine::new();
        let source = transform(
            &tables,
            &engine,
            "ka",
            None,
            &TransformOptions {
                mode: SearchMode::Migemo,
                ..Default::default()
            },
        )
        .unwrap();
        let re = SearchRegex::for_search(&source, false).unwrap();
        let doc = unify::unify_string(&tables, "\u{304B}");
        assert!(re.is_match(&doc).unwrap());
    }
}
