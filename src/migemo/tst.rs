//! Ternary-search-tree regex generator.
//!
//! Candidate words go into a tree of sorted sibling lists; prefix-subsumed
//! words collapse as they are added, so "検索" absorbs "検索する" and a later
//! "検" prunes both. Emission groups leaf siblings into one character class
//! and everything else into a non-capturing alternation, which keeps the
//! generated fragment linear in the surviving word set.

/// Dialect knobs for the emitted fragment.
#[derive(Debug, Clone)]
pub struct RegexOperators {
    pub or: &'static str,
    pub begin_group: &'static str,
    pub end_group: &'static str,
    pub begin_class: &'static str,
    pub end_class: &'static str,
    /// Inserted after every alternation bar; some editors want line breaks
    /// in long patterns.
    pub newline: &'static str,
    /// Characters backslash-escaped outside character classes. Class members
    /// are always escaped against the class delimiters themselves.
    pub escape: &'static str,
}

impl Default for RegexOperators {
    fn default() -> Self {
        Self {
            or: "|",
            begin_group: "(?:",
            end_group: ")",
            begin_class: "[",
            end_class: "]",
            newline: "",
            escape: "\\.*+?()[]{}|^$",
        }
    }
}

struct Node {
    code: char,
    /// `None` marks the end of a word; subsumption works by cutting this.
    child: Option<Box<Node>>,
    next: Option<Box<Node>>,
}

#[derive(Default)]
pub(crate) struct RegexGenerator {
    root: Option<Box<Node>>,
}

impl RegexGenerator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, word: &str) {
        let word: Vec<char> = word.chars().collect();
        if word.is_empty() {
            return;
        }
        stacker::grow(32 * 1024 * 1024, || {
            Self::insert(&mut self.root, &word);
        });
    }

    fn insert(slot: &mut Option<Box<Node>>, word: &[char]) {
        let Some((&head, rest)) = word.split_first() else {
            return;
        };
        match slot {
            Some(node) if head == node.code => {
                if rest.is_empty() {
                    // The new word is a prefix of existing ones; they all
                    // collapse into it.
                    node.child = None;
                } else if node.child.is_some() {
                    Self::insert(&mut node.child, rest);
                }
                // child == None: an existing shorter word already covers
                // this addition.
            }
            Some(node) if head > node.code => Self::insert(&mut node.next, word),
            _ => {
                let mut fresh = Box::new(Node {
                    code: head,
                    child: None,
                    next: slot.take(),
                });
                Self::chain(&mut fresh.child, rest);
                *slot = Some(fresh);
            }
        }
    }

    fn chain(slot: &mut Option<Box<Node>>, word: &[char]) {
        if let Some((&head, rest)) = word.split_first() {
            let mut fresh = Box::new(Node {
                code: head,
                child: None,
                next: None,
            });
            Self::chain(&mut fresh.child, rest);
            *slot = Some(fresh);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn generate(&self, ops: &RegexOperators) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            stacker::grow(32 * 1024 * 1024, || {
                Self::emit(root, ops, &mut out);
            });
        }
        out
    }

    fn emit(list: &Node, ops: &RegexOperators, out: &mut String) {
        let mut leaves = Vec::new();
        let mut parts = Vec::new();
        let mut cursor = Some(list);
        while let Some(node) = cursor {
            match &node.child {
                None => leaves.push(node.code),
                Some(child) => {
                    let mut part = String::new();
                    push_escaped(node.code, ops, &mut part);
                    Self::emit(child, ops, &mut part);
                    parts.push(part);
                }
            }
            cursor = node.next.as_deref();
        }
        match leaves.len() {
            0 => {}
            1 => {
                let mut part = String::new();
                push_escaped(leaves[0], ops, &mut part);
                parts.push(part);
            }
            _ => {
                let mut part = String::from(ops.begin_class);
                for code in leaves {
                    push_class_escaped(code, &mut part);
                }
                part.push_str(ops.end_class);
                parts.push(part);
            }
        }
        if parts.len() == 1 {
            out.push_str(&parts[0]);
        } else {
            out.push_str(ops.begin_group);
            let separator = format!("{}{}", ops.or, ops.newline);
            out.push_str(&parts.join(&separator));
            out.push_str(ops.end_group);
        }
    }
}

fn push_escaped(code: char, ops: &RegexOperators, out: &mut String) {
    if ops.escape.contains(code) {
        out.push('\\');
    }
    out.push(code);
}

fn push_class_escaped(code: char, out: &mut String) {
    if matches!(code, '\\' | ']' | '[' | '^' | '-') {
        out.push('\\');
    }
    out.push(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(words: &[&str]) -> String {
        let mut generator = RegexGenerator::new();
        for word in words {
            generator.add(word);
        }
        generator.generate(&RegexOperators::default())
    }

    #[test]
    fn sibling_leaves_become_a_class() {
        assert_eq!(generated(&["a"]), "a");
        assert_eq!(generated(&["b", "a", "c"]), "[abc]");
    }

    #[test]
    fn mixed_siblings_become_an_alternation() {
        assert_eq!(generated(&["ab", "c"]), "(?:ab|c)");
        assert_eq!(generated(&["ab", "ac"]), "a[bc]");
    }

    #[test]
    fn shorter_words_absorb_longer_ones() {
        assert_eq!(generated(&["検索", "検索する"]), "検索");
        assert_eq!(generated(&["検索する", "検索"]), "検索");
        assert_eq!(generated(&["検索", "検討", "検"]), "検");
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(generated(&["かき", "かき"]), "かき");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(generated(&["a+b"]), "a\\+b");
        assert_eq!(generated(&["^", "$"]), "[$\\^]");
        assert_eq!(generated(&["a-1", "a-2"]), "a-[12]");
    }

    #[test]
    fn escape_list_is_operator_driven() {
        let mut generator = RegexGenerator::new();
        generator.add("a+b");
        let raw = RegexOperators {
            escape: "",
            ..Default::default()
        };
        assert_eq!(generator.generate(&raw), "a+b");
        let wide = RegexOperators {
            escape: "+-",
            ..Default::default()
        };
        assert_eq!(generator.generate(&wide), "a\\+b");
    }

    #[test]
    fn empty_generator_emits_nothing() {
        let generator = RegexGenerator::new();
        assert!(generator.is_empty());
        assert_eq!(generator.generate(&RegexOperators::default()), "");
    }
}
