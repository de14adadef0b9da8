// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template parser: splits a template into literal text and placeholders.

use crate::node::{FormatNode, PlaceholderSpec, SuffixKind};
use iv_core::UnitSelector;
use regex::Regex;
use std::sync::LazyLock;

/// Shape of a placeholder interior: unit letters, optional `.`, optional
/// `?` followed by free text. Letter details are checked afterwards.
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<letters>[A-Za-z]+)(?P<abbr>\.)?(?:\?(?P<tail>.*))?$")
        .expect("constant regex pattern is valid")
});

/// Template parser.
///
/// Parsing never fails: every input produces a node list, with malformed
/// `{...}` spans turned into [`FormatNode::Invalid`].
///
/// ```ignore
/// use iv_template::{FormatNode, Parser};
///
/// let nodes = Parser::parse("{x} and \\{S}");
/// assert_eq!(nodes[0], FormatNode::Invalid);
/// assert_eq!(nodes[1], FormatNode::Literal(" and ".into()));
/// assert_eq!(nodes[2], FormatNode::Literal("{".into()));
/// assert_eq!(nodes[3], FormatNode::Literal("S}".into()));
/// ```
pub struct Parser<'a> {
    input: &'a str,
    /// Byte offset of the first unconsumed character
    pos: usize,
    nodes: Vec<FormatNode>,
}

impl<'a> Parser<'a> {
    /// Parse a template into its nodes.
    pub fn parse(input: &'a str) -> Vec<FormatNode> {
        let mut parser = Parser {
            input,
            pos: 0,
            nodes: Vec::new(),
        };
        parser.parse_nodes();
        parser.nodes
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn parse_nodes(&mut self) {
        while self.pos < self.input.len() {
            let rest = self.rest();
            match rest.find(['{', '\\']) {
                Some(0) if rest.starts_with('\\') => self.parse_escape(),
                Some(0) => self.parse_placeholder_span(),
                Some(n) => {
                    self.push_literal(&rest[..n]);
                    self.pos += n;
                }
                None => {
                    self.push_literal(rest);
                    self.pos = self.input.len();
                }
            }
        }
    }

    /// `\X` writes X. A backslash at the very end writes nothing.
    fn parse_escape(&mut self) {
        self.pos += 1;
        if let Some(c) = self.rest().chars().next() {
            self.nodes.push(FormatNode::Literal(c.to_string()));
            self.pos += c.len_utf8();
        }
    }

    /// `{` up to and including the next `}`, or to the end of input.
    fn parse_placeholder_span(&mut self) {
        let start = self.pos;
        let rest = self.rest();
        let node = match rest[1..].find('}') {
            Some(close) => {
                let code = &rest[1..1 + close];
                self.pos += close + 2;
                match parse_placeholder(code) {
                    Some(spec) => FormatNode::Placeholder(spec),
                    None => {
                        tracing::debug!(code, offset = start, "invalid placeholder");
                        FormatNode::Invalid
                    }
                }
            }
            None => {
                tracing::debug!(code = &rest[1..], offset = start, "unterminated placeholder");
                self.pos = self.input.len();
                FormatNode::Invalid
            }
        };
        self.nodes.push(node);
    }

    fn push_literal(&mut self, text: &str) {
        if !text.is_empty() {
            self.nodes.push(FormatNode::Literal(text.to_string()));
        }
    }
}

/// Parse the text between `{` and `}`.
///
/// Returns `None` when the code does not follow the placeholder grammar:
/// a unit letter (`w d h m s g`, case picks total vs. remainder), repeated
/// for zero padding, then either `.` or the rest of the unit word
/// (`{minutes}`, `{DDays}`), then optionally `?` and free text.
pub fn parse_placeholder(code: &str) -> Option<PlaceholderSpec> {
    let caps = PLACEHOLDER_PATTERN.captures(code)?;
    let letters = caps.name("letters")?.as_str();
    let first = letters.chars().next()?;
    let unit = UnitSelector::from_letter(first)?;

    // Letters are ASCII, so the run length is also a byte offset
    let run = letters.chars().take_while(|&c| c == first).count();
    let word = &letters[run..];
    let abbreviated = caps.name("abbr").is_some();

    let suffix = match (word.is_empty(), abbreviated) {
        (true, false) => SuffixKind::None,
        (true, true) => SuffixKind::Abbreviation,
        (false, false) if is_unit_word(unit, word) => SuffixKind::Word,
        _ => return None,
    };

    let tail = caps.name("tail");
    Some(PlaceholderSpec {
        unit,
        cumulative: first.is_ascii_uppercase(),
        min_digits: run,
        suffix,
        optional: tail.is_some(),
        optional_suffix: tail.map(|m| m.as_str().to_string()).unwrap_or_default(),
    })
}

/// Whether `word` completes the unit's name after its letter, singular or
/// plural, in any case: `inute`, `INUTES`, `reatests`.
fn is_unit_word(unit: UnitSelector, word: &str) -> bool {
    let stem = &unit.name()[1..];
    match word.len().checked_sub(stem.len()) {
        Some(0) => word.eq_ignore_ascii_case(stem),
        Some(1) => {
            word[..stem.len()].eq_ignore_ascii_case(stem) && word.ends_with(['s', 'S'])
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
