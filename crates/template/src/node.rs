// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed template nodes.

use iv_core::UnitSelector;

/// What follows the number of a rendered placeholder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixKind {
    #[default]
    None,
    /// `{m.}`: the locale's abbreviation
    Abbreviation,
    /// `{minutes}`: the locale's pluralized unit word
    Word,
}

/// Everything one `{...}` placeholder asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub unit: UnitSelector,
    /// Upper-case unit letter: report the total instead of the remainder
    pub cumulative: bool,
    /// Zero-padding width, one per repeated unit letter
    pub min_digits: usize,
    pub suffix: SuffixKind,
    /// `?` marker: render nothing when the unit's total is zero
    pub optional: bool,
    /// Text after `?`, written only when the placeholder is rendered
    pub optional_suffix: String,
}

impl PlaceholderSpec {
    /// A bare `{x}` placeholder for `unit`.
    pub fn new(unit: impl Into<UnitSelector>, cumulative: bool) -> Self {
        Self {
            unit: unit.into(),
            cumulative,
            min_digits: 1,
            suffix: SuffixKind::None,
            optional: false,
            optional_suffix: String::new(),
        }
    }
}

/// One element of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatNode {
    Literal(String),
    Placeholder(PlaceholderSpec),
    /// A `{...}` span that did not match the placeholder grammar
    Invalid,
}
