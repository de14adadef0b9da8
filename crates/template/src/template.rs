// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed, reusable templates.

use crate::node::{FormatNode, PlaceholderSpec};
use crate::parser::Parser;
use crate::render::render;
use iv_core::{Localizer, UnitBreakdown};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A template parsed once and rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    nodes: Vec<FormatNode>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            nodes: Parser::parse(source),
        }
    }

    /// The template text this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn nodes(&self) -> &[FormatNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether any placeholder will render as the invalid marker.
    pub fn has_invalid(&self) -> bool {
        self.nodes.contains(&FormatNode::Invalid)
    }

    /// Valid placeholders, in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &PlaceholderSpec> {
        self.nodes.iter().filter_map(|node| match node {
            FormatNode::Placeholder(spec) => Some(spec),
            _ => None,
        })
    }

    pub fn render(&self, breakdown: &UnitBreakdown, localizer: &dyn Localizer) -> String {
        render(&self.nodes, breakdown, localizer)
    }

    pub fn render_seconds(&self, seconds: u64, localizer: &dyn Localizer) -> String {
        self.render(&UnitBreakdown::new(seconds), localizer)
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Template::parse(s))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
