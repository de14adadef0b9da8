// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering parsed nodes against a duration.

use crate::node::{FormatNode, PlaceholderSpec, SuffixKind};
use iv_core::{Localizer, UnitBreakdown};

/// Written in place of a malformed placeholder
pub const INVALID_MARKER: char = '?';

/// Render `nodes` in order for the given duration.
pub fn render(nodes: &[FormatNode], breakdown: &UnitBreakdown, localizer: &dyn Localizer) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            FormatNode::Literal(text) => out.push_str(text),
            FormatNode::Invalid => out.push(INVALID_MARKER),
            FormatNode::Placeholder(spec) => {
                render_placeholder(&mut out, spec, breakdown, localizer)
            }
        }
    }
    out
}

fn render_placeholder(
    out: &mut String,
    spec: &PlaceholderSpec,
    breakdown: &UnitBreakdown,
    localizer: &dyn Localizer,
) {
    let unit = breakdown.resolve(spec.unit);
    // Optional placeholders hide on the total, so {h?} still shows "0" at 24h
    if spec.optional && breakdown.cumulative(unit) == 0 {
        return;
    }

    let value = breakdown.value_of(unit, spec.cumulative);
    out.push_str(&zero_pad(value, spec.min_digits));
    match spec.suffix {
        SuffixKind::None => {}
        SuffixKind::Abbreviation => out.push_str(&localizer.abbreviation(unit)),
        SuffixKind::Word => out.push_str(&localizer.word(unit, value)),
    }
    out.push_str(&spec.optional_suffix);
}

/// Left-pad `value` with zeros to `width` digits. Longer numbers are kept whole.
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
