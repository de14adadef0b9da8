// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Localizer capability used when rendering unit suffixes.

use crate::unit::Unit;

/// Supplies the locale-specific text appended after a rendered number.
///
/// Implementations own the choice of plural form: `word` receives the value
/// being rendered and picks whichever of the locale's forms fits it.
pub trait Localizer {
    /// Short unit marker written directly after the number (`"5m"`).
    fn abbreviation(&self, unit: Unit) -> String;

    /// Full unit word for `value`, including any separator (`" minutes"`).
    fn word(&self, unit: Unit, value: u64) -> String;
}
