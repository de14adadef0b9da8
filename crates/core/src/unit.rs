// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time units supported by interval templates.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed time unit, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

/// Error returned when a unit name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit '{0}'; valid units: week, day, hour, minute, second")]
pub struct UnitParseError(pub String);

impl Unit {
    /// All units, largest first.
    pub const ALL: [Unit; 5] = [
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Number of seconds in one of this unit.
    pub fn seconds(self) -> u64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 60,
            Unit::Hour => 60 * 60,
            Unit::Day => 60 * 60 * 24,
            Unit::Week => 60 * 60 * 24 * 7,
        }
    }

    /// Lower-case template letter for this unit.
    pub fn letter(self) -> char {
        match self {
            Unit::Second => 's',
            Unit::Minute => 'm',
            Unit::Hour => 'h',
            Unit::Day => 'd',
            Unit::Week => 'w',
        }
    }

    /// Singular English name, used for template suffix words and config keys.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
        }
    }

    /// Look up a unit by its template letter (either case).
    pub fn from_letter(c: char) -> Option<Unit> {
        Unit::ALL
            .into_iter()
            .find(|u| u.letter() == c.to_ascii_lowercase())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    /// Accepts singular or plural names in any case (`"Minutes"`, `"day"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Unit::ALL
            .into_iter()
            .find(|u| u.name() == singular)
            .ok_or_else(|| UnitParseError(s.to_string()))
    }
}

/// The unit a placeholder asks for: a fixed unit, or whichever unit is the
/// greatest non-zero one for the duration being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSelector {
    Fixed(Unit),
    Greatest,
}

impl UnitSelector {
    /// Lower-case template letter for this selector.
    pub fn letter(self) -> char {
        match self {
            UnitSelector::Fixed(unit) => unit.letter(),
            UnitSelector::Greatest => 'g',
        }
    }

    /// Singular word this selector is spelled with in templates.
    pub fn name(self) -> &'static str {
        match self {
            UnitSelector::Fixed(unit) => unit.name(),
            UnitSelector::Greatest => "greatest",
        }
    }

    /// Look up a selector by template letter (either case).
    pub fn from_letter(c: char) -> Option<UnitSelector> {
        if c.eq_ignore_ascii_case(&'g') {
            return Some(UnitSelector::Greatest);
        }
        Unit::from_letter(c).map(UnitSelector::Fixed)
    }
}

impl From<Unit> for UnitSelector {
    fn from(unit: Unit) -> Self {
        UnitSelector::Fixed(unit)
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
