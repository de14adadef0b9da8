// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decomposition of a whole-second duration into time units.

use crate::unit::{Unit, UnitSelector};

/// A duration broken down into per-unit values.
///
/// Every unit can be read in two forms:
/// - *cumulative*: how many whole units fit into the duration (total hours)
/// - *remainder*: what is left after the next larger unit is taken out
///   (hours within the current day)
///
/// Days are the largest unit with a remainder form; weeks and days both
/// report their cumulative value, so `{d}` keeps counting past seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitBreakdown {
    total_seconds: u64,
}

impl UnitBreakdown {
    pub fn new(total_seconds: u64) -> Self {
        Self { total_seconds }
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// Total number of whole `unit`s in the duration.
    pub fn cumulative(&self, unit: Unit) -> u64 {
        self.total_seconds / unit.seconds()
    }

    /// Value of `unit` within its parent unit.
    ///
    /// Parents: second → minute (60), minute → hour (60), hour → day (24).
    /// Day and week have no parent here and return their cumulative value.
    pub fn remainder(&self, unit: Unit) -> u64 {
        match parent(unit) {
            Some(parent) => {
                let per_parent = parent.seconds() / unit.seconds();
                self.cumulative(unit) - self.cumulative(parent) * per_parent
            }
            None => self.cumulative(unit),
        }
    }

    /// Value of `unit` in cumulative or remainder form.
    pub fn value_of(&self, unit: Unit, cumulative: bool) -> u64 {
        if cumulative {
            self.cumulative(unit)
        } else {
            self.remainder(unit)
        }
    }

    /// The coarsest unit with a non-zero cumulative value, or seconds for
    /// an empty duration.
    pub fn greatest_unit(&self) -> Unit {
        Unit::ALL
            .into_iter()
            .find(|&unit| self.cumulative(unit) > 0)
            .unwrap_or(Unit::Second)
    }

    /// Resolve a selector against this duration.
    pub fn resolve(&self, selector: UnitSelector) -> Unit {
        match selector {
            UnitSelector::Fixed(unit) => unit,
            UnitSelector::Greatest => self.greatest_unit(),
        }
    }
}

impl From<u64> for UnitBreakdown {
    fn from(total_seconds: u64) -> Self {
        Self::new(total_seconds)
    }
}

fn parent(unit: Unit) -> Option<Unit> {
    match unit {
        Unit::Second => Some(Unit::Minute),
        Unit::Minute => Some(Unit::Hour),
        Unit::Hour => Some(Unit::Day),
        Unit::Day | Unit::Week => None,
    }
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod tests;
