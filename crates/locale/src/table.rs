// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-locale unit text.

use crate::error::LocaleError;
use crate::plural::PluralRule;
use iv_core::{Localizer, Unit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Abbreviation and word forms for one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitForms {
    pub abbreviation: String,
    /// Word forms in the order the locale's plural rule indexes them
    pub words: Vec<String>,
}

impl UnitForms {
    pub fn new(abbreviation: impl Into<String>, words: &[&str]) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// A validated locale: text for every unit plus its plural rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    id: String,
    rule: PluralRule,
    separator: String,
    units: HashMap<Unit, UnitForms>,
}

impl LocaleTable {
    /// Build a table, checking that every unit is present with exactly as
    /// many word forms as `rule` selects between.
    pub fn new(
        id: impl Into<String>,
        rule: PluralRule,
        separator: impl Into<String>,
        units: HashMap<Unit, UnitForms>,
    ) -> Result<Self, LocaleError> {
        let table = Self::from_parts(id.into(), rule, separator.into(), units);
        table.validate()?;
        Ok(table)
    }

    pub(crate) fn from_parts(
        id: String,
        rule: PluralRule,
        separator: String,
        units: HashMap<Unit, UnitForms>,
    ) -> Self {
        Self {
            id,
            rule,
            separator,
            units,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), LocaleError> {
        for unit in Unit::ALL {
            let forms = self.units.get(&unit).ok_or_else(|| LocaleError::MissingUnit {
                locale: self.id.clone(),
                unit,
            })?;
            if forms.words.len() != self.rule.form_count() {
                return Err(LocaleError::FormCount {
                    locale: self.id.clone(),
                    unit,
                    rule: self.rule,
                    expected: self.rule.form_count(),
                    found: forms.words.len(),
                });
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rule(&self) -> PluralRule {
        self.rule
    }

    /// Text placed between the number and a unit word (`" "` for most locales).
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn forms(&self, unit: Unit) -> Option<&UnitForms> {
        self.units.get(&unit)
    }

    /// The bare word form for `value`, without the separator.
    pub fn word_form(&self, unit: Unit, value: u64) -> &str {
        let Some(forms) = self.units.get(&unit) else {
            return "";
        };
        let index = self.rule.form_index(value);
        forms
            .words
            .get(index)
            .or_else(|| forms.words.last())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl Localizer for LocaleTable {
    fn abbreviation(&self, unit: Unit) -> String {
        self.units
            .get(&unit)
            .map(|forms| forms.abbreviation.clone())
            .unwrap_or_default()
    }

    fn word(&self, unit: Unit, value: u64) -> String {
        format!("{}{}", self.separator, self.word_form(unit, value))
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
