// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plural form selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule mapping a number to the index of the word form a locale uses for it.
///
/// Each rule declares how many forms it expects; locale tables list their
/// word forms in the order the rule indexes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRule {
    /// `[one, other]`: 1 is singular, everything else plural.
    #[default]
    English,
    /// `[one, other]`: 0 and 1 are singular.
    French,
    /// `[one, few, many]`: East Slavic rules (1, 21, 31 / 2-4, 22-24 / rest).
    Russian,
    /// `[one, few, many]`: 1 alone is singular, 2-4 endings are few.
    Polish,
    /// `[other]`: a single invariant form.
    Cjk,
}

impl PluralRule {
    pub const ALL: [PluralRule; 5] = [
        PluralRule::English,
        PluralRule::French,
        PluralRule::Russian,
        PluralRule::Polish,
        PluralRule::Cjk,
    ];

    /// Number of word forms a table using this rule must provide.
    pub fn form_count(self) -> usize {
        match self {
            PluralRule::English | PluralRule::French => 2,
            PluralRule::Russian | PluralRule::Polish => 3,
            PluralRule::Cjk => 1,
        }
    }

    /// Index into the form list for `value`. Always `< form_count()`.
    pub fn form_index(self, value: u64) -> usize {
        match self {
            PluralRule::English => usize::from(value != 1),
            PluralRule::French => usize::from(value > 1),
            PluralRule::Russian => {
                let (rem10, rem100) = (value % 10, value % 100);
                if rem10 == 1 && rem100 != 11 {
                    0
                } else if (2..=4).contains(&rem10) && !(12..=14).contains(&rem100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                let (rem10, rem100) = (value % 10, value % 100);
                if value == 1 {
                    0
                } else if (2..=4).contains(&rem10) && !(12..=14).contains(&rem100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Cjk => 0,
        }
    }

    /// Best-guess rule for a locale identifier such as `"ru_RU"` or `"fr"`.
    ///
    /// Unknown languages get [`PluralRule::English`].
    pub fn for_locale(locale: &str) -> PluralRule {
        let lang = locale
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" | "pt" => PluralRule::French,
            "ru" | "uk" | "be" => PluralRule::Russian,
            "pl" => PluralRule::Polish,
            "ja" | "zh" | "ko" | "th" | "vi" => PluralRule::Cjk,
            _ => PluralRule::English,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PluralRule::English => "english",
            PluralRule::French => "french",
            PluralRule::Russian => "russian",
            PluralRule::Polish => "polish",
            PluralRule::Cjk => "cjk",
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "plural_tests.rs"]
mod tests;
