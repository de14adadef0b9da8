// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale files (TOML, HCL, and JSON)

use crate::error::LocaleError;
use crate::plural::PluralRule;
use crate::table::{LocaleTable, UnitForms};
use iv_core::Unit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Locale file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

impl Format {
    /// Pick a format from a file extension (`.toml`, `.hcl`, `.json`).
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()? {
            "toml" => Some(Format::Toml),
            "hcl" => Some(Format::Hcl),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// A locale file: any number of locale definitions keyed by identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default, alias = "locale")]
    pub locales: HashMap<String, LocaleDef>,
}

/// One locale as written in a locale file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleDef {
    /// Plural rule name; guessed from the identifier when omitted
    #[serde(default)]
    pub plural: Option<PluralRule>,
    /// Text between number and unit word
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Unit forms keyed by unit name (`"minute"` or `"minutes"`, not both)
    #[serde(default, alias = "unit")]
    pub units: HashMap<String, UnitForms>,
}

fn default_separator() -> String {
    " ".into()
}

impl LocaleDef {
    /// Validate this definition into a table for locale `id`.
    pub fn into_table(self, id: &str) -> Result<LocaleTable, LocaleError> {
        let rule = self.plural.unwrap_or_else(|| PluralRule::for_locale(id));
        let mut units = HashMap::new();
        for (name, forms) in self.units {
            let unit: Unit = name.parse().map_err(|source| LocaleError::UnknownUnit {
                locale: id.to_string(),
                source,
            })?;
            if units.insert(unit, forms).is_some() {
                return Err(LocaleError::DuplicateUnit {
                    locale: id.to_string(),
                    unit,
                });
            }
        }
        LocaleTable::new(id, rule, self.separator, units)
    }
}

impl LocaleConfig {
    /// Validate every definition, returning tables sorted by identifier.
    pub fn into_tables(self) -> Result<Vec<LocaleTable>, LocaleError> {
        let mut defs: Vec<_> = self.locales.into_iter().collect();
        defs.sort_by(|a, b| a.0.cmp(&b.0));
        defs.into_iter()
            .map(|(id, def)| def.into_table(&id))
            .collect()
    }
}

/// Parse locale tables from TOML content (convenience wrapper)
pub fn parse_locales(content: &str) -> Result<Vec<LocaleTable>, LocaleError> {
    parse_locales_with_format(content, Format::Toml)
}

/// Parse locale tables from the given content in the specified format
pub fn parse_locales_with_format(
    content: &str,
    format: Format,
) -> Result<Vec<LocaleTable>, LocaleError> {
    let config: LocaleConfig = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    config.into_tables()
}

/// Read and parse a locale file, choosing the format from its extension.
pub(crate) fn read_locale_file(path: &Path) -> Result<Vec<LocaleTable>, LocaleError> {
    let format =
        Format::from_path(path).ok_or_else(|| LocaleError::UnknownFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_locales_with_format(&content, format)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
