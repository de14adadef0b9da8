// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale registry with a current selection.

use crate::builtin::{builtin_tables, en_us};
use crate::config::read_locale_file;
use crate::error::LocaleError;
use crate::table::LocaleTable;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Identifier of the locale every context starts with.
pub const BASELINE_LOCALE: &str = "en_US";

/// Registered locale tables plus the identifier of the active one.
///
/// The current identifier is an opaque key: it may name a locale that is
/// not (yet) registered. [`LocaleContext::localizer`] reports that case as
/// [`LocaleError::UnknownLocale`].
///
/// The baseline table is held apart from the other tables so a fallback
/// always exists; registering a table under [`BASELINE_LOCALE`] replaces it.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    tables: HashMap<String, Arc<LocaleTable>>,
    current: String,
    baseline: Arc<LocaleTable>,
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleContext {
    /// A context holding the built-in locales, with the baseline selected.
    pub fn new() -> Self {
        let tables = builtin_tables()
            .into_iter()
            .filter(|table| table.id() != BASELINE_LOCALE)
            .map(|table| (table.id().to_string(), Arc::new(table)))
            .collect();
        Self {
            tables,
            current: BASELINE_LOCALE.to_string(),
            baseline: Arc::new(en_us()),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Select a locale and return the new current identifier.
    pub fn set_current(&mut self, id: impl Into<String>) -> &str {
        self.current = id.into();
        &self.current
    }

    /// Add or replace a locale table, returning the one it replaced.
    pub fn register(&mut self, table: LocaleTable) -> Option<Arc<LocaleTable>> {
        if table.id() == BASELINE_LOCALE {
            return Some(std::mem::replace(&mut self.baseline, Arc::new(table)));
        }
        self.tables.insert(table.id().to_string(), Arc::new(table))
    }

    pub fn get(&self, id: &str) -> Option<Arc<LocaleTable>> {
        if id == BASELINE_LOCALE {
            return Some(Arc::clone(&self.baseline));
        }
        self.tables.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        id == BASELINE_LOCALE || self.tables.contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.tables.keys().cloned().collect();
        ids.push(BASELINE_LOCALE.to_string());
        ids.sort();
        ids
    }

    /// Table for the current locale.
    pub fn localizer(&self) -> Result<Arc<LocaleTable>, LocaleError> {
        self.get(&self.current)
            .ok_or_else(|| LocaleError::UnknownLocale(self.current.clone()))
    }

    /// Table for the current locale, or the baseline table when the
    /// current identifier is not registered.
    pub fn localizer_or_baseline(&self) -> Arc<LocaleTable> {
        match self.localizer() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, fallback = BASELINE_LOCALE, "using baseline locale");
                Arc::clone(&self.baseline)
            }
        }
    }

    /// Register every locale defined in `content`. Returns how many were added.
    pub fn load_str(
        &mut self,
        content: &str,
        format: crate::config::Format,
    ) -> Result<usize, LocaleError> {
        let tables = crate::config::parse_locales_with_format(content, format)?;
        Ok(self.register_all(tables))
    }

    /// Register every locale defined in a locale file.
    ///
    /// The whole file is validated before anything is registered.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, LocaleError> {
        let tables = read_locale_file(path)?;
        let count = self.register_all(tables);
        tracing::info!(path = %path.display(), count, "loaded locale file");
        Ok(count)
    }

    fn register_all(&mut self, tables: Vec<LocaleTable>) -> usize {
        let count = tables.len();
        for table in tables {
            let id = table.id().to_string();
            if self.register(table).is_some() {
                tracing::warn!(locale = %id, "locale file overrides registered locale");
            }
        }
        count
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
