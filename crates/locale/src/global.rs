// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide locale selection.
//!
//! A thin wrapper over one shared [`LocaleContext`]. Code that wants to
//! avoid shared state can hold its own context and pass its localizer
//! explicitly instead.

use crate::context::LocaleContext;
use crate::error::LocaleError;
use crate::table::LocaleTable;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<RwLock<LocaleContext>> =
    LazyLock::new(|| RwLock::new(LocaleContext::new()));

/// Identifier of the active locale.
pub fn locale() -> String {
    GLOBAL.read().current().to_string()
}

/// Set the active locale and return the new identifier.
///
/// Identifiers are not checked here; an unregistered locale is reported
/// when something tries to render with it.
pub fn set_locale(id: impl Into<String>) -> String {
    let mut ctx = GLOBAL.write();
    let previous = ctx.current().to_string();
    let current = ctx.set_current(id).to_string();
    tracing::debug!(from = %previous, to = %current, "locale changed");
    current
}

/// Add or replace a locale table in the shared registry.
pub fn register_locale(table: LocaleTable) {
    GLOBAL.write().register(table);
}

/// Load a locale file into the shared registry.
pub fn load_locales(path: impl AsRef<Path>) -> Result<usize, LocaleError> {
    GLOBAL.write().load_file(path.as_ref())
}

/// Registered locale identifiers, sorted.
pub fn available_locales() -> Vec<String> {
    GLOBAL.read().available()
}

/// Table for the active locale, failing if it is not registered.
pub fn active_localizer() -> Result<Arc<LocaleTable>, LocaleError> {
    GLOBAL.read().localizer()
}

/// Table for the active locale, falling back to the baseline locale.
pub fn active_localizer_or_baseline() -> Arc<LocaleTable> {
    GLOBAL.read().localizer_or_baseline()
}

/// A copy of the shared context, detached from later changes.
pub fn snapshot() -> LocaleContext {
    GLOBAL.read().clone()
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod tests;
