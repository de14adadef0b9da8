// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Locale tables for interval formatting.
//!
//! A locale supplies, for every [`Unit`](iv_core::Unit), an abbreviation and
//! a list of word forms, plus the [`PluralRule`] that picks a form for a
//! given number. Tables come from the built-in set or from locale files
//! (TOML, HCL or JSON) and live in a [`LocaleContext`]. One process-wide
//! context backs [`locale`] / [`set_locale`].

mod builtin;
mod config;
mod context;
mod error;
mod global;
mod plural;
mod table;

pub use builtin::builtin_tables;
pub use config::{parse_locales, parse_locales_with_format, Format, LocaleConfig, LocaleDef};
pub use context::{LocaleContext, BASELINE_LOCALE};
pub use error::LocaleError;
pub use global::{
    active_localizer, active_localizer_or_baseline, available_locales, load_locales, locale,
    register_locale, set_locale, snapshot,
};
pub use plural::PluralRule;
pub use table::{LocaleTable, UnitForms};
