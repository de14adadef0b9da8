// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! intervals: human-readable, localized durations from second counts.
//!
//! ```ignore
//! assert_eq!(intervals::format(90 * 60 + 15, "{Minutes} {seconds}"), "90 minutes 15 seconds");
//! assert_eq!(intervals::format(5415, "{minutes} {Seconds}"), "30 minutes 5415 seconds");
//!
//! intervals::set_locale("et_EE");
//! assert_eq!(intervals::format(5, "{seconds}"), "5 sekundit");
//! ```
//!
//! See [`iv_template`] for the template syntax.

pub use iv_core::{Localizer, Unit, UnitBreakdown, UnitSelector};
pub use iv_locale::{
    available_locales, load_locales, locale, register_locale, set_locale, Format, LocaleContext,
    LocaleError, LocaleTable, PluralRule, UnitForms, BASELINE_LOCALE,
};
pub use iv_template::{FormatNode, PlaceholderSpec, SuffixKind, Template};

/// Render `template` for a duration of `seconds` in the active locale.
///
/// Never fails: malformed placeholders render as `?`, and an unregistered
/// active locale falls back to the baseline locale with a warning.
pub fn format(seconds: u64, template: &str) -> String {
    let localizer = iv_locale::active_localizer_or_baseline();
    format_with(seconds, template, &*localizer)
}

/// Like [`format`], but fails if the active locale is not registered.
pub fn try_format(seconds: u64, template: &str) -> Result<String, LocaleError> {
    let localizer = iv_locale::active_localizer()?;
    Ok(format_with(seconds, template, &*localizer))
}

/// Render `template` with an explicit localizer, ignoring the active locale.
pub fn format_with(seconds: u64, template: &str, localizer: &dyn Localizer) -> String {
    Template::parse(template).render(&UnitBreakdown::new(seconds), localizer)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
