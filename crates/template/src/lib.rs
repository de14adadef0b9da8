// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Interval template parsing and rendering.
//!
//! A template is plain text with `{...}` placeholders, each naming one
//! time unit:
//!
//! ```text
//! {S}        total seconds            {s}      seconds within the minute
//! {M} {H}    total minutes / hours    {m} {h}  within the hour / day
//! {D} {W}    total days / weeks       {G}      greatest non-zero unit
//! {hh}       zero-padded to 2 digits  {h.}     abbreviated: "3h"
//! {Hours}    with unit word: "3 hours"
//! {h?}       omitted when the total is zero
//! {HH?:}     text after `?` is written only when the placeholder is
//! \{         escaped brace (any `\X` writes X)
//! ```
//!
//! An upper-case unit letter reports the running total, a lower-case one
//! the value within the parent unit:
//!
//! ```ignore
//! use iv_template::Template;
//! use iv_locale::LocaleContext;
//!
//! let en = LocaleContext::new().localizer()?;
//! let t = Template::parse("{Minutes} {seconds}");
//! assert_eq!(t.render_seconds(5415, &*en), "90 minutes 15 seconds");
//! # Ok::<(), iv_locale::LocaleError>(())
//! ```
//!
//! Malformed placeholders render as `?` without affecting the rest of the
//! output.

mod node;
mod parser;
mod render;
mod template;

pub use node::{FormatNode, PlaceholderSpec, SuffixKind};
pub use parser::{parse_placeholder, Parser};
pub use render::{render, zero_pad, INVALID_MARKER};
pub use template::Template;
