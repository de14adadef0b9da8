// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale errors

use crate::plural::PluralRule;
use iv_core::{Unit, UnitParseError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when resolving or loading locales
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("locale '{locale}': {source}")]
    UnknownUnit {
        locale: String,
        #[source]
        source: UnitParseError,
    },

    #[error("locale '{locale}' defines unit '{unit}' more than once")]
    DuplicateUnit { locale: String, unit: Unit },

    #[error("locale '{locale}' has no forms for unit '{unit}'")]
    MissingUnit { locale: String, unit: Unit },

    #[error(
        "locale '{locale}', unit '{unit}': plural rule '{rule}' needs {expected} word form(s), found {found}"
    )]
    FormCount {
        locale: String,
        unit: Unit,
        rule: PluralRule,
        expected: usize,
        found: usize,
    },

    #[error("cannot determine locale file format for {}", .0.display())]
    UnknownFormat(PathBuf),

    #[error("failed to read locale file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
