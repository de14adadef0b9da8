//! Locale file specs
//!
//! Extra locales can be loaded from TOML, HCL, or JSON files.

use crate::prelude::*;
use std::io::Write;

const SWEDISH_TOML: &str = r#"
[locale.sv_SE]
plural = "english"

[locale.sv_SE.unit.week]
abbreviation = "v"
words = ["vecka", "veckor"]

[locale.sv_SE.unit.day]
abbreviation = "d"
words = ["dag", "dagar"]

[locale.sv_SE.unit.hour]
abbreviation = "h"
words = ["timme", "timmar"]

[locale.sv_SE.unit.minute]
abbreviation = "min"
words = ["minut", "minuter"]

[locale.sv_SE.unit.second]
abbreviation = "s"
words = ["sekund", "sekunder"]
"#;

fn locale_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn load_toml_locale() {
    let file = locale_file(".toml", SWEDISH_TOML);
    assert_eq!(intervals::load_locales(file.path()).unwrap(), 1);
    assert!(intervals::available_locales().contains(&"sv_SE".to_string()));

    interval("{Hours} {minutes}")
        .locale("sv_SE")
        .at("000 01:02:00")
        .is("1 timme 2 minuter");
    interval("{m.}").locale("sv_SE").at("000 00:07:00").is("7min");
}

#[test]
#[serial]
fn invalid_locale_file_is_rejected_whole() {
    let broken = SWEDISH_TOML
        .replace("sv_SE", "sv_FI")
        .replace("words = [\"dag\", \"dagar\"]", "words = [\"dag\"]");
    let file = locale_file(".toml", &broken);
    let err = intervals::load_locales(file.path()).unwrap_err();
    assert!(err.to_string().contains("needs 2"), "{err}");
    assert!(!intervals::available_locales().contains(&"sv_FI".to_string()));
}

#[test]
#[serial]
fn unsupported_extension() {
    let file = locale_file(".yaml", "locale: {}");
    let err = intervals::load_locales(file.path()).unwrap_err();
    assert!(
        matches!(err, intervals::LocaleError::UnknownFormat(_)),
        "{err}"
    );
}
