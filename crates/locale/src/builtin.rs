// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locales shipped with the library.

use crate::plural::PluralRule;
use crate::table::{LocaleTable, UnitForms};
use iv_core::Unit;

type UnitRow = (Unit, &'static str, &'static [&'static str]);

fn table(id: &str, rule: PluralRule, separator: &str, rows: [UnitRow; 5]) -> LocaleTable {
    let units = rows
        .into_iter()
        .map(|(unit, abbreviation, words)| (unit, UnitForms::new(abbreviation, words)))
        .collect();
    LocaleTable::from_parts(id.to_string(), rule, separator.to_string(), units)
}

pub(crate) fn en_us() -> LocaleTable {
    table(
        "en_US",
        PluralRule::English,
        " ",
        [
            (Unit::Week, "w", &["week", "weeks"]),
            (Unit::Day, "d", &["day", "days"]),
            (Unit::Hour, "h", &["hour", "hours"]),
            (Unit::Minute, "m", &["minute", "minutes"]),
            (Unit::Second, "s", &["second", "seconds"]),
        ],
    )
}

fn et_ee() -> LocaleTable {
    table(
        "et_EE",
        PluralRule::English,
        " ",
        [
            (Unit::Week, "n", &["nädal", "nädalat"]),
            (Unit::Day, "p", &["päev", "päeva"]),
            (Unit::Hour, "t", &["tund", "tundi"]),
            (Unit::Minute, "m", &["minut", "minutit"]),
            (Unit::Second, "s", &["sekund", "sekundit"]),
        ],
    )
}

fn fr_fr() -> LocaleTable {
    table(
        "fr_FR",
        PluralRule::French,
        " ",
        [
            (Unit::Week, "sem", &["semaine", "semaines"]),
            (Unit::Day, "j", &["jour", "jours"]),
            (Unit::Hour, "h", &["heure", "heures"]),
            (Unit::Minute, "min", &["minute", "minutes"]),
            (Unit::Second, "s", &["seconde", "secondes"]),
        ],
    )
}

fn ru_ru() -> LocaleTable {
    table(
        "ru_RU",
        PluralRule::Russian,
        " ",
        [
            (Unit::Week, "нед", &["неделя", "недели", "недель"]),
            (Unit::Day, "д", &["день", "дня", "дней"]),
            (Unit::Hour, "ч", &["час", "часа", "часов"]),
            (Unit::Minute, "мин", &["минута", "минуты", "минут"]),
            (Unit::Second, "с", &["секунда", "секунды", "секунд"]),
        ],
    )
}

fn pl_pl() -> LocaleTable {
    table(
        "pl_PL",
        PluralRule::Polish,
        " ",
        [
            (Unit::Week, "tydz", &["tydzień", "tygodnie", "tygodni"]),
            (Unit::Day, "d", &["dzień", "dni", "dni"]),
            (Unit::Hour, "godz", &["godzina", "godziny", "godzin"]),
            (Unit::Minute, "min", &["minuta", "minuty", "minut"]),
            (Unit::Second, "s", &["sekunda", "sekundy", "sekund"]),
        ],
    )
}

fn ja_jp() -> LocaleTable {
    table(
        "ja_JP",
        PluralRule::Cjk,
        "",
        [
            (Unit::Week, "週", &["週間"]),
            (Unit::Day, "日", &["日"]),
            (Unit::Hour, "時", &["時間"]),
            (Unit::Minute, "分", &["分"]),
            (Unit::Second, "秒", &["秒"]),
        ],
    )
}

/// All built-in locale tables, baseline (`en_US`) first.
pub fn builtin_tables() -> Vec<LocaleTable> {
    vec![en_us(), et_ee(), fr_fr(), ru_ru(), pl_pl(), ja_jp()]
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
