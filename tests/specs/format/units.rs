//! Unit value specs
//!
//! Lower-case letters report the value within the parent unit, upper-case
//! letters the running total.

use crate::prelude::*;

#[test]
#[serial]
fn total_seconds() {
    interval("{S}").at("000 00:01:15").is("75");
    interval("{S}").seconds(0).is("0");
    interval("{S}").seconds(u64::MAX).is(&u64::MAX.to_string());
}

#[test]
#[serial]
fn remainder_values() {
    interval("{s}").at("000 00:01:15").is("15");
    interval("{m}").at("000 01:15:00").is("15");
    interval("{h}").at("001 15:00:00").is("15");
    interval("{d}").at("365 00:00:00").is("365");
}

#[test]
#[serial]
fn total_values() {
    interval("{M}").at("000 01:15:00").is("75");
    interval("{H}").at("001 12:00:00").is("36");
    interval("{D}").at("999 00:00:00").is("999");
    interval("{W}").at("021 00:00:00").is("3");
}

#[test]
#[serial]
fn case_selects_total_or_remainder() {
    interval("{Minutes} {seconds}")
        .seconds(90 * 60 + 15)
        .is("90 minutes 15 seconds");
    interval("{minutes} {Seconds}")
        .seconds(5415)
        .is("30 minutes 5415 seconds");
}

#[test]
#[serial]
fn zero_padding() {
    interval("{dd}").at("001 00:00:00").is("01");
    interval("{dd}").at("111 00:00:00").is("111");
    interval("{dddddd}").at("111 00:00:00").is("000111");
    interval("{hh}:{mm}:{ss}").at("000 01:02:03").is("01:02:03");
}

#[test]
#[serial]
fn optional_placeholders() {
    interval("{h?}").at("000 00:00:00").is("");
    interval("{h?}").at("000 05:00:00").is("5");
    interval("{h?}").at("001 00:00:00").is("0");
    interval("{h? ...}").at("000 01:00:00").is("1 ...");
    interval("{h? ...}").at("000 00:12:00").is("");
}

#[test]
#[serial]
fn greatest_unit_follows_duration() {
    interval("{Greatests}").at("000 00:00:00").is("0 seconds");
    interval("{Greatests}").at("000 00:00:01").is("1 second");
    interval("{Greatests}").at("000 00:42:10").is("42 minutes");
    interval("{Greatests}").at("000 03:00:00").is("3 hours");
    interval("{Greatests}").at("001 00:00:00").is("1 day");
    interval("{Greatests}").at("014 00:00:00").is("2 weeks");
    interval("{G.}").at("000 03:00:00").is("3h");
}

#[test]
#[serial]
fn greatest_matches_explicit_unit() {
    for time in ["000 00:01:00", "000 00:02:30", "000 00:59:59"] {
        let greatest = interval("{Greatests}").at(time);
        interval("{Minutes}").at(time).is(greatest.text());
    }
}
