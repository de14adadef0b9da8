//! Realistic template specs

use crate::prelude::*;

#[test]
#[serial]
fn plain_text_passes_through() {
    interval("hello").at("000 00:00:00").is("hello");
    interval("").at("000 00:00:00").is("");
}

#[test]
#[serial]
fn sentences() {
    interval("{S} seconds").at("000 00:00:15").is("15 seconds");
    interval("{M} minutes and {s} seconds")
        .at("000 00:05:15")
        .is("5 minutes and 15 seconds");
    interval("{S} seconds, I repeat: {S}")
        .at("000 00:00:15")
        .is("15 seconds, I repeat: 15");
}

#[test]
#[serial]
fn optional_lead_in() {
    interval("{Minutes?} and {seconds}")
        .at("000 00:01:15")
        .is("1 minute and 15 seconds");
    interval("{Minutes?} and {seconds}")
        .at("000 00:00:15")
        .is(" and 15 seconds");
    interval("{Hours? and }{minutes}")
        .at("000 05:12:00")
        .is("5 hours and 12 minutes");
    interval("{Hours? and }{minutes}")
        .at("000 00:12:00")
        .is("12 minutes");
}

#[test]
#[serial]
fn clock_layouts() {
    interval("{H.}, {m.}").at("000 10:04:00").is("10h, 4m");
    interval("{Days} {hh}:{mm}:{ss}")
        .at("012 22:06:17")
        .is("12 days 22:06:17");
    interval("{HH?:}{mm}").at("000 05:12:00").is("05:12");
    interval("{HH?:}{mm}").at("000 00:12:00").is("12");
}

#[test]
#[serial]
fn elapsed_summary() {
    let template = "{Weeks? }{d? days }{hh}:{mm}";
    interval(template).at("000 03:04:00").is("03:04");
    interval(template).at("003 03:04:00").has("3 days").is("3 days 03:04");
}
