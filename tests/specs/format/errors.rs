//! Malformed template specs
//!
//! A bad placeholder becomes `?` in place; the rest of the template still
//! renders.

use crate::prelude::*;

#[test]
#[serial]
fn malformed_placeholders_render_marker() {
    for template in ["{x}", "{Sokund}", "{S }", "{S..}", "{}", "{Hinutes}", "{Ddays}"] {
        interval(template).at("000 00:00:00").is("?");
    }
}

#[test]
#[serial]
fn unterminated_placeholder_swallows_rest() {
    interval("{M").at("000 00:00:00").is("?");
    interval("{hours} and {minutes")
        .at("000 05:12:00")
        .is("5 hours and ?");
}

#[test]
#[serial]
fn stray_closing_brace_is_text() {
    interval("M}").at("000 00:00:00").is("M}");
}

#[test]
#[serial]
fn errors_are_local() {
    interval("{x} {S} {y}").seconds(42).is("? 42 ?");
}

#[test]
#[serial]
fn escapes() {
    interval("\\{S}").seconds(42).is("{S}");
    interval("x\\\\y").seconds(0).is("x\\y");
    interval("\\{S\\}").seconds(0).is("{S}");
    interval("\\").seconds(0).is("");
    interval("\\{DDays} => {DDays}")
        .at("007 00:00:15")
        .is("{DDays} => 07 days");
}
