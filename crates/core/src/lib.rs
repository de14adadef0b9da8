// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! iv-core: time units, duration breakdown and the localizer capability

pub mod breakdown;
pub mod localizer;
pub mod unit;

pub use breakdown::UnitBreakdown;
pub use localizer::Localizer;
pub use unit::{Unit, UnitParseError, UnitSelector};
