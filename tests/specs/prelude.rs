//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL: `interval("{Days}").at("012 22:06:17").is("12 days")`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use serial_test::serial;

/// Seconds for a `ddd hh:mm:ss` duration.
pub fn secs(time: &str) -> u64 {
    let (days, clock) = time
        .split_once(' ')
        .unwrap_or_else(|| panic!("expected 'ddd hh:mm:ss', got {time:?}"));
    let parts: Vec<u64> = clock.split(':').map(|p| p.parse().unwrap()).collect();
    assert_eq!(parts.len(), 3, "expected hh:mm:ss in {time:?}");
    days.parse::<u64>().unwrap() * 86_400 + parts[0] * 3_600 + parts[1] * 60 + parts[2]
}

/// Start rendering a template
pub fn interval(template: &str) -> IntervalBuilder {
    IntervalBuilder {
        template: template.to_string(),
        locale: None,
    }
}

/// Fluent builder for one render through the public API
pub struct IntervalBuilder {
    template: String,
    locale: Option<String>,
}

impl IntervalBuilder {
    /// Render with this locale active (restored to the baseline afterwards)
    pub fn locale(mut self, id: &str) -> Self {
        self.locale = Some(id.to_string());
        self
    }

    /// Render for a `ddd hh:mm:ss` duration
    pub fn at(self, time: &str) -> RenderOutput {
        self.seconds(secs(time))
    }

    /// Render for a raw second count
    pub fn seconds(self, seconds: u64) -> RenderOutput {
        let _reset = self.locale.as_deref().map(LocaleGuard::set);
        RenderOutput {
            template: self.template.clone(),
            text: intervals::format(seconds, &self.template),
        }
    }
}

/// Result of a render, with assertion helpers
pub struct RenderOutput {
    template: String,
    text: String,
}

impl RenderOutput {
    /// Assert the exact output
    pub fn is(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(
            self.text,
            expected,
            "template {:?} rendered unexpectedly",
            self.template
        );
        self
    }

    /// Assert the output contains a fragment
    pub fn has(self, fragment: &str) -> Self {
        assert!(
            self.text.contains(fragment),
            "output of {:?} should contain {fragment:?}: {:?}",
            self.template,
            self.text
        );
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Switches the global locale and restores the baseline on drop
pub struct LocaleGuard;

impl LocaleGuard {
    pub fn set(id: &str) -> Self {
        intervals::set_locale(id);
        LocaleGuard
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        intervals::set_locale(intervals::BASELINE_LOCALE);
    }
}
