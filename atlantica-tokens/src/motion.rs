// SPDX-License-Identifier: MIT OR Apache-2.0

//! Motion tokens: transition durations and easings.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionTokens {
    pub duration_fast: &'static str,
    pub duration_base: &'static str,
    pub duration_slow: &'static str,
    pub ease_out: &'static str,
    pub ease_in_out: &'static str,
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            duration_fast: "120ms",
            duration_base: "200ms",
            duration_slow: "400ms",
            ease_out: "cubic-bezier(0.16, 1, 0.3, 1)",
            ease_in_out: "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

impl MotionTokens {
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("duration-fast", self.duration_fast),
            ("duration-base", self.duration_base),
            ("duration-slow", self.duration_slow),
            ("ease-out", self.ease_out),
            ("ease-in-out", self.ease_in_out),
        ]
    }
}
