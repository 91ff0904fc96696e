// SPDX-License-Identifier: MPL-2.0
//! Click counter behind the "Add 1" / "Reset All" buttons.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickCounter(u32);

impl ClickCounter {
    #[must_use]
    pub fn count(self) -> u32 {
        self.0
    }

    /// Adds one click, pinning at `u32::MAX`.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
