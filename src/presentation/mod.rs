// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent presentation logic.
//!
//! Nothing here depends on `iced`: the screen in `ui::showcase` owns these
//! types and forwards user input and clock ticks to them.

pub mod counter;
pub mod easing;
pub mod mailto;
pub mod rotation;

pub use counter::ClickCounter;
pub use easing::Easing;
pub use mailto::{EmailDraft, MailtoResult};
pub use rotation::{AnimationState, ObserverId, RotationAnimator};
