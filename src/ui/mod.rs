// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`showcase`] - The single demo screen
//! - [`widgets`] - Custom Iced widgets (rotating logo)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod showcase;
pub mod theming;
pub mod widgets;
