// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default length of the rotate-in sweep (in milliseconds).
pub const DEFAULT_ROTATION_DURATION_MS: u64 = 1000;

/// Shortest sweep a config file may request (in milliseconds).
pub const MIN_ROTATION_DURATION_MS: u64 = 100;

/// Longest sweep a config file may request (in milliseconds).
pub const MAX_ROTATION_DURATION_MS: u64 = 10_000;

/// Interval between animation ticks while a sweep is running (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
