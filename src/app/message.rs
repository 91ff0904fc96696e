// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::DispatchError;
use crate::ui::showcase;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(showcase::Message),
    /// Animation frame while the logo sweep is running.
    Tick(Instant),
    /// Result of handing a `mailto:` link to the platform.
    EmailDispatched(Result<(), DispatchError>),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
