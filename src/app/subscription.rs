// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the frame tick subscription driving the logo sweep.
///
/// Idle screens get no ticks so the event loop can sleep.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Forwards window close requests so the app can log and shut down itself.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}
