// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::error::DispatchError;
use crate::i18n::fluent::I18n;
use crate::platform::{self, UriOpener};
use crate::ui::showcase::{self, Event as ShowcaseEvent};
use iced::Task;
use std::sync::Arc;

/// Borrowed application state for a single update.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a mut showcase::State,
    pub uri_opener: &'a Arc<dyn UriOpener>,
}

/// Handles showcase screen messages.
pub fn handle_showcase_message(
    ctx: &mut UpdateContext<'_>,
    message: showcase::Message,
) -> Task<Message> {
    match showcase::update(ctx.showcase, message, ctx.i18n) {
        ShowcaseEvent::None => Task::none(),
        ShowcaseEvent::OpenUri(uri) => {
            tracing::info!("handing mailto link to the platform");
            Task::perform(
                platform::dispatch(Arc::clone(ctx.uri_opener), uri),
                Message::EmailDispatched,
            )
        }
    }
}

/// Surfaces a failed mail-client launch under the compose form.
pub fn handle_email_dispatched(ctx: &mut UpdateContext<'_>, result: Result<(), DispatchError>) {
    match result {
        Ok(()) => tracing::debug!("mail client opened"),
        Err(err) => {
            tracing::warn!("could not open mail client: {err}");
            ctx.showcase.set_email_error(ctx.i18n.tr(err.i18n_key()));
        }
    }
}
