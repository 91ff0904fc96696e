// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::showcase::{self, ViewContext as ShowcaseViewContext};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a showcase::State,
}

/// Renders the showcase screen filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = showcase::view(ShowcaseViewContext {
        i18n: ctx.i18n,
        state: ctx.showcase,
    })
    .map(Message::Showcase);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
