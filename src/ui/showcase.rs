// SPDX-License-Identifier: MPL-2.0
//! The showcase screen: greeting, click counter, compose-email form and the
//! rotate-in logo.
//!
//! Each section can be switched off through [`FeaturesConfig`], which lets a
//! single screen stand in for the smaller variants of the demo.

use crate::config::FeaturesConfig;
use crate::i18n::fluent::I18n;
use crate::presentation::{ClickCounter, EmailDraft, RotationAnimator};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::RotatingLogo;
use iced::{
    widget::{button, container, scrollable, text, text_editor, text_input, Column},
    Alignment, Element, Length,
};
use std::fmt;
use std::time::Instant;

/// Screen state owned by the application root.
pub struct State {
    features: FeaturesConfig,
    platform_name: String,
    greeted: bool,
    counter: ClickCounter,
    rotation: RotationAnimator,
    draft: EmailDraft,
    body_editor: text_editor::Content,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("features", &self.features)
            .field("greeted", &self.greeted)
            .field("counter", &self.counter)
            .field("rotation", &self.rotation)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl State {
    pub fn new(features: FeaturesConfig, platform_name: String, rotation: RotationAnimator) -> Self {
        Self {
            features,
            platform_name,
            greeted: false,
            counter: ClickCounter::default(),
            rotation,
            draft: EmailDraft::default(),
            body_editor: text_editor::Content::new(),
        }
    }

    /// Advances the rotation animation.
    pub fn tick(&mut self, now: Instant) {
        self.rotation.tick(now);
    }

    /// True while the logo sweep needs frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.rotation.is_animating()
    }

    #[must_use]
    pub fn image_visible(&self) -> bool {
        self.rotation.is_visible()
    }

    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.counter.count()
    }

    #[must_use]
    pub fn draft(&self) -> &EmailDraft {
        &self.draft
    }

    #[must_use]
    pub fn rotation(&self) -> &RotationAnimator {
        &self.rotation
    }

    /// Shows a message under the compose form.
    pub fn set_email_error(&mut self, message: String) {
        self.draft.last_error = Some(message);
    }

    #[must_use]
    pub fn greeting(&self, i18n: &I18n) -> String {
        if self.greeted {
            i18n.tr_with_args("greeting-platform", &[("platform", &self.platform_name)])
        } else {
            i18n.tr("greeting-default")
        }
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the screen's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    GreetPressed,
    AddClick,
    ResetClicks,
    RecipientChanged(String),
    SubjectChanged(String),
    BodyEdited(text_editor::Action),
    SendPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A valid `mailto:` link is ready for the platform URI handler.
    OpenUri(String),
}

/// Process a screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message, i18n: &I18n) -> Event {
    update_at(state, message, i18n, Instant::now())
}

/// [`update`] with an explicit clock reading for the animation.
pub fn update_at(state: &mut State, message: Message, i18n: &I18n, now: Instant) -> Event {
    match message {
        Message::GreetPressed => {
            state.greeted = true;
            let visible = !state.rotation.is_visible();
            state.rotation.set_visible(visible, now);
            Event::None
        }
        Message::AddClick => {
            state.counter.increment();
            Event::None
        }
        Message::ResetClicks => {
            state.counter.reset();
            Event::None
        }
        Message::RecipientChanged(to) => {
            state.draft.set_recipient(to);
            Event::None
        }
        Message::SubjectChanged(subject) => {
            state.draft.subject = subject;
            Event::None
        }
        Message::BodyEdited(action) => {
            let is_edit = action.is_edit();
            state.body_editor.perform(action);
            if is_edit {
                state.draft.body = state.body_editor.text();
            }
            Event::None
        }
        Message::SendPressed => match state.draft.mailto() {
            Ok(uri) => {
                state.draft.last_error = None;
                Event::OpenUri(uri)
            }
            Err(err) => {
                tracing::debug!("rejected email draft: {err}");
                state.draft.last_error = Some(i18n.tr(err.i18n_key()));
                Event::None
            }
        },
    }
}

/// Render the screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext { i18n, state } = ctx;
    let features = state.features;

    let mut content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Alignment::Center);

    if features.greeting {
        content = content.push(button(text(state.greeting(i18n))).on_press(Message::GreetPressed));
    }

    if features.counter {
        let clicks = state.clicks().to_string();
        content = content
            .push(text(i18n.tr_with_args("counter-clicked", &[("count", &clicks)])))
            .push(button(text(i18n.tr("counter-add"))).on_press(Message::AddClick))
            .push(button(text(i18n.tr("counter-reset"))).on_press(Message::ResetClicks));
    }

    if features.email_compose {
        content = content.push(view_email_form(i18n, state));
    }

    if features.rotating_image && state.image_visible() {
        let radians = state.rotation.state().radians();
        content = content
            .push(RotatingLogo::new(radians).into_element())
            .push(text(i18n.tr("rotating-image-description")).size(typography::CAPTION));
    }

    scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_email_form<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let draft = &state.draft;

    let to_input = text_input(&i18n.tr("email-to-label"), &draft.to)
        .on_input(Message::RecipientChanged)
        .size(typography::BODY)
        .width(Length::Fill);

    let subject_input = text_input(&i18n.tr("email-subject-label"), &draft.subject)
        .on_input(Message::SubjectChanged)
        .size(typography::BODY)
        .width(Length::Fill);

    let body_editor = text_editor(&state.body_editor)
        .placeholder(i18n.tr("email-body-label"))
        .on_action(Message::BodyEdited)
        .size(typography::BODY)
        .height(Length::Fixed(sizing::MESSAGE_EDITOR_HEIGHT));

    let mut form = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .push(field(i18n.tr("email-to-label"), to_input))
        .push(field(i18n.tr("email-subject-label"), subject_input))
        .push(field(i18n.tr("email-body-label"), body_editor));

    if let Some(error) = &draft.last_error {
        form = form.push(
            text(error.as_str())
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    form.push(button(text(i18n.tr("email-send"))).on_press(Message::SendPressed))
        .into()
}

fn field<'a>(label: String, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS / 2.0)
        .width(Length::Fill)
        .push(text(label).size(typography::CAPTION))
        .push(input)
        .into()
}
