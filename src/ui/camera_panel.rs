// SPDX-License-Identifier: MPL-2.0
//! The camera panel shown on the camera-capture step.
//!
//! Owns the preview state machine: powered off, or powered on under a
//! session id that keys the preview subscription. Restarting (including a
//! facing switch) always allocates a fresh session id so the old
//! subscription is dropped and its device released before the new one opens.
//!
//! Frames are stored unmirrored; mirroring is applied when building the
//! display handle and baked into captures so the snapshot matches what the
//! user saw.

use crate::camera::{self, Facing, PreviewEvent};
use crate::error::CameraError;
use crate::i18n::fluent::I18n;
use crate::media::{flip_rgba_horizontal, Snapshot};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Row, Space, Stack};
use iced::{Element, Length, Subscription};

/// Whether the preview is running, and under which session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    Off,
    On { session: u64 },
}

/// The most recent preview frame, kept unmirrored alongside its display
/// handle so the mirror can be re-applied without a new capture.
struct LiveFrame {
    raw: std::sync::Arc<Vec<u8>>,
    width: u32,
    height: u32,
    display: Handle,
}

/// State for the camera panel.
pub struct State {
    facing: Facing,
    mirrored: bool,
    power: Power,
    next_session: u64,
    frame: Option<LiveFrame>,
    last_error: Option<CameraError>,
}

impl State {
    /// Creates a panel in the powered-off state with the given preferences.
    pub fn new(facing: Facing, mirrored: bool) -> Self {
        Self {
            facing,
            mirrored,
            power: Power::Off,
            next_session: 0,
            frame: None,
            last_error: None,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn power(&self) -> Power {
        self.power
    }

    /// Powers off and drops the live frame. Called on Stop and whenever the
    /// user navigates away from the camera step.
    pub fn force_stop(&mut self) {
        self.power = Power::Off;
        self.frame = None;
    }

    /// The preview subscription for the current power state.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.power {
            Power::On { session } => {
                camera::preview(session, self.facing).map(Message::Preview)
            }
            Power::Off => Subscription::none(),
        }
    }

    fn start_session(&mut self) {
        self.power = Power::On {
            session: self.next_session,
        };
        self.next_session += 1;
    }

    fn display_handle(&self, raw: &[u8], width: u32, height: u32) -> Handle {
        let pixels = if self.mirrored {
            flip_rgba_horizontal(raw, width, height)
        } else {
            raw.to_vec()
        };
        Handle::from_rgba(width, height, pixels)
    }
}

/// Messages consumed by the camera panel.
#[derive(Debug, Clone)]
pub enum Message {
    Start,
    Stop,
    ToggleFacing,
    ToggleMirror,
    Capture,
    Preview(PreviewEvent),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A snapshot was taken; the parent decides where it is held.
    Captured(Snapshot),
    /// The facing preference changed and should be persisted.
    FacingChanged(Facing),
    /// The mirror preference changed and should be persisted.
    MirrorChanged(bool),
}

/// Process a camera panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Start => {
            // When already running this is a restart: the session id change
            // drops the old subscription and its device first.
            state.last_error = None;
            state.frame = None;
            state.start_session();
            Event::None
        }
        Message::Stop => {
            state.force_stop();
            Event::None
        }
        Message::ToggleFacing => {
            state.facing = state.facing.toggled();
            if matches!(state.power, Power::On { .. }) {
                // Restart under a new session so the old device is released
                // before the new one is acquired.
                state.frame = None;
                state.start_session();
            }
            Event::FacingChanged(state.facing)
        }
        Message::ToggleMirror => {
            state.mirrored = !state.mirrored;
            if let Some(mut frame) = state.frame.take() {
                frame.display = state.display_handle(&frame.raw, frame.width, frame.height);
                state.frame = Some(frame);
            }
            Event::MirrorChanged(state.mirrored)
        }
        Message::Capture => match &state.frame {
            Some(frame) => {
                let rgba = if state.mirrored {
                    std::sync::Arc::new(flip_rgba_horizontal(
                        &frame.raw,
                        frame.width,
                        frame.height,
                    ))
                } else {
                    frame.raw.clone()
                };
                Event::Captured(Snapshot {
                    rgba,
                    width: frame.width,
                    height: frame.height,
                })
            }
            None => Event::None,
        },
        Message::Preview(event) => {
            // A torn-down session's events can still be queued; once powered
            // off they no longer belong to anything the user sees.
            if state.power == Power::Off {
                return Event::None;
            }
            match event {
                PreviewEvent::FrameReady {
                    rgba,
                    width,
                    height,
                } => {
                    let display = state.display_handle(&rgba, width, height);
                    state.frame = Some(LiveFrame {
                        raw: rgba,
                        width,
                        height,
                        display,
                    });
                }
                PreviewEvent::Failed(err) => {
                    state.last_error = Some(err);
                    state.force_stop();
                }
            }
            Event::None
        }
    }
}

/// Contextual data needed to render the camera panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the camera panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("camera-title")).size(typography::TITLE_SM);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(preview_area(&ctx));

    if let Some(err) = &ctx.state.last_error {
        column = column.push(
            text(ctx.i18n.tr(err.i18n_key()))
                .size(typography::BODY)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(palette::DANGER_500),
                }),
        );
    }

    column = column
        .push(controls_row(&ctx))
        .push(text(ctx.i18n.tr("camera-lighting-tip")).size(typography::CAPTION));

    container(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn preview_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &ctx.state.frame {
        Some(frame) => {
            let image = iced::widget::image(frame.display.clone())
                .width(Length::Fill)
                .height(Length::Fill);

            let ring = container(
                Space::new()
                    .width(Length::Fixed(sizing::GUIDE_RING))
                    .height(Length::Fixed(sizing::GUIDE_RING)),
            )
            .style(styles::container::guide_ring);

            let overlay = container(ring)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center);

            Stack::new().push(image).push(overlay).into()
        }
        None => {
            let key = match ctx.state.power {
                Power::On { .. } => "camera-waiting",
                Power::Off => "camera-align-hint",
            };
            container(
                text(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .style(|_theme| iced::widget::text::Style {
                        color: Some(palette::GRAY_200),
                    }),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
        }
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
        .style(styles::container::preview_surface)
        .into()
}

fn controls_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let power_label = match ctx.state.power {
        Power::Off => ctx.i18n.tr("camera-start"),
        Power::On { .. } => ctx.i18n.tr("camera-stop"),
    };
    let power_message = match ctx.state.power {
        Power::Off => Message::Start,
        Power::On { .. } => Message::Stop,
    };
    let power = button(text(power_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(power_message);

    let facing = button(text(ctx.i18n.tr("camera-switch-facing")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press(Message::ToggleFacing);

    let mirror_key = if ctx.state.mirrored {
        "camera-mirror-on"
    } else {
        "camera-mirror-off"
    };
    let mirror = button(text(ctx.i18n.tr(mirror_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(if ctx.state.mirrored {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .on_press(Message::ToggleMirror);

    let mut capture = button(text(ctx.i18n.tr("camera-capture")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if ctx.state.frame.is_some() {
        capture = capture.on_press(Message::Capture);
    }

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(power)
        .push(facing)
        .push(mirror)
        .push(capture)
        .into()
}
