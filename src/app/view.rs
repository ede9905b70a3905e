// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the mode tabs, the active mode's content, and the
//! always-visible safety panel into the single coaching screen.

use super::Message;
use crate::content::StepKind;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::session::{Mode, Session};
use crate::ui::{
    camera_panel, care_panel, mode_tabs, safety_panel, snapshot_panel, step_card, troubleshooting,
};
use iced::widget::{scrollable, text, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub camera: &'a camera_panel::State,
    pub snapshot: &'a snapshot_panel::State,
    pub troubleshooting: &'a troubleshooting::State,
}

/// Renders the coaching screen for the active mode.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(text(ctx.i18n.tr("app-tagline")).size(typography::BODY));

    let tabs = mode_tabs::view(mode_tabs::ViewContext {
        i18n: ctx.i18n,
        active: ctx.session.mode(),
    })
    .map(Message::ModeTabs);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header)
        .push(tabs);

    match ctx.session.mode() {
        Mode::Insertion | Mode::Removal => {
            column = push_procedure(column, &ctx);
        }
        Mode::Care => {
            column = column.push(care_panel::view(care_panel::ViewContext { i18n: ctx.i18n }));
        }
    }

    column = column.push(safety_panel::view(safety_panel::ViewContext {
        i18n: ctx.i18n,
    }));

    Container::new(scrollable(column))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn push_procedure<'a>(
    mut column: Column<'a, Message>,
    ctx: &ViewContext<'a>,
) -> Column<'a, Message> {
    if let Some(step) = ctx.session.current_step() {
        if step.kind == StepKind::CameraCapture {
            // The camera panel stands in for the step card here; only the
            // navigation row is kept so the user can keep moving.
            column = column.push(
                camera_panel::view(camera_panel::ViewContext {
                    i18n: ctx.i18n,
                    state: ctx.camera,
                })
                .map(Message::Camera),
            );

            if let Some(panel) = snapshot_panel::view(snapshot_panel::ViewContext {
                i18n: ctx.i18n,
                state: ctx.snapshot,
            }) {
                column = column.push(panel.map(Message::Snapshot));
            }

            column = column.push(
                step_card::navigation(
                    ctx.i18n,
                    ctx.session.step_index(),
                    ctx.session.steps().len(),
                )
                .map(Message::StepCard),
            );
        } else {
            column = column.push(
                step_card::view(step_card::ViewContext {
                    i18n: ctx.i18n,
                    step,
                    index: ctx.session.step_index(),
                    total: ctx.session.steps().len(),
                })
                .map(Message::StepCard),
            );
        }
    }

    column.push(
        troubleshooting::view(troubleshooting::ViewContext {
            i18n: ctx.i18n,
            state: ctx.troubleshooting,
        })
        .map(Message::Troubleshooting),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::ui::step_card::Message as StepMessage;

    fn render(app: &App) -> Element<'_, Message> {
        view(ViewContext {
            i18n: &app.i18n,
            session: &app.session,
            camera: &app.camera,
            snapshot: &app.snapshot,
            troubleshooting: &app.troubleshooting,
        })
    }

    #[test]
    fn every_mode_renders() {
        let mut app = App::default();
        let _insertion = render(&app);
        drop(_insertion);

        let _ = app.update(Message::ModeTabs(mode_tabs::Message::Select(Mode::Removal)));
        let _removal = render(&app);
        drop(_removal);

        let _ = app.update(Message::ModeTabs(mode_tabs::Message::Select(Mode::Care)));
        let _care = render(&app);
    }

    #[test]
    fn the_camera_step_renders_with_its_panel() {
        let mut app = App::default();
        // Walk forward until the camera-capture step is active.
        while app
            .session
            .current_step()
            .is_some_and(|step| step.kind != StepKind::CameraCapture)
        {
            let _ = app.update(Message::StepCard(StepMessage::Next));
        }
        assert!(app
            .session
            .current_step()
            .is_some_and(|step| step.kind == StepKind::CameraCapture));
        let _element = render(&app);
    }
}
