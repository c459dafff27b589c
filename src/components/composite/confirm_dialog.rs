//! Confirm Dialog Component
//!
//! A modal yes/no dialog rendered over a dimmed backdrop.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, Size, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::assets::SidebarIcon;
use crate::components::primitives::button::Button;
use crate::constants::DIALOG_WIDTH;
use crate::theme::colors::SpotColors;
use crate::theme::typography::Typography;

type DialogHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Confirmation dialog with a cancel and a confirm button
#[derive(IntoElement)]
pub struct ConfirmDialog {
    title: SharedString,
    description: SharedString,
    cancel_label: SharedString,
    confirm_label: SharedString,
    pending_label: SharedString,
    pending: bool,
    viewport: Option<Size<Pixels>>,
    on_cancel: Option<DialogHandler>,
    on_confirm: Option<DialogHandler>,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<SharedString>, description: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cancel_label: "No".into(),
            confirm_label: "Yes".into(),
            pending_label: "Working...".into(),
            pending: false,
            viewport: None,
            on_cancel: None,
            on_confirm: None,
        }
    }

    /// Size the backdrop explicitly instead of filling the parent; used when
    /// the dialog is anchored outside the normal layout.
    pub fn viewport(mut self, size: Size<Pixels>) -> Self {
        self.viewport = Some(size);
        self
    }

    pub fn cancel_label(mut self, label: impl Into<SharedString>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<SharedString>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// While pending, both buttons are disabled and the confirm button shows
    /// `label`. The backdrop and close button stop dismissing the dialog too.
    pub fn pending(mut self, pending: bool, label: impl Into<SharedString>) -> Self {
        self.pending = pending;
        self.pending_label = label.into();
        self
    }

    /// Called for the cancel button, the close button and backdrop clicks
    pub fn on_cancel(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    pub fn on_confirm(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_confirm = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ConfirmDialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let pending = self.pending;
        let on_cancel = self.on_cancel.map(std::rc::Rc::new);
        let on_confirm = self.on_confirm;

        let cancel_button = Button::outline("dialog-cancel", self.cancel_label)
            .disabled(pending)
            .when_some(on_cancel.clone(), |button, handler| {
                button.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            });

        let confirm_button = Button::destructive("dialog-confirm", self.confirm_label)
            .loading(pending, self.pending_label)
            .when_some(on_confirm, |button, handler| {
                button.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            });

        // Backdrop
        div()
            .id("dialog-backdrop")
            .map(|el| match self.viewport {
                Some(size) => el.w(size.width).h(size.height),
                None => el.absolute().inset_0(),
            })
            .bg(SpotColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .when(!pending, |el| {
                el.when_some(on_cancel.clone(), |el, handler| {
                    el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
                })
            })
            .child(
                // Dialog container
                div()
                    .id("dialog-content")
                    .w(px(DIALOG_WIDTH))
                    .bg(SpotColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .p_6()
                    // Swallow clicks so they do not reach the backdrop
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    .child(
                        div()
                            .flex()
                            .items_start()
                            .justify_between()
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_2()
                                    .child(
                                        div()
                                            .text_size(px(Typography::TEXT_LG))
                                            .font_weight(gpui::FontWeight::SEMIBOLD)
                                            .text_color(SpotColors::text_primary())
                                            .child(self.title),
                                    )
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(SpotColors::text_muted())
                                            .child(self.description),
                                    ),
                            )
                            .child(
                                div()
                                    .id("dialog-close")
                                    .size(px(24.0))
                                    .rounded_sm()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .when(pending, |el| el.opacity(0.5))
                                    .when(!pending, |el| {
                                        el.cursor_pointer()
                                            .hover(|s| s.bg(SpotColors::button_outline_hover()))
                                            .when_some(on_cancel, |el, handler| {
                                                el.on_click(move |_event: &ClickEvent, window, cx| {
                                                    handler(window, cx)
                                                })
                                            })
                                    })
                                    .child(
                                        Icon::from(SidebarIcon::Close)
                                            .size_4()
                                            .text_color(SpotColors::text_muted()),
                                    ),
                            ),
                    )
                    // Footer
                    .child(
                        div()
                            .flex()
                            .justify_end()
                            .gap_2()
                            .child(cancel_button)
                            .child(confirm_button),
                    ),
            )
    }
}
