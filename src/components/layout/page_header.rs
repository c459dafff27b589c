//! Page Header Component
//!
//! Title bar shown at the top of every content page.

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px};

use crate::theme::colors::SpotColors;
use crate::theme::typography::Typography;

#[derive(IntoElement)]
pub struct PageHeader {
    title: SharedString,
    subtitle: Option<SharedString>,
}

impl PageHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl RenderOnce for PageHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(SpotColors::border())
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(SpotColors::text_primary())
                    .child(self.title),
            )
            .children(self.subtitle.map(|subtitle| {
                div()
                    .text_sm()
                    .text_color(SpotColors::text_muted())
                    .child(subtitle)
            }))
    }
}
