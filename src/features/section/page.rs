//! Section Page
//!
//! Content shown for navigation targets that have no dedicated screen yet.

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div};

use crate::app::navigation::Route;
use crate::components::layout::page_header::PageHeader;
use crate::i18n::{Locale, t};
use crate::theme::colors::SpotColors;

#[derive(IntoElement)]
pub struct SectionPage {
    route: Route,
    locale: Locale,
}

impl SectionPage {
    pub fn new(route: Route, locale: Locale) -> Self {
        Self { route, locale }
    }
}

impl RenderOnce for SectionPage {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .child(
                PageHeader::new(t(self.locale, self.route.title_key()))
                    .subtitle(self.route.path().to_string()),
            )
            .child(
                div()
                    .p_6()
                    .text_sm()
                    .text_color(SpotColors::text_muted())
                    .child(t(self.locale, "page.placeholder")),
            )
    }
}
