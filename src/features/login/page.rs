//! Login Page
//!
//! Shown after sign-out. Signing in again restores the configured profile.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::SidebarIcon;
use crate::components::primitives::button::Button;
use crate::i18n::t;
use crate::theme::colors::SpotColors;
use crate::theme::typography::Typography;

/// Login page component
pub struct LoginPage {
    entities: AppEntities,
}

impl LoginPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn sign_in(&mut self, cx: &mut Context<Self>) {
        let config = self.entities.config.read(cx).config.clone();
        let start = config.ui.landing_route();

        self.entities.session.update(cx, |session, cx| {
            session.sign_in(config.profile.identity(), config.profile.token.clone());
            cx.notify();
        });
        self.entities.routes.update(cx, |routes, cx| {
            routes.replace(start);
            cx.notify();
        });
    }
}

impl Render for LoginPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(SpotColors::sidebar_bg())
            .child(
                div()
                    .w(px(380.0))
                    .p_8()
                    .bg(SpotColors::content_bg())
                    .rounded_xl()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .size(px(48.0))
                            .rounded_lg()
                            .bg(SpotColors::brand())
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(
                                Icon::from(SidebarIcon::Fish)
                                    .size_6()
                                    .text_color(SpotColors::text_light()),
                            ),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(SpotColors::text_primary())
                            .child(t(locale, "login.title")),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(SpotColors::text_muted())
                            .child(t(locale, "login.description")),
                    )
                    .child(
                        Button::new("login-sign-in", t(locale, "login.sign_in"))
                            .full_width()
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.sign_in(cx);
                            })),
                    ),
            )
    }
}
