//! Settings Page
//!
//! Language switch and the location of the active configuration file.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::assets::SidebarIcon;
use crate::components::layout::page_header::PageHeader;
use crate::components::primitives::button::Button;
use crate::i18n::{Locale, t};
use crate::theme::colors::SpotColors;

/// Settings page component
pub struct SettingsPage {
    entities: AppEntities,
}

impl SettingsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn toggle_locale(&mut self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            tracing::info!("Locale switched to {}", i18n.locale.code());
            cx.notify();
            i18n.locale
        });

        self.entities.config.update(cx, |config, cx| {
            match config.save_locale(locale) {
                Ok(path) => tracing::debug!("Saved locale to {}", path.display()),
                Err(e) => tracing::warn!("Failed to save locale: {}", e),
            }
            cx.notify();
        });
    }

    fn render_row(&self, label: SharedString, value: impl IntoElement) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_4()
            .py_3()
            .border_b_1()
            .border_color(SpotColors::border())
            .child(
                div()
                    .w(px(180.0))
                    .text_sm()
                    .text_color(SpotColors::text_secondary())
                    .child(label),
            )
            .child(div().flex_1().child(value))
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale: Locale = self.entities.i18n.read(cx).locale;
        let source: SharedString = match &self.entities.config.read(cx).source {
            Some(path) => path.display().to_string().into(),
            None => t(locale, "settings.config_default"),
        };

        let language = div()
            .flex()
            .items_center()
            .gap_3()
            .child(Icon::from(SidebarIcon::Languages).size_4().text_color(SpotColors::text_muted()))
            .child(
                div()
                    .text_sm()
                    .text_color(SpotColors::text_primary())
                    .child(locale.display_name()),
            )
            .child(
                Button::outline("settings-switch-language", t(locale, "settings.switch_language"))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.toggle_locale(cx);
                    })),
            );

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(PageHeader::new(t(locale, Route::Settings.title_key())))
            .child(
                div()
                    .p_6()
                    .flex()
                    .flex_col()
                    .child(self.render_row(t(locale, "settings.language"), language))
                    .child(
                        self.render_row(
                            t(locale, "settings.config_file"),
                            div()
                                .text_sm()
                                .text_color(SpotColors::text_muted())
                                .child(source),
                        ),
                    ),
            )
    }
}
