//! Workspace - Main Shell with Layout
//!
//! Shows the dashboard shell (sidebar + content) while signed in, and the
//! login page otherwise. The sidebar is created when the shell appears and
//! dropped when it disappears, so its local state never outlives it.

use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::sidebar::Sidebar;
use crate::features::login::page::LoginPage;
use crate::features::section::page::SectionPage;
use crate::features::settings::page::SettingsPage;
use crate::theme::colors::SpotColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    sidebar: Option<Entity<Sidebar>>,
    // Page views (created lazily, dropped with the shell)
    settings_page: Option<Entity<SettingsPage>>,
    login_page: Option<Entity<LoginPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.routes, |_this, routes, cx| {
            tracing::info!("Route: {}", routes.read(cx).current_path());
            cx.notify();
        })
        .detach();

        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            sidebar: None,
            settings_page: None,
            login_page: None,
        }
    }

    /// Whether the dashboard shell (with sidebar) is visible
    fn shows_shell(&self, cx: &Context<Self>) -> bool {
        let signed_in = self.entities.session.read(cx).is_authenticated();
        let on_login = *self.entities.routes.read(cx).current() == Route::Login;
        signed_in && !on_login
    }

    fn sidebar(&mut self, cx: &mut Context<Self>) -> Entity<Sidebar> {
        if let Some(sidebar) = &self.sidebar {
            return sidebar.clone();
        }
        tracing::debug!("Mounting sidebar");
        let entities = self.entities.clone();
        let sidebar = cx.new(|cx| Sidebar::new(entities, cx));
        self.sidebar = Some(sidebar.clone());
        sidebar
    }

    fn render_content(&mut self, route: Route, cx: &mut Context<Self>) -> AnyElement {
        match route {
            Route::Settings => {
                let entities = self.entities.clone();
                self.settings_page
                    .get_or_insert_with(|| cx.new(|cx| SettingsPage::new(entities, cx)))
                    .clone()
                    .into_any_element()
            }
            route => {
                let locale = self.entities.i18n.read(cx).locale;
                SectionPage::new(route, locale).into_any_element()
            }
        }
    }

    fn render_login(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        self.login_page
            .get_or_insert_with(|| cx.new(|cx| LoginPage::new(entities, cx)))
            .clone()
            .into_any_element()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let root = div()
            .size_full()
            .relative()
            .flex()
            .flex_row()
            .bg(SpotColors::background());

        if !self.shows_shell(cx) {
            if self.sidebar.take().is_some() {
                tracing::debug!("Unmounting sidebar");
            }
            self.settings_page = None;
            return root.child(self.render_login(cx));
        }

        self.login_page = None;
        let route = self.entities.routes.read(cx).current().clone();
        let sidebar = self.sidebar(cx);
        let content = self.render_content(route, cx);

        root.child(sidebar).child(
            div()
                .flex_1()
                .h_full()
                .flex()
                .flex_col()
                .overflow_hidden()
                .bg(SpotColors::content_bg())
                .child(content),
        )
    }
}
