//! Sidebar Component
//!
//! Dashboard navigation: brand mark, page links, the collapsible user list,
//! the profile summary and the logout confirmation flow.

use gpui::{
    AnyElement, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Subscription, Window, anchored, deferred, div,
    point, prelude::*, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::{NavItem, Route, SubNavItem};
use crate::assets::SidebarIcon;
use crate::components::composite::confirm_dialog::ConfirmDialog;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::constants::{AVATAR_SIZE, NAV_ITEM_HEIGHT, SIDEBAR_WIDTH};
use crate::i18n::{Locale, t};
use crate::services::{AuthService, request_logout, settle_logout};
use crate::state::nav_state::NavigationState;
use crate::theme::colors::SpotColors;
use crate::theme::typography::Typography;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
    nav: NavigationState,
    _subscriptions: Vec<Subscription>,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let nav = NavigationState::for_path(entities.routes.read(cx).current_path());

        let subscriptions = vec![
            cx.observe(&entities.routes, |_this, _, cx| cx.notify()),
            cx.observe(&entities.session, |_this, _, cx| cx.notify()),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
        ];

        Self {
            entities,
            nav,
            _subscriptions: subscriptions,
        }
    }

    fn navigate(&mut self, route: Route, cx: &mut Context<Self>) {
        self.entities.routes.update(cx, |routes, cx| {
            routes.push(route);
            cx.notify();
        });
    }

    fn toggle_user_list(&mut self, cx: &mut Context<Self>) {
        self.nav.toggle_sub_menu();
        cx.notify();
    }

    fn show_logout_dialog(&mut self, cx: &mut Context<Self>) {
        self.nav.open_logout_dialog();
        cx.notify();
    }

    fn dismiss_logout_dialog(&mut self, cx: &mut Context<Self>) {
        if self.nav.dismiss_logout_dialog() {
            cx.notify();
        }
    }

    /// Run the logout request, then tear the session down whatever it returned.
    ///
    /// The cleanup task holds the session and route stores rather than this
    /// view, so sign-out completes even if the sidebar is dropped mid-request.
    fn confirm_logout(&mut self, cx: &mut Context<Self>) {
        if !self.nav.begin_logout() {
            return;
        }
        cx.notify();
        tracing::info!("Logout confirmed");

        let token = self
            .entities
            .session
            .read(cx)
            .token()
            .map(str::to_owned);
        let api = cx.try_global::<AuthService>().map(AuthService::api);
        let session = self.entities.session.clone();
        let routes = self.entities.routes.clone();

        cx.spawn(async move |this, cx| {
            let outcome = request_logout(api.as_deref(), token).await;

            let _ = cx.update(|cx| {
                let sidebar = this.upgrade();
                session.update(cx, |session, cx| {
                    routes.update(cx, |routes, cx| {
                        match sidebar {
                            Some(sidebar) => sidebar.update(cx, |sidebar, cx| {
                                settle_logout(&outcome, session, routes, Some(&mut sidebar.nav));
                                cx.notify();
                            }),
                            None => settle_logout(&outcome, session, routes, None),
                        }
                        cx.notify();
                    });
                    cx.notify();
                });
            });
        })
        .detach();
    }

    fn render_brand(&self, locale: Locale) -> impl IntoElement {
        div()
            .flex()
            .justify_center()
            .pt_4()
            .pb(px(40.0))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .size(px(36.0))
                            .rounded_lg()
                            .bg(SpotColors::brand())
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(
                                Icon::from(SidebarIcon::Fish)
                                    .size_5()
                                    .text_color(SpotColors::text_light()),
                            ),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(SpotColors::brand())
                            .child(t(locale, "app.brand")),
                    ),
            )
    }

    fn render_nav_item(
        &self,
        item: NavItem,
        locale: Locale,
        path: &str,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let is_active = item.is_active(path);

        let (bg_color, text_color) = if is_active {
            (SpotColors::brand(), SpotColors::text_light())
        } else {
            (SpotColors::transparent(), SpotColors::text_secondary())
        };

        let trailing = (item == NavItem::UserList).then(|| {
            let chevron = if self.nav.sub_menu_expanded() {
                SidebarIcon::ChevronDown
            } else {
                SidebarIcon::ChevronRight
            };
            Icon::from(chevron).size_4().text_color(text_color)
        });

        let row = div()
            .id(item.element_id())
            .h(px(NAV_ITEM_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .rounded_lg()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(Typography::TEXT_BASE))
            .font_weight(gpui::FontWeight::MEDIUM)
            .cursor_pointer()
            .when(is_active, |el| el.shadow_md())
            .when(!is_active, |el| {
                el.hover(|s| s.bg(SpotColors::nav_hover_bg()).text_color(SpotColors::brand()))
            })
            .child(Icon::from(item.icon()).size_5().text_color(text_color))
            .child(div().flex_1().child(t(locale, item.label_key())))
            .children(trailing);

        match item.target() {
            Some(route) => row
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.navigate(route.clone(), cx);
                }))
                .into_any_element(),
            None => row
                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                    this.toggle_user_list(cx);
                }))
                .into_any_element(),
        }
    }

    fn render_sub_menu(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .ml_4()
            .mt_1()
            .pl_4()
            .border_l_2()
            .border_color(SpotColors::brand_faint())
            .flex()
            .flex_col()
            .gap_1()
            .children(SubNavItem::all().iter().map(|item| {
                let route = item.route();

                div()
                    .id(item.element_id())
                    .py_2()
                    .text_sm()
                    .text_color(SpotColors::text_secondary())
                    .cursor_pointer()
                    .hover(|s| s.text_color(SpotColors::brand()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.navigate(route.clone(), cx);
                    }))
                    .child(t(locale, item.label_key()))
            }))
    }

    fn render_profile(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let identity = self.entities.session.read(cx).identity().clone();
        let name = SharedString::from(identity.name.clone());
        let email = SharedString::from(identity.email.clone());

        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .px_2()
                    .child(Avatar::new(&identity).size(AVATAR_SIZE))
                    .child(
                        div()
                            .flex_1()
                            .overflow_hidden()
                            .child(
                                div()
                                    .truncate()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(SpotColors::brand())
                                    .child(name),
                            )
                            .child(
                                div()
                                    .truncate()
                                    .text_xs()
                                    .text_color(SpotColors::text_muted())
                                    .child(email),
                            ),
                    ),
            )
            .child(
                Button::new("sidebar-logout", t(locale, "logout.action"))
                    .variant(ButtonVariant::DangerOutline)
                    .icon(SidebarIcon::LogOut)
                    .full_width()
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.show_logout_dialog(cx);
                    })),
            )
    }

    fn render_logout_dialog(
        &self,
        locale: Locale,
        window: &Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let cancel = cx.entity().downgrade();
        let confirm = cx.entity().downgrade();

        let dialog = ConfirmDialog::new(t(locale, "logout.title"), t(locale, "logout.description"))
            .viewport(window.viewport_size())
            .cancel_label(t(locale, "logout.cancel"))
            .confirm_label(t(locale, "logout.confirm"))
            .pending(!self.nav.dialog_buttons_enabled(), t(locale, "logout.pending"))
            .on_cancel(move |_window, cx| {
                let _ = cancel.update(cx, |this, cx| this.dismiss_logout_dialog(cx));
            })
            .on_confirm(move |_window, cx| {
                let _ = confirm.update(cx, |this, cx| this.confirm_logout(cx));
            });

        // Anchor at the window origin so the backdrop covers the whole window
        deferred(anchored().position(point(px(0.0), px(0.0))).child(dialog)).with_priority(1)
    }
}

impl Render for Sidebar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let path = self.entities.routes.read(cx).current_path().to_string();

        let mut nav_items: Vec<AnyElement> = Vec::new();
        for item in NavItem::all() {
            nav_items.push(self.render_nav_item(*item, locale, &path, cx));
            if *item == NavItem::UserList && self.nav.sub_menu_expanded() {
                nav_items.push(self.render_sub_menu(locale, cx).into_any_element());
            }
        }

        let dialog = self
            .nav
            .logout_dialog_open()
            .then(|| self.render_logout_dialog(locale, window, cx));

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .flex()
            .flex_col()
            .bg(SpotColors::sidebar_bg())
            .border_r_1()
            .border_color(SpotColors::sidebar_border())
            .px_4()
            .pt_4()
            .pb_6()
            .child(self.render_brand(locale))
            .child(div().flex_1().flex().flex_col().gap_2().children(nav_items))
            .child(self.render_profile(locale, cx))
            .children(dialog)
    }
}
