//! Button Component

use gpui::{
    AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::assets::SidebarIcon;
use crate::theme::colors::SpotColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled brand button
    #[default]
    Primary,
    /// White button with a neutral border
    Outline,
    /// Filled red button for irreversible actions
    Destructive,
    /// White button with red text and border
    DangerOutline,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    icon: Option<SidebarIcon>,
    full_width: bool,
    disabled: bool,
    loading_label: Option<SharedString>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            icon: None,
            full_width: false,
            disabled: false,
            loading_label: None,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Leading icon
    pub fn icon(mut self, icon: SidebarIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Disabled buttons ignore clicks and render dimmed
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show `label` instead of the normal label while `loading` is set
    pub fn loading(mut self, loading: bool, label: impl Into<SharedString>) -> Self {
        self.loading_label = loading.then(|| label.into());
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    pub fn destructive(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Destructive)
    }

    /// Whether clicks reach the handler
    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.loading_label.is_none()
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, border_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                SpotColors::brand(),
                SpotColors::text_light(),
                SpotColors::brand(),
                gpui::rgba(0x1279bbff),
            ),
            ButtonVariant::Outline => (
                SpotColors::content_bg(),
                SpotColors::text_primary(),
                SpotColors::border(),
                SpotColors::button_outline_hover(),
            ),
            ButtonVariant::Destructive => (
                SpotColors::danger(),
                SpotColors::text_light(),
                SpotColors::danger(),
                SpotColors::button_danger_hover(),
            ),
            ButtonVariant::DangerOutline => (
                SpotColors::content_bg(),
                SpotColors::danger(),
                SpotColors::danger_border(),
                SpotColors::danger_hover_bg(),
            ),
        };

        let interactive = self.is_interactive();
        let opacity = if interactive { 1.0 } else { 0.5 };
        let label = self.loading_label.unwrap_or(self.label);
        let icon: Option<AnyElement> = self
            .icon
            .map(|icon| Icon::from(icon).size_5().text_color(text_color).into_any_element());

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(px(16.0))
            .py(px(8.0))
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded_lg()
            .opacity(opacity)
            .when(self.full_width, |el| el.w_full())
            .children(icon)
            .child(label);

        if interactive {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_or_loading_buttons_are_inert() {
        assert!(Button::new("b", "Yes").is_interactive());
        assert!(!Button::new("b", "Yes").disabled(true).is_interactive());
        assert!(!Button::new("b", "Yes").loading(true, "Logging out...").is_interactive());
        assert!(Button::new("b", "Yes").loading(false, "Logging out...").is_interactive());
    }
}
