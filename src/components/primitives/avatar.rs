//! Avatar Component
//!
//! Round profile picture with a letter fallback.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, StyledImage,
    Window, div, img, px,
};

use crate::domain::identity::Identity;
use crate::theme::colors::SpotColors;

#[derive(IntoElement)]
pub struct Avatar {
    image: Option<SharedString>,
    fallback: SharedString,
    size: f32,
}

impl Avatar {
    pub fn new(identity: &Identity) -> Self {
        Self {
            image: identity.avatar_url().map(|url| SharedString::from(url.to_string())),
            fallback: identity.avatar_fallback().into(),
            size: 40.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

fn fallback_letter(letter: SharedString) -> AnyElement {
    div()
        .size_full()
        .rounded_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(SpotColors::avatar_bg())
        .text_color(SpotColors::brand())
        .font_weight(gpui::FontWeight::BOLD)
        .child(letter)
        .into_any_element()
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let size = px(self.size);
        let fallback = self.fallback;

        // The letter stays visible until the image has loaded, and for good if it fails
        let inner = match self.image {
            Some(url) => {
                let loading = fallback.clone();
                img(url)
                    .size_full()
                    .rounded_full()
                    .with_loading(move || fallback_letter(loading.clone()))
                    .with_fallback(move || fallback_letter(fallback.clone()))
                    .into_any_element()
            }
            None => fallback_letter(fallback),
        };

        div()
            .size(size)
            .flex_none()
            .rounded_full()
            .border_2()
            .border_color(SpotColors::content_bg())
            .shadow_sm()
            .overflow_hidden()
            .child(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_avatar_keeps_fallback_letter() {
        let identity =
            Identity::new("Maya", "maya@spotline.io").with_avatar("https://cdn.spotline.io/m.png");
        let avatar = Avatar::new(&identity);
        assert_eq!(avatar.image.as_ref().map(|s| s.as_str()), Some("https://cdn.spotline.io/m.png"));
        assert_eq!(avatar.fallback.to_string(), "M");
    }

    #[test]
    fn test_nameless_avatar_falls_back_to_u() {
        let identity = Identity::new("", "anon@spotline.io").with_avatar("https://cdn.spotline.io/x.png");
        assert_eq!(Avatar::new(&identity).fallback.to_string(), "U");
    }
}
