// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the board surface, list panels and item cards.
//!
//! Style functions take the active [`ColorScheme`] and return plain style
//! values; views wrap them in `.style(move |_| ...)` closures.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Backdrop behind all lists.
#[must_use]
pub fn board_surface(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// A list panel: translucent surface the item cards sit on.
#[must_use]
pub fn list_panel(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            scheme.surface_secondary,
            opacity::SURFACE,
        ))),
        border: Border {
            color: scheme.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// An item card at rest.
#[must_use]
pub fn item_card(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// The card currently being dragged: faded in place while the gesture is in
/// flight (the ghost the pointer "carries" away).
#[must_use]
pub fn item_card_ghost(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            scheme.surface_primary,
            opacity::GHOST,
        ))),
        text_color: Some(with_alpha(scheme.text_primary, opacity::GHOST)),
        border: Border {
            color: with_alpha(scheme.surface_tertiary, opacity::GHOST),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

/// The card or strip the drop would land on right now.
#[must_use]
pub fn drop_target(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            scheme.brand_primary,
            opacity::HIGHLIGHT,
        ))),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Empty-region strip at the bottom of each list; invisible unless it is the
/// current drop target.
#[must_use]
pub fn drop_strip(scheme: &ColorScheme, is_target: bool) -> container::Style {
    if is_target {
        drop_target(scheme)
    } else {
        container::Style::default()
    }
}

/// Primary action button ("Add New List").
pub fn add_list_button(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = scheme.brand_secondary;
    let hovered = scheme.brand_primary;

    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => hovered,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                color: background,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_card_is_translucent() {
        let style = item_card_ghost(&ColorScheme::light());
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("ghost card should have a color background"),
        }
    }

    #[test]
    fn drop_strip_is_invisible_when_not_targeted() {
        let style = drop_strip(&ColorScheme::dark(), false);
        assert!(style.background.is_none());
    }

    #[test]
    fn drop_target_uses_brand_border() {
        let scheme = ColorScheme::light();
        let style = drop_target(&scheme);
        assert_eq!(style.border.color, scheme.brand_primary);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }
}
