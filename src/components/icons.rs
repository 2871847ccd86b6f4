//! Phosphor icon helpers

use maud::{Markup, html};

use crate::theme::ThemePreference;

/// Hamburger trigger for the mobile menu.
pub const MENU: &str = "ph ph-list";

/// Vertical ellipsis used by the info panel toggle.
pub const ELLIPSIS: &str = "ph ph-dots-three-vertical";

/// Renders decorative Phosphor icon
///
/// Icons are hidden from assistive technology; callers pair them with a
/// visually hidden label when the icon carries meaning.
pub fn icon(class: &str) -> Markup {
    html! {
        i class=(class) aria-hidden="true" {}
    }
}

/// Returns Phosphor icon class for a theme preference
pub fn theme_icon_class(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "ph ph-sun",
        ThemePreference::Dark => "ph ph-moon",
        ThemePreference::System => "ph ph-desktop",
    }
}

/// Renders site logo image
///
/// # Arguments
///
/// * `src`: Image source (asset path, URL or data URI)
/// * `width`: Rendered width in pixels
/// * `height`: Rendered height in pixels
/// * `class`: Extra CSS classes
pub fn logo(src: &str, width: u32, height: f32, class: &str) -> Markup {
    html! {
        img src=(src) alt="Logo" width=(width) height=(height) class=(format!("logo {}", class));
    }
}
