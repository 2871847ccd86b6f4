//! Theme selection control

use maud::{Markup, html};

use super::icons::{icon, theme_icon_class};
use crate::menu::capitalize_first;
use crate::theme::{PreferenceStore, ThemeController, ThemePreference};

/// Renders theme toggle with one button per preference
///
/// Buttons carry `data-theme-set`, which the bootstrap script listens for.
/// The preference active at render time is marked with `aria-pressed`;
/// afterwards the root `data-theme` attribute drives the highlight.
///
/// # Arguments
///
/// * `theme`: Theme controller for the current render
///
/// # Returns
///
/// Toggle group markup
pub fn theme_toggle<S: PreferenceStore>(theme: &ThemeController<S>) -> Markup {
    let current = theme.current_preference();

    html! {
        div class="theme-toggle" role="group" aria-label="Theme" {
            @for preference in ThemePreference::ALL {
                @let label = capitalize_first(preference.as_str());
                button
                    type="button"
                    class="theme-option"
                    data-theme-set=(preference.as_str())
                    aria-pressed=(if preference == current { "true" } else { "false" })
                    title=(label)
                {
                    (icon(theme_icon_class(preference)))
                    span class="sr-only" { (label) }
                }
            }
        }
    }
}
