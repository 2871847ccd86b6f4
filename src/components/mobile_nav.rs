//! Collapsible navigation for narrow viewports

use maud::{Markup, html};

use super::icons::{MENU, icon};
use crate::menu::Menu;

/// Renders mobile navigation disclosure
///
/// Uses a native `details` element so opening and closing needs no script.
/// The trigger is shown exactly where the desktop link row is hidden. The
/// open panel lists the main menu followed by the content menu.
///
/// # Arguments
///
/// * `main_menu`: Same entries as the desktop link row
/// * `content_menu`: Secondary entries listed under "Blog"
pub fn mobile_nav(main_menu: &Menu, content_menu: &Menu) -> Markup {
    html! {
        details class="mobile-nav show-below-md" {
            summary class="button button-ghost mobile-nav-trigger" aria-label="Toggle menu" {
                (icon(MENU))
                span class="sr-only" { "Open menu" }
            }
            div class="mobile-nav-panel" {
                nav class="mobile-nav-group" aria-label="Menu" {
                    @for entry in main_menu {
                        a class="mobile-nav-link" href=(entry.href()) { (entry.display_label()) }
                    }
                }
                @if !content_menu.is_empty() {
                    h3 class="mobile-nav-heading" { "Blog" }
                    nav class="mobile-nav-group" aria-label="Blog" {
                        @for entry in content_menu {
                            a class="mobile-nav-link" href=(entry.href()) { (entry.display_label()) }
                        }
                    }
                }
            }
        }
    }
}
