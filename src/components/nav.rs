//! Primary navigation bar

use maud::{Markup, html};

use super::icons::logo;
use super::mobile_nav::mobile_nav;
use crate::menu::Menu;
use crate::site::Site;

/// Rendered logo width in the navigation bar.
const NAV_LOGO_WIDTH: u32 = 84;

/// Rendered logo height in the navigation bar.
const NAV_LOGO_HEIGHT: f32 = 30.54;

/// Renders primary navigation bar
///
/// Order is fixed: brand link to site root, slot children, desktop link
/// row, call-to-action, mobile trigger. The bar is sticky at the top of
/// the viewport and stacks above all other content.
///
/// # Arguments
///
/// * `site`: Site description providing menus and call-to-action
/// * `logo_src`: Resolved logo image source
/// * `children`: Optional markup placed right after the brand link
///
/// # Returns
///
/// Navigation bar markup
pub fn primary_nav(site: &Site, logo_src: &str, children: Option<Markup>) -> Markup {
    html! {
        nav class="site-nav fade-in" id="site-nav" {
            div id="nav-container" class="nav-container" {
                a class="brand" href="/" {
                    h2 class="sr-only" { (site.identity.brand) }
                    (logo(logo_src, NAV_LOGO_WIDTH, NAV_LOGO_HEIGHT, "invert-dark"))
                }
                @if let Some(slot) = children {
                    (slot)
                }
                div class="nav-actions" {
                    (desktop_links(&site.main_menu))
                    a class="button button-primary hide-below-sm" href=(site.identity.cta_href) {
                        (site.identity.cta_label)
                    }
                    (mobile_nav(&site.main_menu, &site.content_menu))
                }
            }
        }
    }
}

/// Renders desktop link row
///
/// One link per menu entry in menu order, hidden below the medium
/// breakpoint. An empty menu yields an empty row.
pub fn desktop_links(menu: &Menu) -> Markup {
    html! {
        div class="nav-links hide-below-md" {
            @for entry in menu {
                a class="button button-ghost button-sm" href=(entry.href()) {
                    (entry.display_label())
                }
            }
        }
    }
}
