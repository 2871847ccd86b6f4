//! Site footer with link index and theme toggle

use maud::{Markup, html};

use super::icons::logo;
use super::theme_toggle::theme_toggle;
use crate::menu::Menu;
use crate::site::Site;
use crate::theme::{PreferenceStore, ThemeController};

const FOOTER_LOGO_WIDTH: u32 = 120;
const FOOTER_LOGO_HEIGHT: f32 = 27.27;

/// Renders site footer
///
/// Top grid holds the brand with the page description and two link groups:
/// "Website" from the main menu and "Blog" from the content menu. The
/// bottom row holds the theme toggle and the copyright line.
///
/// # Arguments
///
/// * `site`: Site description
/// * `logo_src`: Resolved logo image source
/// * `theme`: Theme controller for the toggle
///
/// # Returns
///
/// Footer markup
pub fn footer<S: PreferenceStore>(
    site: &Site,
    logo_src: &str,
    theme: &ThemeController<S>,
) -> Markup {
    html! {
        footer class="site-footer" {
            section class="section" {
                div class="container footer-grid" {
                    div class="footer-brand not-prose" {
                        a href="/" {
                            h3 class="sr-only" { (site.identity.footer_brand) }
                            (logo(logo_src, FOOTER_LOGO_WIDTH, FOOTER_LOGO_HEIGHT, "invert-dark hover-fade"))
                        }
                        p {
                            span class="balance" { (site.metadata.description) }
                        }
                    }
                    (link_group("Website", &site.main_menu))
                    (link_group("Blog", &site.content_menu))
                }
                div class="container footer-bottom not-prose" {
                    (theme_toggle(theme))
                    p class="text-muted" {
                        "© "
                        a href=(site.identity.owner_url) { (site.identity.owner) }
                        ". All rights reserved. "
                        (site.identity.years)
                        "."
                    }
                }
            }
        }
    }
}

/// Renders labeled footer link group
///
/// The heading is always present; an empty menu leaves the group empty.
pub fn link_group(heading: &str, menu: &Menu) -> Markup {
    html! {
        div class="footer-links" {
            h5 class="footer-heading" { (heading) }
            @for entry in menu {
                a class="footer-link" href=(entry.href()) { (entry.display_label()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Appearance, MemoryStore};

    fn render_default() -> String {
        let theme = ThemeController::init(MemoryStore::default(), Appearance::Light);
        footer(&Site::default(), "assets/logo.svg", &theme).into_string()
    }

    #[test]
    fn test_footer_description_verbatim() {
        let html = render_default();
        assert!(html.contains(
            r#"<span class="balance">A starter template for Next.js with WordPress as a headless CMS.</span>"#
        ));
    }

    #[test]
    fn test_footer_groups_in_order() {
        // Arrange & Act
        let html = render_default();

        // Assert
        let website = html.find(r#"footer-heading">Website<"#).expect("Website group");
        let blog = html.find(r#"footer-heading">Blog<"#).expect("Blog group");
        let categories = html.find(">Categories<").expect("content entry");
        assert!(website < blog && blog < categories);
    }

    #[test]
    fn test_footer_copyright() {
        let html = render_default();
        assert!(html.contains(
            r#"© <a href="https://9d8.dev">9d8</a>. All rights reserved. 2024-present."#
        ));
    }

    #[test]
    fn test_footer_contains_toggle_after_grid() {
        let html = render_default();
        let grid = html.find("footer-grid").expect("grid");
        let toggle = html.find("theme-toggle").expect("toggle");
        assert!(grid < toggle);
    }

    #[test]
    fn test_footer_brand_heading_from_identity() {
        // Arrange
        let mut site = Site::default();
        site.identity.footer_brand = "Acme".to_string();
        site.metadata.title = "Page Title".to_string();
        let theme = ThemeController::init(MemoryStore::default(), Appearance::Light);

        // Act
        let html = footer(&site, "assets/logo.svg", &theme).into_string();

        // Assert
        assert!(html.contains(r#"<h3 class="sr-only">Acme</h3>"#));
        assert!(!html.contains("Page Title"));
    }

    #[test]
    fn test_link_group_empty_menu() {
        let html = link_group("Blog", &Menu::default()).into_string();
        assert_eq!(
            html,
            r#"<div class="footer-links"><h5 class="footer-heading">Blog</h5></div>"#
        );
    }
}
