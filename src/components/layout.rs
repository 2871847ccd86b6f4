//! Root page shell

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer::footer;
use super::info_panel::info_panel;
use super::nav::primary_nav;
use crate::site::Site;
use crate::theme::{PreferenceStore, ThemeController, bootstrap_script};

/// Sans-serif font stylesheet, exposed to CSS as `--font-sans`.
const FONT_SANS: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Data container for root shell rendering
pub struct ShellData<'a, S: PreferenceStore> {
    pub site: &'a Site,
    pub theme: &'a ThemeController<S>,
    pub logo_src: &'a str,
    pub stylesheets: &'a [&'a str],
    /// Extra markup placed in the navigation bar after the brand link.
    pub nav_slot: Option<Markup>,
}

/// Wraps page content with the full site chrome
///
/// Produces the complete document: head with page metadata and the theme
/// bootstrap, the outer frame, the info panel, and a single theme scope
/// holding the main region (content then footer) and the navigation bar.
/// The navigation bar comes last in document order and is lifted to the
/// top by the stylesheet.
///
/// # Arguments
///
/// * `data`: Shell data container
/// * `content`: Already resolved page content for the content slot
///
/// # Returns
///
/// Complete HTML document
pub fn root_shell<S: PreferenceStore>(data: ShellData<'_, S>, content: Markup) -> Markup {
    let site = data.site;
    let metadata = &site.metadata;
    let preference = data.theme.current_preference();

    html! {
        (DOCTYPE)
        html lang="en" class=[data.theme.root_class()] data-theme=(preference.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (metadata.title) }
                meta name="description" content=(metadata.description);
                link rel="canonical" href=(metadata.canonical_url());
                meta property="og:title" content=(metadata.title);
                meta property="og:description" content=(metadata.description);
                meta property="og:url" content=(metadata.canonical_url());
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href=(FONT_SANS);
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in data.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                script { (PreEscaped(bootstrap_script(preference))) }
            }
            body class="app-body" {
                div class="frame" {
                    div class="frame-inner" {
                        div class="frame-row" {
                            (info_panel(&site.profile))
                            div class="theme-scope" data-theme-scope {
                                main class="main" {
                                    div class="content" {
                                        (content)
                                    }
                                    (footer(site, data.logo_src, data.theme))
                                }
                                (primary_nav(site, data.logo_src, data.nav_slot))
                            }
                        }
                    }
                }
            }
        }
    }
}
