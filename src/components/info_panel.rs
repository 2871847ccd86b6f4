//! Decorative profile sidebar

use maud::{Markup, html};

use super::icons::{ELLIPSIS, icon};
use crate::site::Profile;

/// Renders fixed info panel with avatar, name and tagline
///
/// The secondary toggle is kept in the markup but hidden; the panel has no
/// interactive state. The whole panel is hidden below the medium
/// breakpoint.
pub fn info_panel(profile: &Profile) -> Markup {
    html! {
        aside class="info-panel hide-below-md" {
            div class="info-panel-fixed" {
                div class="info-panel-toggle" hidden {
                    a class="info-panel-toggle-link" aria-disabled="true" {
                        (icon(ELLIPSIS))
                    }
                }
                div class="info-panel-card" {
                    div class="avatar-frame" {
                        a href=(profile.avatar) class="avatar-link" {
                            img class="avatar-image" src=(profile.avatar) alt="avatar";
                        }
                    }
                    h5 class="profile-name" {
                        a href=(profile.url) { (profile.name) }
                    }
                    div class="profile-tagline" {
                        (profile.tagline[0])
                        br;
                        (profile.tagline[1])
                    }
                }
            }
        }
    }
}
