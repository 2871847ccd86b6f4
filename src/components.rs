//! Reusable HTML components for the page shell
//!
//! Each component is a Maud function over read-only site data. The root
//! shell in `layout` composes them into one document; the others can be
//! rendered on their own, which is how their contracts are tested.

pub mod footer;
pub mod icons;
pub mod info_panel;
pub mod layout;
pub mod mobile_nav;
pub mod nav;
pub mod theme_toggle;
