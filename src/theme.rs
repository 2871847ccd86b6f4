//! Light, dark and system theming.
//!
//! [`ThemeController`] is the single context object for theme state. It is
//! created once per render, resolves its initial preference from a
//! [`PreferenceStore`], and is passed by reference to every component that
//! reads or changes the theme. In the browser the same rules run in the
//! bootstrap script returned by [`bootstrap_script`].

use anyhow::{Result, bail};
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

/// Storage key used by the browser for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// User-selected appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    /// Next preference in toggle order: light, dark, system, light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolves to concrete appearance given the operating system setting.
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::System => system,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => bail!(
                "Unknown theme preference: {} (expected light, dark or system)",
                other
            ),
        }
    }
}

/// Concrete appearance after resolving a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Class name applied to the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Visual tokens for one appearance.
///
/// Values are CSS colors. The stylesheet is generated from these constants
/// by [`ThemeTokens::css`], so the markup and the Rust side never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
}

impl ThemeTokens {
    pub const LIGHT: ThemeTokens = ThemeTokens {
        background: "#ffffff",
        foreground: "#0a0a0a",
        muted: "#f4f4f5",
        muted_foreground: "#71717a",
        border: "#e4e4e7",
        accent: "#f4f4f5",
        primary: "#18181b",
        primary_foreground: "#fafafa",
    };

    pub const DARK: ThemeTokens = ThemeTokens {
        background: "#0a0a0a",
        foreground: "#fafafa",
        muted: "#27272a",
        muted_foreground: "#a1a1aa",
        border: "#27272a",
        accent: "#27272a",
        primary: "#fafafa",
        primary_foreground: "#18181b",
    };

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::LIGHT,
            Appearance::Dark => Self::DARK,
        }
    }

    fn variables(&self) -> [(&'static str, &'static str); 8] {
        [
            ("--background", self.background),
            ("--foreground", self.foreground),
            ("--muted", self.muted),
            ("--muted-foreground", self.muted_foreground),
            ("--border", self.border),
            ("--accent", self.accent),
            ("--primary", self.primary),
            ("--primary-foreground", self.primary_foreground),
        ]
    }

    /// Emits CSS custom properties for both appearances.
    ///
    /// Light tokens apply at `:root`, dark tokens under the `.dark` class.
    /// Without a class the operating system preference decides, which keeps
    /// pages readable when scripts are disabled.
    pub fn css() -> String {
        let block = |tokens: &ThemeTokens| {
            tokens
                .variables()
                .iter()
                .map(|(name, value)| format!("  {}: {};\n", name, value))
                .collect::<String>()
        };
        let light = block(&Self::LIGHT);
        let dark = block(&Self::DARK);

        format!(
            ":root, :root.light {{\n{light}  color-scheme: light;\n}}\n\
             :root.dark {{\n{dark}  color-scheme: dark;\n}}\n\
             @media (prefers-color-scheme: dark) {{\n:root:not(.light) {{\n{dark}  color-scheme: dark;\n}}\n}}\n"
        )
    }
}

/// Persistence for the selected preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, preference: ThemePreference);
}

/// In-process store, used for static renders and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<ThemePreference>>,
}

impl MemoryStore {
    pub fn new(initial: Option<ThemePreference>) -> Self {
        Self {
            value: Cell::new(initial),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<ThemePreference> {
        self.value.get()
    }

    fn save(&self, preference: ThemePreference) {
        self.value.set(Some(preference));
    }
}

/// Theme state shared by all components of one render.
pub struct ThemeController<S: PreferenceStore = MemoryStore> {
    store: S,
    preference: ThemePreference,
    system: Appearance,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolves initial preference: persisted choice, else system.
    pub fn init(store: S, system: Appearance) -> Self {
        let preference = store.load().unwrap_or_default();
        Self {
            store,
            preference,
            system,
        }
    }

    pub fn current_preference(&self) -> ThemePreference {
        self.preference
    }

    /// Sets and persists preference.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.store.save(preference);
    }

    /// Advances to [`ThemePreference::next`] and returns the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference.next();
        self.set_preference(next);
        next
    }

    /// Records an operating system appearance change.
    ///
    /// The stored preference is untouched; only `system` resolution moves.
    pub fn set_system_appearance(&mut self, appearance: Appearance) {
        self.system = appearance;
    }

    pub fn system_appearance(&self) -> Appearance {
        self.system
    }

    pub fn resolved_appearance(&self) -> Appearance {
        self.preference.resolve(self.system)
    }

    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::for_appearance(self.resolved_appearance())
    }

    /// Root class known at render time, `None` while following the system.
    pub fn root_class(&self) -> Option<&'static str> {
        match self.preference {
            ThemePreference::System => None,
            explicit => Some(explicit.resolve(self.system).class_name()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Client-side theme bootstrap.
///
/// Runs in `<head>` before first paint: reads the persisted preference
/// (falling back to `default`), applies the resolved class to the root,
/// follows `prefers-color-scheme` while on `system`, and wires every
/// `[data-theme-set]` button. Transitions are suppressed while a class is
/// swapped so the page never animates between themes.
pub fn bootstrap_script(default: ThemePreference) -> String {
    format!(
        r#"(function () {{
  var key = "{key}";
  var fallback = "{default}";
  var root = document.documentElement;
  var media = window.matchMedia("(prefers-color-scheme: dark)");
  function valid(pref) {{
    return pref === "light" || pref === "dark" || pref === "system";
  }}
  function stored() {{
    var pref = null;
    try {{ pref = localStorage.getItem(key); }} catch (e) {{}}
    return valid(pref) ? pref : fallback;
  }}
  function apply(pref) {{
    var guard = document.createElement("style");
    guard.appendChild(document.createTextNode("*,*::before,*::after{{transition:none!important}}"));
    document.head.appendChild(guard);
    var resolved = pref === "system" ? (media.matches ? "dark" : "light") : pref;
    root.classList.remove("light", "dark");
    root.classList.add(resolved);
    root.style.colorScheme = resolved;
    root.setAttribute("data-theme", pref);
    window.getComputedStyle(document.body || root).opacity;
    setTimeout(function () {{ document.head.removeChild(guard); }}, 1);
  }}
  function set(pref) {{
    if (!valid(pref)) return;
    try {{ localStorage.setItem(key, pref); }} catch (e) {{}}
    apply(pref);
  }}
  apply(stored());
  media.addEventListener("change", function () {{
    if (stored() === "system") apply("system");
  }});
  document.addEventListener("click", function (event) {{
    var target = event.target.closest("[data-theme-set]");
    if (target) set(target.getAttribute("data-theme-set"));
  }});
}})();"#,
        key = STORAGE_KEY,
        default = default.as_str(),
    )
}
