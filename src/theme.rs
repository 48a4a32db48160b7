//! Light/dark theme value and initial theme resolution.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the attribute/storage form (`"light"` or `"dark"`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle: the icon shows the theme you would switch to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Theme declared by a `data-color-scheme` attribute.
///
/// `None` when the attribute is absent or blank. Any other value counts as a
/// declaration: `"dark"` is dark and everything else reads as light.
#[must_use]
pub fn declared_theme(attribute: Option<&str>) -> Option<Theme> {
    let raw = attribute.map(str::trim).filter(|raw| !raw.is_empty())?;
    Some(Theme::parse(raw).unwrap_or(Theme::Light))
}

/// Pick the theme to show at load.
///
/// An attribute already present on the document wins; then a stored
/// preference; then the system dark-mode signal.
#[must_use]
pub fn resolve_initial(attribute: Option<&str>, stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(theme) = declared_theme(attribute) {
        return theme;
    }
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}
