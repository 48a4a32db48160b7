//! Effects returned by the controller core for the browser host to apply.

/// Identifier of a notification element created by [`Effect::ShowNotification`].
pub type NotificationId = u64;

/// A DOM node the host has bound, addressed without holding a reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `#navbar`.
    Navbar,
    /// `#nav-toggle`.
    NavToggle,
    /// `#nav-menu`.
    NavMenu,
    /// First `.nav-link` inside `#nav-menu`.
    FirstMenuLink,
    /// `#theme-toggle`'s icon child.
    ThemeIcon,
    /// The n-th `.nav-link`.
    NavLink(usize),
    /// The n-th `.skill-progress` bar.
    SkillBar(usize),
    /// The n-th fade/slide reveal element.
    Reveal(usize),
    /// The n-th `.project-card`.
    ProjectCard(usize),
    /// The n-th top-level page region animated at entrance.
    PageRegion(usize),
    /// A live notification.
    Notification(NotificationId),
}

/// One DOM side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add (`on`) or remove a class.
    SetClass { target: Target, class: &'static str, on: bool },
    /// Set an inline style property.
    SetStyle { target: Target, property: &'static str, value: String },
    /// Move keyboard focus.
    Focus(Target),
    /// Write the theme attribute on `<html>`.
    SetThemeAttribute(&'static str),
    /// Replace the theme icon's class list.
    SetIconClass(&'static str),
    /// Stop observing a reveal element.
    Unobserve(Target),
    /// Scroll the window to `top`.
    ScrollTo { top: f64, smooth: bool },
    /// Push `#id` onto the history stack without navigating.
    PushHash(String),
    /// Create a notification element with `message`.
    ShowNotification { id: NotificationId, message: String },
    /// Remove a notification element if it is still attached.
    RemoveNotification(NotificationId),
    /// Save a text file through a transient anchor.
    Download { file_name: String, contents: String },
    /// Write `text` to the clipboard; report success back to the core.
    CopyToClipboard { text: String },
    /// Insert `<link rel="preload" as="style">` for `href`.
    PreloadStylesheet { href: String },
    /// Apply `effect` after `delay_ms`.
    Later { delay_ms: u32, effect: Box<Effect> },
}

impl Effect {
    #[must_use]
    pub fn class(target: Target, class: &'static str, on: bool) -> Self {
        Self::SetClass { target, class, on }
    }

    #[must_use]
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    /// Defer `self` by `delay_ms`.
    #[must_use]
    pub fn after(self, delay_ms: u32) -> Self {
        Self::Later { delay_ms, effect: Box::new(self) }
    }
}
