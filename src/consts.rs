//! Shared constants for the page controller.
//!
//! Timings here are paired with CSS transition durations in the page
//! stylesheet. Change both together.

// ── Timing (milliseconds) ───────────────────────────────────────

/// Delay before focusing the first menu link, covering the open transition.
pub const MENU_FOCUS_DELAY_MS: u32 = 100;

/// Trailing debounce window for scroll handling (~60 fps).
pub const SCROLL_DEBOUNCE_MS: u32 = 16;

/// Delay before a new notification slides in.
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;

/// How long a notification stays before sliding out.
pub const NOTIFICATION_DWELL_MS: u32 = 3000;

/// Slide-out duration; the element is removed once it elapses.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Per-bar stagger for the skill-bar reveal.
pub const SKILL_STAGGER_MS: u32 = 100;

/// Per-region stagger for the page entrance fade.
pub const ENTRANCE_STAGGER_MS: u32 = 100;

/// Delay before scrolling to the URL hash on load or hash change.
pub const HASH_LANDING_DELAY_MS: u32 = 100;

// ── Geometry (CSS pixels) ───────────────────────────────────────

/// Scroll offset past which the navbar gets its `scrolled` class.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Navbar allowance subtracted from section tops when polling for the active section.
pub const SECTION_ALLOWANCE_PX: f64 = 150.0;

/// Extra gap left above a section after an in-page scroll.
pub const SCROLL_GUTTER_PX: f64 = 20.0;

/// Lift applied to a hovered project card.
pub const CARD_LIFT_PX: f64 = 8.0;

// ── Visibility thresholds ───────────────────────────────────────

/// Visible fraction of the skills region that starts the bar reveal.
pub const SKILLS_THRESHOLD: f64 = 0.3;

/// Visible fraction of a fade/slide element that reveals it.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Visible fraction of a section inside the centered band that activates its link.
pub const SECTION_THRESHOLD: f64 = 0.3;

/// Root margin shrinking the viewport to its middle 60%.
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -20% 0px";

// ── Document contract ───────────────────────────────────────────

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-color-scheme";

/// Local storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Marker class for open menus and active nav links.
pub const ACTIVE_CLASS: &str = "active";

/// Marker class for the navbar once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Marker class for revealed fade/slide elements.
pub const VISIBLE_CLASS: &str = "visible";

/// Class of the transient notification element.
pub const NOTIFICATION_CLASS: &str = "notification";

/// Inline style of a freshly created notification, parked off-screen right.
pub const NOTIFICATION_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background: var(--color-success); color: white; padding: 1rem 2rem; \
    border-radius: var(--radius-lg); box-shadow: var(--shadow-lg); z-index: 10000; \
    transform: translateX(100%); transition: transform 0.3s ease; \
    font-weight: var(--font-weight-medium);";

/// Transition applied to page regions during the entrance fade.
pub const ENTRANCE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Stylesheets hinted for preload at startup.
pub const PRELOAD_STYLESHEETS: [&str; 2] = [
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap",
];

/// Default file name of the synthesized resume.
pub const RESUME_FILE_NAME: &str = "Mukesh_Biswas_Resume.txt";

/// Default placeholder contents of the synthesized resume.
pub const RESUME_CONTENTS: &str = "Mukesh Biswas - Staff Technical Writer Resume\n\n\
    This is a placeholder resume file. Please replace with actual resume PDF.";
