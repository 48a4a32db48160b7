//! Page controller core: all page-lifetime state and event handling.
//!
//! ARCHITECTURE
//! ============
//! `PageCore` never touches the DOM. Each handler takes the event's inputs
//! (plus any layout the host measured) and returns the [`Effect`]s to apply.
//! The browser host in [`crate::dom`] owns the elements, wires listeners and
//! observers, and applies effects, scheduling [`Effect::Later`] on timers.
//!
//! INVARIANTS
//! ==========
//! - At most one nav link carries the `active` class.
//! - The skills latch and per-element reveal flags never reset.
//! - Every `notify` removes the previous notification first.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::consts::{ACTIVE_CLASS, ENTRANCE_TRANSITION, SCROLLED_CLASS, VISIBLE_CLASS};
use crate::debounce::{Debounce, Ticket};
use crate::effect::{Effect, NotificationId, Target};
use crate::links::{fragment_id, mailto_address, scroll_target};
use crate::sections::{SectionBox, active_section_for_scroll};
use crate::storage::PreferenceStore;
use crate::theme::{Theme, declared_theme, resolve_initial};

pub const RESUME_NOTICE: &str = "Resume download initiated!";
pub const EMAIL_COPIED_NOTICE: &str = "Email copied to clipboard!";

/// Whether the window `load` event has already fired for `ready_state`.
///
/// A controller bound after load must run its load-time work immediately.
#[must_use]
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Static shape of the page, captured once when the host binds elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOutline {
    /// `href` of each `.nav-link`, in document order.
    pub nav_hrefs: Vec<String>,
    /// `data-level` of each `.skill-progress`, in document order.
    pub skill_levels: Vec<Option<String>>,
    /// Number of fade/slide reveal elements.
    pub reveal_count: usize,
    /// Number of top-level page regions faded in at startup.
    pub region_count: usize,
    /// Whether `#nav-menu` contains a `.nav-link` to focus when opened.
    pub menu_has_link: bool,
}

/// Result of a click on an in-page anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkClick {
    /// Whether the host must call `preventDefault` on the event.
    pub prevent_default: bool,
    pub effects: Vec<Effect>,
}

/// Controller state, generic over preference storage.
pub struct PageCore<S> {
    config: PageConfig,
    store: S,
    outline: PageOutline,
    theme: Theme,
    menu_open: bool,
    active_section: Option<String>,
    skills_animated: bool,
    revealed: Vec<bool>,
    last_scroll_y: f64,
    scroll: Debounce<f64>,
    notification: Option<NotificationId>,
    next_notification: NotificationId,
}

impl<S: PreferenceStore> PageCore<S> {
    #[must_use]
    pub fn new(config: PageConfig, store: S, outline: PageOutline) -> Self {
        let revealed = vec![false; outline.reveal_count];
        Self {
            config,
            store,
            outline,
            theme: Theme::default(),
            menu_open: false,
            active_section: None,
            skills_animated: false,
            revealed,
            last_scroll_y: 0.0,
            scroll: Debounce::new(),
            notification: None,
            next_notification: 1,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    #[must_use]
    pub fn skills_animated(&self) -> bool {
        self.skills_animated
    }

    #[must_use]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<NotificationId> {
        self.notification
    }

    // --- Theme ---

    /// Resolve and apply the initial theme.
    ///
    /// `attribute` is the current `data-color-scheme` on `<html>`, if any.
    /// A declared attribute is never rewritten, even one this crate does not
    /// recognise; only the icon follows it.
    pub fn init_theme(&mut self, attribute: Option<&str>, prefers_dark: bool) -> Vec<Effect> {
        let stored = match self.store.load(&self.config.theme_storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("theme preference unreadable: {err}");
                None
            }
        };
        self.theme = resolve_initial(attribute, stored.as_deref(), prefers_dark);
        log::debug!("initial theme {}", self.theme.as_str());

        let mut effects = Vec::with_capacity(2);
        if declared_theme(attribute).is_none() {
            effects.push(Effect::SetThemeAttribute(self.theme.as_str()));
        }
        effects.push(Effect::SetIconClass(self.theme.icon_class()));
        effects
    }

    /// Flip light/dark and persist the choice (best-effort).
    ///
    /// `attribute` is the document's `data-color-scheme` at click time, so a
    /// scheme changed by other scripts is flipped from what is on screen.
    pub fn toggle_theme(&mut self, attribute: Option<&str>) -> Vec<Effect> {
        self.theme = declared_theme(attribute).unwrap_or(self.theme).toggled();
        if let Err(err) = self.store.save(&self.config.theme_storage_key, self.theme.as_str()) {
            log::debug!("theme preference not saved: {err}");
        }
        log::debug!("theme -> {}", self.theme.as_str());
        vec![Effect::SetThemeAttribute(self.theme.as_str()), Effect::SetIconClass(self.theme.icon_class())]
    }

    // --- Mobile menu ---

    pub fn toggle_menu(&mut self) -> Vec<Effect> {
        self.menu_open = !self.menu_open;
        log::debug!("menu open: {}", self.menu_open);
        let mut effects = self.menu_class_effects();
        if self.menu_open && self.outline.menu_has_link {
            effects.push(Effect::Focus(Target::FirstMenuLink).after(self.config.timings.menu_focus_delay_ms));
        }
        effects
    }

    /// Any `.nav-link` click closes an open menu.
    pub fn nav_link_clicked(&mut self) -> Vec<Effect> {
        if !self.menu_open {
            return Vec::new();
        }
        self.menu_open = false;
        self.menu_class_effects()
    }

    /// Escape closes an open menu and hands focus back to the toggle.
    pub fn key_down(&mut self, key: &str) -> Vec<Effect> {
        if key != "Escape" || !self.menu_open {
            return Vec::new();
        }
        self.menu_open = false;
        let mut effects = self.menu_class_effects();
        effects.push(Effect::Focus(Target::NavToggle));
        effects
    }

    fn menu_class_effects(&self) -> Vec<Effect> {
        vec![
            Effect::class(Target::NavMenu, ACTIVE_CLASS, self.menu_open),
            Effect::class(Target::NavToggle, ACTIVE_CLASS, self.menu_open),
        ]
    }

    // --- Scroll ---

    /// Record a raw scroll event; the host redeems the ticket after the debounce window.
    pub fn queue_scroll(&mut self, scroll_y: f64) -> Ticket {
        self.scroll.push(scroll_y)
    }

    /// Redeem a debounce ticket; `None` when a newer scroll superseded it.
    pub fn take_scroll(&mut self, ticket: Ticket) -> Option<f64> {
        self.scroll.take(ticket)
    }

    /// Handle one debounced scroll tick.
    pub fn scroll_tick(&mut self, scroll_y: f64, sections: &[SectionBox]) -> Vec<Effect> {
        self.last_scroll_y = scroll_y;
        let scrolled = scroll_y > self.config.geometry.scrolled_threshold_px;
        let mut effects = vec![Effect::class(Target::Navbar, SCROLLED_CLASS, scrolled)];
        if self.config.active_section.uses_polling() {
            let active = active_section_for_scroll(scroll_y, sections, self.config.geometry.section_allowance_px);
            effects.extend(self.set_active(active.map(str::to_owned)));
        }
        effects
    }

    /// A section crossed the observer's threshold inside the centered band.
    pub fn section_visibility(&mut self, section_id: &str, intersecting: bool) -> Vec<Effect> {
        if !intersecting || !self.config.active_section.uses_observer() {
            return Vec::new();
        }
        self.set_active(Some(section_id.to_owned()))
    }

    fn set_active(&mut self, section: Option<String>) -> Vec<Effect> {
        if self.active_section != section {
            log::debug!("active section -> {section:?}");
        }
        let wanted = section.as_deref().map(|id| format!("#{id}"));
        let chosen = wanted.and_then(|href| self.outline.nav_hrefs.iter().position(|h| *h == href));
        self.active_section = section;
        (0..self.outline.nav_hrefs.len())
            .map(|i| Effect::class(Target::NavLink(i), ACTIVE_CLASS, chosen == Some(i)))
            .collect()
    }

    // --- Reveals ---

    /// The skills region crossed its threshold. Animates once per page load.
    pub fn skills_visibility(&mut self, intersecting: bool) -> Vec<Effect> {
        if !intersecting || self.skills_animated {
            return Vec::new();
        }
        self.skills_animated = true;
        let step = self.config.timings.skill_stagger_ms;
        let effects: Vec<Effect> = self
            .outline
            .skill_levels
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                let level = parse_level(raw.as_deref())?;
                Some(Effect::style(Target::SkillBar(i), "width", format!("{level}%")).after(stagger(i, step)))
            })
            .collect();
        log::debug!("skill bars revealed ({} animated)", effects.len());
        effects
    }

    /// A fade/slide element crossed its threshold. Reveals once, then unobserves.
    pub fn reveal_visibility(&mut self, index: usize, intersecting: bool) -> Vec<Effect> {
        if !intersecting {
            return Vec::new();
        }
        let Some(done) = self.revealed.get_mut(index) else {
            return Vec::new();
        };
        if *done {
            return Vec::new();
        }
        *done = true;
        vec![
            Effect::class(Target::Reveal(index), VISIBLE_CLASS, true),
            Effect::Unobserve(Target::Reveal(index)),
        ]
    }

    /// Startup fade of the top-level page regions, staggered in order.
    pub fn page_entrance(&self) -> Vec<Effect> {
        let step = self.config.timings.entrance_stagger_ms;
        let mut effects = Vec::with_capacity(self.outline.region_count * 5);
        for i in 0..self.outline.region_count {
            let target = Target::PageRegion(i);
            effects.push(Effect::style(target, "opacity", "0"));
            effects.push(Effect::style(target, "transform", "translateY(20px)"));
            effects.push(Effect::style(target, "transition", ENTRANCE_TRANSITION));
            effects.push(Effect::style(target, "opacity", "1").after(stagger(i, step)));
            effects.push(Effect::style(target, "transform", "translateY(0)").after(stagger(i, step)));
        }
        effects
    }

    // --- Navigation ---

    /// Click on an `a[href^="#"]`.
    ///
    /// `target_top` is the `offsetTop` of the element the fragment names, if
    /// it exists.
    #[must_use]
    pub fn in_page_link_clicked(&self, href: &str, target_top: Option<f64>, navbar_height: f64) -> LinkClick {
        if fragment_id(href).is_none() {
            return LinkClick::default();
        }
        let Some(top) = target_top else {
            return LinkClick { prevent_default: true, effects: Vec::new() };
        };
        let top = scroll_target(top, navbar_height, self.config.geometry.scroll_gutter_px);
        LinkClick {
            prevent_default: true,
            effects: vec![Effect::ScrollTo { top, smooth: true }, Effect::PushHash(href.to_owned())],
        }
    }

    /// Scroll to the URL hash target shortly after load or a hash change.
    #[must_use]
    pub fn hash_landing(&self, hash: &str, target_top: Option<f64>, navbar_height: f64) -> Vec<Effect> {
        let (Some(_), Some(top)) = (fragment_id(hash), target_top) else {
            return Vec::new();
        };
        let top = scroll_target(top, navbar_height, self.config.geometry.scroll_gutter_px);
        vec![Effect::ScrollTo { top, smooth: true }.after(self.config.timings.hash_landing_delay_ms)]
    }

    // --- Cards ---

    #[must_use]
    pub fn card_hover(&self, index: usize, entered: bool) -> Vec<Effect> {
        let value = if entered {
            format!("translateY(-{}px)", self.config.geometry.card_lift_px)
        } else {
            "translateY(0)".to_owned()
        };
        vec![Effect::style(Target::ProjectCard(index), "transform", value)]
    }

    // --- Resume / email / notifications ---

    pub fn download_resume(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::Download {
            file_name: self.config.resume.file_name.clone(),
            contents: self.config.resume.contents.clone(),
        }];
        effects.extend(self.notify(RESUME_NOTICE));
        effects
    }

    /// Click on the contact mail link. The mail client still opens.
    ///
    /// Without a clipboard API (insecure origins, older browsers) nothing is
    /// copied and no notification follows.
    #[must_use]
    pub fn email_clicked(&self, href: &str, clipboard_available: bool) -> Vec<Effect> {
        if !clipboard_available {
            log::debug!("clipboard unavailable; leaving {href} to the mail client");
            return Vec::new();
        }
        match mailto_address(href) {
            Some(address) => vec![Effect::CopyToClipboard { text: address.to_owned() }],
            None => Vec::new(),
        }
    }

    /// The host's clipboard write resolved successfully.
    pub fn clipboard_written(&mut self) -> Vec<Effect> {
        self.notify(EMAIL_COPIED_NOTICE)
    }

    /// Show a transient notification, replacing any current one.
    pub fn notify(&mut self, message: &str) -> Vec<Effect> {
        let id = self.next_notification;
        self.next_notification += 1;

        let timings = &self.config.timings;
        let target = Target::Notification(id);
        let mut effects = Vec::with_capacity(5);
        if let Some(previous) = self.notification.replace(id) {
            effects.push(Effect::RemoveNotification(previous));
        }
        effects.push(Effect::ShowNotification { id, message: message.to_owned() });
        effects.push(Effect::style(target, "transform", "translateX(0)").after(timings.notification_enter_delay_ms));
        effects.push(Effect::style(target, "transform", "translateX(100%)").after(timings.notification_dwell_ms));
        effects.push(
            Effect::RemoveNotification(id)
                .after(timings.notification_dwell_ms.saturating_add(timings.notification_exit_ms)),
        );
        effects
    }

    // --- Startup ---

    #[must_use]
    pub fn preload_hints(&self) -> Vec<Effect> {
        self.config
            .preload_stylesheets
            .iter()
            .map(|href| Effect::PreloadStylesheet { href: href.clone() })
            .collect()
    }
}

/// Parse a `data-level` percentage, clamped to `0..=100`.
fn parse_level(raw: Option<&str>) -> Option<f64> {
    let Ok(level) = raw?.trim().trim_end_matches('%').parse::<f64>() else {
        return None;
    };
    level.is_finite().then_some(level.clamp(0.0, 100.0))
}

fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}
