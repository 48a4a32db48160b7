//! Browser host for [`PageCore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Locates the page's named regions once, feeds DOM events and observer
//! callbacks into the core, and applies the returned effects. Delayed effects
//! run on `gloo-timers` timeouts that are never cancelled. All closures live
//! for the page lifetime and are leaked with `Closure::forget`.
//!
//! Each feature installs independently: a feature whose setup fails is logged
//! and skipped while the rest still wire up.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Clipboard, Document, Element, ErrorEvent, Event, EventTarget, HtmlAnchorElement, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, NodeList, ScrollBehavior, ScrollToOptions,
    Window,
};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::consts::{NOTIFICATION_CLASS, NOTIFICATION_STYLE, THEME_ATTRIBUTE};
use crate::controller::{PageCore, PageOutline, load_already_fired};
use crate::effect::{Effect, NotificationId, Target};
use crate::error::PageError;
use crate::links::{external_link_patch, fragment_id};
use crate::sections::SectionBox;
use crate::storage::LocalStore;

const SEL_DOWNLOAD: &str = "#download-resume";
const SEL_NAV_TOGGLE: &str = "#nav-toggle";
const SEL_NAV_MENU: &str = "#nav-menu";
const SEL_NAV_LINKS: &str = ".nav-link";
const SEL_FIRST_MENU_LINK: &str = "#nav-menu .nav-link";
const SEL_THEME_TOGGLE: &str = "#theme-toggle";
const SEL_THEME_ICON: &str = "#theme-toggle i";
const SEL_NAVBAR: &str = "#navbar";
const SEL_SECTIONS: &str = "section[id]";
const SEL_SKILLS: &str = "#skills";
const SEL_SKILL_BARS: &str = ".skill-progress";
const SEL_REVEALS: &str = ".fade-in, .slide-in-left, .slide-in-right";
const SEL_CARDS: &str = ".project-card";
const SEL_REGIONS: &str = ".hero, .about, .skills, .experience, .projects, .contact";
const SEL_EMAIL: &str = ".contact-item a[href^=\"mailto:\"]";
const SEL_HASH_LINK: &str = "a[href^=\"#\"]";
const SEL_HTTP_LINKS: &str = "a[href^=\"http\"]";

type Install = fn(&Rc<Host>) -> Result<(), PageError>;

/// Text of the embedded `<script id="folio-config">`, if the page has one.
#[must_use]
pub fn embedded_config() -> Option<String> {
    web_sys::window()?.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

/// Install the controller once the markup is available.
pub fn install(config: PageConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; page controller not installed");
        return;
    };
    if document.ready_state() != "loading" {
        bind_and_log(config);
        return;
    }
    let mut pending = Some(config);
    let wired = listen(&document, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            bind_and_log(config);
        }
    });
    if let Err(err) = wired {
        log::error!("page controller not installed: {err}");
    }
}

fn bind_and_log(config: PageConfig) {
    match Host::bind(config) {
        Ok(host) => host.install_features(),
        Err(err) => log::error!("page controller not installed: {err}"),
    }
}

// =============================================================
// Host
// =============================================================

struct Elements {
    navbar: Option<HtmlElement>,
    nav_toggle: Option<HtmlElement>,
    nav_menu: Option<Element>,
    first_menu_link: Option<HtmlElement>,
    theme_toggle: Option<Element>,
    nav_links: Vec<Element>,
    sections: Vec<HtmlElement>,
    skills: Option<Element>,
    skill_bars: Vec<HtmlElement>,
    reveals: Vec<Element>,
    cards: Vec<HtmlElement>,
    regions: Vec<HtmlElement>,
    download: Option<Element>,
    email: Option<Element>,
}

impl Elements {
    fn locate(document: &Document) -> Self {
        Self {
            navbar: query_as(document, SEL_NAVBAR),
            nav_toggle: query_as(document, SEL_NAV_TOGGLE),
            nav_menu: query_as(document, SEL_NAV_MENU),
            first_menu_link: query_as(document, SEL_FIRST_MENU_LINK),
            theme_toggle: query_as(document, SEL_THEME_TOGGLE),
            nav_links: query_all(document, SEL_NAV_LINKS),
            sections: query_all(document, SEL_SECTIONS),
            skills: query_as(document, SEL_SKILLS),
            skill_bars: query_all(document, SEL_SKILL_BARS),
            reveals: query_all(document, SEL_REVEALS),
            cards: query_all(document, SEL_CARDS),
            regions: query_all(document, SEL_REGIONS),
            download: query_as(document, SEL_DOWNLOAD),
            email: query_as(document, SEL_EMAIL),
        }
    }

    fn outline(&self) -> PageOutline {
        PageOutline {
            nav_hrefs: self.nav_links.iter().map(|l| l.get_attribute("href").unwrap_or_default()).collect(),
            skill_levels: self.skill_bars.iter().map(|b| b.get_attribute("data-level")).collect(),
            reveal_count: self.reveals.len(),
            region_count: self.regions.len(),
            menu_has_link: self.first_menu_link.is_some(),
        }
    }
}

struct Host {
    window: Window,
    document: Document,
    els: Elements,
    core: RefCell<PageCore<LocalStore>>,
    notifications: RefCell<HashMap<NotificationId, HtmlElement>>,
    reveal_observer: RefCell<Option<IntersectionObserver>>,
}

impl Host {
    fn bind(config: PageConfig) -> Result<Rc<Self>, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::missing("window"))?;
        let document = window.document().ok_or_else(|| PageError::missing("document"))?;
        let els = Elements::locate(&document);
        let outline = els.outline();
        log::debug!(
            "bound {} nav links, {} sections, {} skill bars, {} reveals, {} cards",
            els.nav_links.len(),
            els.sections.len(),
            els.skill_bars.len(),
            els.reveals.len(),
            els.cards.len()
        );
        let core = PageCore::new(config, LocalStore, outline);
        Ok(Rc::new(Self {
            window,
            document,
            els,
            core: RefCell::new(core),
            notifications: RefCell::new(HashMap::new()),
            reveal_observer: RefCell::new(None),
        }))
    }

    fn install_features(self: &Rc<Self>) {
        let features: [(&str, Install); 15] = [
            ("error capture", Self::install_error_capture),
            ("preload", Self::install_preload),
            ("resume download", Self::install_resume),
            ("mobile menu", Self::install_menu),
            ("theme toggle", Self::install_theme),
            ("scroll tracking", Self::install_scroll),
            ("section observer", Self::install_section_observer),
            ("skill bars", Self::install_skills),
            ("reveal", Self::install_reveal),
            ("in-page links", Self::install_in_page_links),
            ("project cards", Self::install_cards),
            ("email copy", Self::install_email),
            ("external links", Self::install_external_links),
            ("page entrance", Self::install_entrance),
            ("hash landing", Self::install_hash_landing),
        ];
        for (name, install) in features {
            match install(self) {
                Ok(()) => log::debug!("{name} installed"),
                Err(err) => log::error!("{name} not installed: {err}"),
            }
        }
        log::info!("page controller ready");
    }

    // --- Feature installers ---

    fn install_error_capture(self: &Rc<Self>) -> Result<(), PageError> {
        listen(&self.window, "error", |ev| match ev.dyn_ref::<ErrorEvent>() {
            Some(err) => log::error!(
                "uncaught error: {} ({}:{}:{})",
                err.message(),
                err.filename(),
                err.lineno(),
                err.colno()
            ),
            None => log::error!("uncaught error event: {}", ev.type_()),
        })
    }

    fn install_preload(self: &Rc<Self>) -> Result<(), PageError> {
        let effects = self.core.borrow().preload_hints();
        self.apply(effects);
        Ok(())
    }

    fn install_resume(self: &Rc<Self>) -> Result<(), PageError> {
        let Some(button) = &self.els.download else {
            return Ok(());
        };
        let host = Rc::clone(self);
        listen(button, "click", move |_| {
            let effects = host.core.borrow_mut().download_resume();
            host.apply(effects);
        })
    }

    fn install_menu(self: &Rc<Self>) -> Result<(), PageError> {
        for link in &self.els.nav_links {
            let host = Rc::clone(self);
            listen(link, "click", move |_| {
                let effects = host.core.borrow_mut().nav_link_clicked();
                host.apply(effects);
            })?;
        }
        let Some(toggle) = &self.els.nav_toggle else {
            return Ok(());
        };
        if self.els.nav_menu.is_none() {
            return Err(PageError::missing(SEL_NAV_MENU));
        }
        let host = Rc::clone(self);
        listen(toggle, "click", move |_| {
            let effects = host.core.borrow_mut().toggle_menu();
            host.apply(effects);
        })?;
        let host = Rc::clone(self);
        listen(&self.document, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let effects = host.core.borrow_mut().key_down(&key);
            host.apply(effects);
        })
    }

    fn install_theme(self: &Rc<Self>) -> Result<(), PageError> {
        let Some(toggle) = &self.els.theme_toggle else {
            return Ok(());
        };
        let attribute = self.document.document_element().and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
        let prefers_dark =
            matches!(self.window.match_media("(prefers-color-scheme: dark)"), Ok(Some(query)) if query.matches());
        let effects = self.core.borrow_mut().init_theme(attribute.as_deref(), prefers_dark);
        self.apply(effects);

        let host = Rc::clone(self);
        listen(toggle, "click", move |_| {
            let attribute = host.document.document_element().and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
            let effects = host.core.borrow_mut().toggle_theme(attribute.as_deref());
            host.apply(effects);
        })
    }

    fn install_scroll(self: &Rc<Self>) -> Result<(), PageError> {
        let host = Rc::clone(self);
        listen(&self.window, "scroll", move |_| {
            let ticket = host.core.borrow_mut().queue_scroll(host.scroll_y());
            let delay = host.core.borrow().config().timings.scroll_debounce_ms;
            let settled = Rc::clone(&host);
            Timeout::new(delay, move || settled.scroll_settled(ticket)).forget();
        })?;
        self.refresh_scroll_state();
        Ok(())
    }

    fn install_section_observer(self: &Rc<Self>) -> Result<(), PageError> {
        let (uses_observer, threshold, margin) = {
            let core = self.core.borrow();
            let visibility = &core.config().visibility;
            (
                core.config().active_section.uses_observer(),
                visibility.section_threshold,
                visibility.section_root_margin.clone(),
            )
        };
        if !uses_observer || self.els.sections.is_empty() {
            return Ok(());
        }
        let host = Rc::clone(self);
        let observer = observe(threshold, Some(&margin), move |entry, _| {
            let Some(id) = entry.target().get_attribute("id") else {
                return;
            };
            let effects = host.core.borrow_mut().section_visibility(&id, entry.is_intersecting());
            host.apply(effects);
        })?;
        for section in &self.els.sections {
            observer.observe(section);
        }
        Ok(())
    }

    fn install_skills(self: &Rc<Self>) -> Result<(), PageError> {
        let Some(skills) = &self.els.skills else {
            return Ok(());
        };
        if self.els.skill_bars.is_empty() {
            return Ok(());
        }
        let threshold = self.core.borrow().config().visibility.skills_threshold;
        let host = Rc::clone(self);
        let observer = observe(threshold, None, move |entry, _| {
            let effects = host.core.borrow_mut().skills_visibility(entry.is_intersecting());
            host.apply(effects);
        })?;
        observer.observe(skills);
        Ok(())
    }

    fn install_reveal(self: &Rc<Self>) -> Result<(), PageError> {
        if self.els.reveals.is_empty() {
            return Ok(());
        }
        let threshold = self.core.borrow().config().visibility.reveal_threshold;
        let host = Rc::clone(self);
        let observer = observe(threshold, None, move |entry, _| {
            let target = entry.target();
            let Some(index) = host.els.reveals.iter().position(|el| el.is_same_node(Some(&target))) else {
                return;
            };
            let effects = host.core.borrow_mut().reveal_visibility(index, entry.is_intersecting());
            host.apply(effects);
        })?;
        for el in &self.els.reveals {
            observer.observe(el);
        }
        *self.reveal_observer.borrow_mut() = Some(observer);
        Ok(())
    }

    fn install_in_page_links(self: &Rc<Self>) -> Result<(), PageError> {
        let host = Rc::clone(self);
        listen(&self.document, "click", move |ev| host.in_page_click(&ev))
    }

    fn install_cards(self: &Rc<Self>) -> Result<(), PageError> {
        for (index, card) in self.els.cards.iter().enumerate() {
            for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
                let host = Rc::clone(self);
                listen(card, event, move |_| {
                    let effects = host.core.borrow().card_hover(index, entered);
                    host.apply(effects);
                })?;
            }
        }
        Ok(())
    }

    fn install_email(self: &Rc<Self>) -> Result<(), PageError> {
        let Some(link) = &self.els.email else {
            return Ok(());
        };
        let host = Rc::clone(self);
        let link_for_cb = link.clone();
        listen(link, "click", move |_| {
            let href = link_for_cb.get_attribute("href").unwrap_or_default();
            let available = host.clipboard().is_some();
            let effects = host.core.borrow().email_clicked(&href, available);
            host.apply(effects);
        })
    }

    fn install_external_links(self: &Rc<Self>) -> Result<(), PageError> {
        let page_host = self.window.location().hostname().map_err(|e| PageError::js("location.hostname", &e))?;
        let mut hardened = 0_usize;
        for link in query_all::<Element>(&self.document, SEL_HTTP_LINKS) {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(patch) =
                external_link_patch(&href, &page_host, link.has_attribute("target"), link.has_attribute("rel"))
            else {
                continue;
            };
            link.set_attribute("target", patch.target).map_err(|e| PageError::js("set target", &e))?;
            link.set_attribute("rel", patch.rel).map_err(|e| PageError::js("set rel", &e))?;
            hardened += 1;
        }
        log::debug!("hardened {hardened} external links");
        Ok(())
    }

    fn install_entrance(self: &Rc<Self>) -> Result<(), PageError> {
        let effects = self.core.borrow().page_entrance();
        self.apply(effects);
        Ok(())
    }

    fn install_hash_landing(self: &Rc<Self>) -> Result<(), PageError> {
        if load_already_fired(&self.document.ready_state()) {
            self.land_on_hash();
            self.refresh_scroll_state();
        }
        let host = Rc::clone(self);
        listen(&self.window, "load", move |_| {
            host.land_on_hash();
            host.refresh_scroll_state();
        })?;
        let host = Rc::clone(self);
        listen(&self.window, "hashchange", move |_| host.land_on_hash())
    }

    // --- Event plumbing ---

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn navbar_height(&self) -> f64 {
        self.els.navbar.as_ref().map_or(0.0, |nav| f64::from(nav.offset_height()))
    }

    fn section_boxes(&self) -> Vec<SectionBox> {
        self.els
            .sections
            .iter()
            .map(|s| SectionBox::new(s.id(), f64::from(s.offset_top()), f64::from(s.offset_height())))
            .collect()
    }

    fn offset_top_of(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        el.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_top()))
    }

    fn scroll_settled(self: &Rc<Self>, ticket: u64) {
        let Some(y) = self.core.borrow_mut().take_scroll(ticket) else {
            return;
        };
        let sections = self.section_boxes();
        let effects = self.core.borrow_mut().scroll_tick(y, &sections);
        self.apply(effects);
    }

    fn refresh_scroll_state(self: &Rc<Self>) {
        let sections = self.section_boxes();
        let effects = self.core.borrow_mut().scroll_tick(self.scroll_y(), &sections);
        self.apply(effects);
    }

    fn land_on_hash(self: &Rc<Self>) {
        let hash = self.window.location().hash().unwrap_or_default();
        let target_top = fragment_id(&hash).and_then(|id| self.offset_top_of(id));
        let effects = self.core.borrow().hash_landing(&hash, target_top, self.navbar_height());
        self.apply(effects);
    }

    fn in_page_click(self: &Rc<Self>, ev: &Event) {
        let Some(origin) = ev.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
            return;
        };
        let Ok(Some(link)) = origin.closest(SEL_HASH_LINK) else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let target_top = fragment_id(&href).and_then(|id| self.offset_top_of(id));
        let click = self.core.borrow().in_page_link_clicked(&href, target_top, self.navbar_height());
        if click.prevent_default {
            ev.prevent_default();
        }
        self.apply(click.effects);
    }

    // --- Effects ---

    fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect) {
                log::warn!("effect not applied: {err}");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, effect: Effect) -> Result<(), PageError> {
        match effect {
            Effect::SetClass { target, class, on } => {
                let Some(el) = self.element(target) else {
                    return Ok(());
                };
                let list = el.class_list();
                let result = if on { list.add_1(class) } else { list.remove_1(class) };
                result.map_err(|e| PageError::js("classList", &e))
            }
            Effect::SetStyle { target, property, value } => {
                let Some(el) = self.element(target) else {
                    return Ok(());
                };
                let Some(el) = el.dyn_ref::<HtmlElement>() else {
                    return Ok(());
                };
                el.style().set_property(property, &value).map_err(|e| PageError::js("style", &e))
            }
            Effect::Focus(target) => {
                if let Some(el) = self.element(target).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) {
                    el.focus().map_err(|e| PageError::js("focus", &e))?;
                }
                Ok(())
            }
            Effect::SetThemeAttribute(value) => {
                let root = self.document.document_element().ok_or_else(|| PageError::missing("html"))?;
                root.set_attribute(THEME_ATTRIBUTE, value).map_err(|e| PageError::js("set theme", &e))
            }
            Effect::SetIconClass(class) => self.set_icon(class),
            Effect::Unobserve(target) => {
                if let (Some(observer), Some(el)) = (self.reveal_observer.borrow().as_ref(), self.element(target)) {
                    observer.unobserve(&el);
                }
                Ok(())
            }
            Effect::ScrollTo { top, smooth } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                self.window.scroll_to_with_scroll_to_options(&options);
                Ok(())
            }
            Effect::PushHash(hash) => {
                let history = self.window.history().map_err(|e| PageError::js("history", &e))?;
                history
                    .push_state_with_url(&JsValue::NULL, "", Some(&hash))
                    .map_err(|e| PageError::js("pushState", &e))
            }
            Effect::ShowNotification { id, message } => self.show_notification(id, &message),
            Effect::RemoveNotification(id) => {
                if let Some(el) = self.notifications.borrow_mut().remove(&id) {
                    el.remove();
                }
                Ok(())
            }
            Effect::Download { file_name, contents } => self.download(&file_name, &contents),
            Effect::CopyToClipboard { text } => {
                self.copy_to_clipboard(&text);
                Ok(())
            }
            Effect::PreloadStylesheet { href } => self.preload(&href),
            Effect::Later { delay_ms, effect } => {
                let host = Rc::clone(self);
                Timeout::new(delay_ms, move || host.apply(vec![*effect])).forget();
                Ok(())
            }
        }
    }

    fn element(&self, target: Target) -> Option<Element> {
        let els = &self.els;
        match target {
            Target::Navbar => els.navbar.clone().map(Into::into),
            Target::NavToggle => els.nav_toggle.clone().map(Into::into),
            Target::NavMenu => els.nav_menu.clone(),
            Target::FirstMenuLink => els.first_menu_link.clone().map(Into::into),
            Target::ThemeIcon => query_as(&self.document, SEL_THEME_ICON),
            Target::NavLink(i) => els.nav_links.get(i).cloned(),
            Target::SkillBar(i) => els.skill_bars.get(i).cloned().map(Into::into),
            Target::Reveal(i) => els.reveals.get(i).cloned(),
            Target::ProjectCard(i) => els.cards.get(i).cloned().map(Into::into),
            Target::PageRegion(i) => els.regions.get(i).cloned().map(Into::into),
            Target::Notification(id) => self.notifications.borrow().get(&id).cloned().map(Into::into),
        }
    }

    fn set_icon(&self, class: &str) -> Result<(), PageError> {
        if let Some(icon) = self.element(Target::ThemeIcon) {
            icon.set_class_name(class);
        } else if let Some(toggle) = &self.els.theme_toggle {
            toggle.set_inner_html(&format!("<i class=\"{class}\"></i>"));
        }
        Ok(())
    }

    fn body(&self) -> Result<HtmlElement, PageError> {
        self.document.body().ok_or_else(|| PageError::missing("body"))
    }

    fn show_notification(&self, id: NotificationId, message: &str) -> Result<(), PageError> {
        let el: HtmlElement = self
            .document
            .create_element("div")
            .map_err(|e| PageError::js("createElement", &e))?
            .unchecked_into();
        el.set_class_name(NOTIFICATION_CLASS);
        el.set_text_content(Some(message));
        el.set_attribute("style", NOTIFICATION_STYLE).map_err(|e| PageError::js("notification style", &e))?;
        self.body()?.append_child(&el).map_err(|e| PageError::js("append notification", &e))?;
        self.notifications.borrow_mut().insert(id, el);
        Ok(())
    }

    fn download(&self, file_name: &str, contents: &str) -> Result<(), PageError> {
        let anchor: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(|e| PageError::js("createElement", &e))?
            .unchecked_into();
        let encoded = String::from(js_sys::encode_uri_component(contents));
        anchor.set_href(&format!("data:text/plain;charset=utf-8,{encoded}"));
        anchor.set_download(file_name);
        let body = self.body()?;
        body.append_child(&anchor).map_err(|e| PageError::js("append anchor", &e))?;
        anchor.click();
        body.remove_child(&anchor).map_err(|e| PageError::js("remove anchor", &e))?;
        log::info!("resume download started: {file_name}");
        Ok(())
    }

    /// `navigator.clipboard`, which is `undefined` outside secure contexts.
    fn clipboard(&self) -> Option<Clipboard> {
        let navigator = self.window.navigator();
        match js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
            Ok(value) if !value.is_undefined() && !value.is_null() => Some(value.unchecked_into::<Clipboard>()),
            Ok(_) => None,
            Err(err) => {
                log::debug!("navigator.clipboard unreadable: {err:?}");
                None
            }
        }
    }

    fn copy_to_clipboard(self: &Rc<Self>, text: &str) {
        let Some(clipboard) = self.clipboard() else {
            log::debug!("clipboard unavailable; nothing copied");
            return;
        };
        let promise = clipboard.write_text(text);
        let host = Rc::clone(self);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    let effects = host.core.borrow_mut().clipboard_written();
                    host.apply(effects);
                }
                Err(err) => log::debug!("clipboard write rejected: {err:?}"),
            }
        });
    }

    fn preload(&self, href: &str) -> Result<(), PageError> {
        let head = self.document.head().ok_or_else(|| PageError::missing("head"))?;
        let link = self.document.create_element("link").map_err(|e| PageError::js("createElement", &e))?;
        for (name, value) in [("rel", "preload"), ("as", "style"), ("href", href)] {
            link.set_attribute(name, value).map_err(|e| PageError::js("preload link", &e))?;
        }
        head.append_child(&link).map_err(|e| PageError::js("append preload", &e))?;
        Ok(())
    }
}

// =============================================================
// Helpers
// =============================================================

fn query_as<T: JsCast + Clone>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<T>().cloned()),
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            None
        }
    }
}

fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Vec<T> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_nodes(&list),
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

fn collect_nodes<T: JsCast + Clone>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect()
}

/// Attach `handler` to `event` on `target` for the page lifetime.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| PageError::js("addEventListener", &e))?;
    cb.forget();
    Ok(())
}

/// Build an `IntersectionObserver` that calls `on_entry` per entry.
fn observe(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, PageError> {
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                on_entry(entry, &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        .map_err(|e| PageError::js("IntersectionObserver", &e))?;
    cb.forget();
    Ok(observer)
}
