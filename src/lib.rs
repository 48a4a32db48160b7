//! # folio
//!
//! WASM enhancement layer for a static portfolio page. It attaches behavior
//! to existing markup: mobile navigation, a persisted light/dark theme,
//! scroll-driven navbar and active-link state, one-shot reveal animations,
//! smooth in-page navigation, and transient notifications.
//!
//! All decisions live in [`controller::PageCore`], which turns events into
//! [`effect::Effect`]s and is tested natively. The `hydrate` feature adds the
//! browser host ([`dom`]) and the `wasm_bindgen(start)` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Page-lifetime state and event handlers |
//! | [`effect`] | DOM side effects returned to the host |
//! | [`config`] | Embedded JSON configuration with stock defaults |
//! | [`theme`] | Light/dark value and initial resolution |
//! | [`storage`] | Best-effort preference storage |
//! | [`sections`] | Section geometry and scroll-based active lookup |
//! | [`links`] | Anchor, external host and `mailto:` helpers |
//! | [`debounce`] | Ticketed trailing-edge debounce |
//! | [`consts`] | Timings, thresholds and document contract names |
//! | [`error`] | Shared error type |

pub mod config;
pub mod consts;
pub mod controller;
pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod effect;
pub mod error;
pub mod links;
pub mod sections;
pub mod storage;
pub mod theme;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point: logging, panic hook, then the page controller.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        log::warn!("console logger already installed: {err}");
    }
    log::set_max_level(log::LevelFilter::Info);

    let config = config::PageConfig::from_json_or_default(dom::embedded_config().as_deref());
    log::set_max_level(config.level().to_level_filter());
    dom::install(config);
}
