//! Page controller configuration.
//!
//! Defaults reproduce the stock page. A page may override any subset of
//! fields by embedding JSON in `<script type="application/json"
//! id="folio-config">`; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::PageError;

/// Element id of the embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Which mechanism decides the active navigation link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSectionSource {
    /// Visibility observer over a centered viewport band.
    #[default]
    Observer,
    /// Offset comparison on every debounced scroll tick.
    Polling,
    /// Both; whichever runs last wins.
    Both,
}

impl ActiveSectionSource {
    #[must_use]
    pub fn uses_observer(self) -> bool {
        matches!(self, Self::Observer | Self::Both)
    }

    #[must_use]
    pub fn uses_polling(self) -> bool {
        matches!(self, Self::Polling | Self::Both)
    }
}

/// Delays paired with CSS transition durations.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub menu_focus_delay_ms: u32,
    pub scroll_debounce_ms: u32,
    pub notification_enter_delay_ms: u32,
    pub notification_dwell_ms: u32,
    pub notification_exit_ms: u32,
    pub skill_stagger_ms: u32,
    pub entrance_stagger_ms: u32,
    pub hash_landing_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            menu_focus_delay_ms: MENU_FOCUS_DELAY_MS,
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
            notification_enter_delay_ms: NOTIFICATION_ENTER_DELAY_MS,
            notification_dwell_ms: NOTIFICATION_DWELL_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
            skill_stagger_ms: SKILL_STAGGER_MS,
            entrance_stagger_ms: ENTRANCE_STAGGER_MS,
            hash_landing_delay_ms: HASH_LANDING_DELAY_MS,
        }
    }
}

/// Pixel offsets used by scroll and hover behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub scrolled_threshold_px: f64,
    pub section_allowance_px: f64,
    pub scroll_gutter_px: f64,
    pub card_lift_px: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            section_allowance_px: SECTION_ALLOWANCE_PX,
            scroll_gutter_px: SCROLL_GUTTER_PX,
            card_lift_px: CARD_LIFT_PX,
        }
    }
}

/// Intersection thresholds and the section band margin.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub skills_threshold: f64,
    pub reveal_threshold: f64,
    pub section_threshold: f64,
    pub section_root_margin: String,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            skills_threshold: SKILLS_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
            section_threshold: SECTION_THRESHOLD,
            section_root_margin: SECTION_ROOT_MARGIN.to_owned(),
        }
    }
}

/// The downloadable placeholder resume.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResumeArtifact {
    pub file_name: String,
    pub contents: String,
}

impl Default for ResumeArtifact {
    fn default() -> Self {
        Self { file_name: RESUME_FILE_NAME.to_owned(), contents: RESUME_CONTENTS.to_owned() }
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub timings: Timings,
    pub geometry: Geometry,
    pub visibility: Visibility,
    pub active_section: ActiveSectionSource,
    pub theme_storage_key: String,
    pub resume: ResumeArtifact,
    pub preload_stylesheets: Vec<String>,
    /// `log` level name: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            geometry: Geometry::default(),
            visibility: Visibility::default(),
            active_section: ActiveSectionSource::default(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            resume: ResumeArtifact::default(),
            preload_stylesheets: PRELOAD_STYLESHEETS.iter().map(|url| (*url).to_owned()).collect(),
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an embedded JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw` if present, falling back to defaults on absence or error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}; using default page config");
                Self::default()
            }
        }
    }

    /// The configured log level, `Info` when unrecognized.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
