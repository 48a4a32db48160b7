//! Error type shared by the controller and its browser host.

/// Error raised while installing or running a page feature.
///
/// None of these are surfaced to the visitor. Setup errors are logged per
/// feature and the remaining features still install; best-effort failures
/// (storage, clipboard) are logged at debug level and dropped.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A selector the feature needs matched nothing.
    #[error("required element missing: {selector}")]
    MissingElement { selector: String },
    /// A browser API call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
    /// Preference storage is unavailable or rejected the operation.
    #[error("preference storage unavailable: {0}")]
    Storage(String),
    /// The embedded page configuration is not valid JSON for `PageConfig`.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    /// Build a [`PageError::MissingElement`] for `selector`.
    #[must_use]
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

#[cfg(feature = "hydrate")]
impl PageError {
    /// Wrap a thrown `JsValue`, keeping its string form when it has one.
    #[must_use]
    pub fn js(context: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}
