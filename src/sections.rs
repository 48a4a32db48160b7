//! Section geometry and scroll-offset based active-section lookup.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Layout snapshot of one `section[id]`, read fresh on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    /// `offsetTop` in CSS pixels.
    pub top: f64,
    /// `offsetHeight` in CSS pixels.
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// The section whose (allowance-shifted) range contains `scroll_y`.
///
/// Ranges are half-open. When ranges overlap the last section in document
/// order wins.
#[must_use]
pub fn active_section_for_scroll(scroll_y: f64, sections: &[SectionBox], allowance: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let start = s.top - allowance;
            scroll_y >= start && scroll_y < start + s.height
        })
        .map(|s| s.id.as_str())
}
