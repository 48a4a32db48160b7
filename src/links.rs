//! Link classification: in-page anchors, external hosts, mail links.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// `target` value given to hardened external links.
pub const EXTERNAL_TARGET: &str = "_blank";

/// `rel` value given to hardened external links.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// The fragment id of an in-page anchor href (`"#projects"` → `"projects"`).
///
/// A bare `#` and non-fragment hrefs yield `None`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Host (without port or userinfo) of an absolute `http(s)` URL, lowercased.
#[must_use]
pub fn http_host(href: &str) -> Option<String> {
    let lower = href.trim().to_ascii_lowercase();
    let rest = lower.strip_prefix("https://").or_else(|| lower.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = if let Some(bracketed) = host_port.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };
    if host.is_empty() { None } else { Some(host.to_owned()) }
}

/// Attributes to add to an external link so the new page cannot reach the opener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkPatch {
    pub target: &'static str,
    pub rel: &'static str,
}

/// Decide whether the link at `href` needs hardening.
///
/// Only absolute `http(s)` links to a different host qualify, and only when
/// the author declared neither `target` nor `rel`; explicit choices are kept.
#[must_use]
pub fn external_link_patch(href: &str, page_host: &str, has_target: bool, has_rel: bool) -> Option<LinkPatch> {
    if has_target || has_rel {
        return None;
    }
    let host = http_host(href)?;
    if host.eq_ignore_ascii_case(page_host) {
        return None;
    }
    Some(LinkPatch { target: EXTERNAL_TARGET, rel: EXTERNAL_REL })
}

/// Address part of a `mailto:` href, without any `?subject=` style query.
#[must_use]
pub fn mailto_address(href: &str) -> Option<&str> {
    let rest = href.strip_prefix("mailto:")?;
    let address = rest.split('?').next().unwrap_or_default();
    if address.is_empty() { None } else { Some(address) }
}

/// Scroll offset that parks a target below the fixed navbar.
#[must_use]
pub fn scroll_target(target_top: f64, navbar_height: f64, gutter: f64) -> f64 {
    target_top - navbar_height - gutter
}
