#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// fragment_id
// =============================================================

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#projects"), Some("projects"));
}

#[test]
fn fragment_id_rejects_bare_hash_and_urls() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("/about#team"), None);
    assert_eq!(fragment_id("https://example.com"), None);
}

// =============================================================
// http_host
// =============================================================

#[test]
fn http_host_extracts_plain_host() {
    assert_eq!(http_host("https://github.com/someone").as_deref(), Some("github.com"));
    assert_eq!(http_host("http://Example.COM").as_deref(), Some("example.com"));
}

#[test]
fn http_host_drops_port_userinfo_query_and_fragment() {
    assert_eq!(http_host("https://user:pw@host.dev:8443/x").as_deref(), Some("host.dev"));
    assert_eq!(http_host("https://host.dev?x=1").as_deref(), Some("host.dev"));
    assert_eq!(http_host("https://host.dev#top").as_deref(), Some("host.dev"));
    assert_eq!(http_host("http://[::1]:8080/").as_deref(), Some("::1"));
}

#[test]
fn http_host_ignores_other_schemes() {
    assert_eq!(http_host("mailto:me@example.com"), None);
    assert_eq!(http_host("#contact"), None);
    assert_eq!(http_host("https://"), None);
}

// =============================================================
// external_link_patch
// =============================================================

#[test]
fn external_link_without_attributes_is_hardened() {
    let patch = external_link_patch("https://linkedin.com/in/x", "portfolio.dev", false, false).unwrap();
    assert_eq!(patch.target, "_blank");
    assert_eq!(patch.rel, "noopener noreferrer");
}

#[test]
fn external_link_with_either_attribute_is_left_alone() {
    assert_eq!(external_link_patch("https://linkedin.com", "portfolio.dev", true, false), None);
    assert_eq!(external_link_patch("https://linkedin.com", "portfolio.dev", false, true), None);
    assert_eq!(external_link_patch("https://linkedin.com", "portfolio.dev", true, true), None);
}

#[test]
fn same_host_link_is_left_alone() {
    assert_eq!(external_link_patch("https://portfolio.dev/blog", "portfolio.dev", false, false), None);
    assert_eq!(external_link_patch("https://PORTFOLIO.dev/blog", "portfolio.dev", false, false), None);
}

#[test]
fn subdomain_counts_as_a_different_host() {
    assert!(external_link_patch("https://blog.portfolio.dev", "portfolio.dev", false, false).is_some());
}

#[test]
fn relative_links_are_not_external() {
    assert_eq!(external_link_patch("/resume.pdf", "portfolio.dev", false, false), None);
    assert_eq!(external_link_patch("#about", "portfolio.dev", false, false), None);
}

// =============================================================
// mailto_address / scroll_target
// =============================================================

#[test]
fn mailto_address_strips_scheme_and_query() {
    assert_eq!(mailto_address("mailto:me@example.com"), Some("me@example.com"));
    assert_eq!(mailto_address("mailto:me@example.com?subject=Hi"), Some("me@example.com"));
    assert_eq!(mailto_address("mailto:"), None);
    assert_eq!(mailto_address("tel:123"), None);
}

#[test]
fn scroll_target_subtracts_navbar_and_gutter() {
    assert_eq!(scroll_target(1200.0, 70.0, 20.0), 1110.0);
    assert_eq!(scroll_target(0.0, 70.0, 20.0), -90.0);
}
