use super::*;

fn page() -> Vec<SectionBox> {
    vec![
        SectionBox::new("hero", 0.0, 600.0),
        SectionBox::new("about", 600.0, 500.0),
        SectionBox::new("skills", 1100.0, 700.0),
    ]
}

#[test]
fn top_of_page_is_hero() {
    assert_eq!(active_section_for_scroll(0.0, &page(), 150.0), Some("hero"));
}

#[test]
fn allowance_activates_a_section_early() {
    // about starts at 600; with 150px allowance it is active from 450.
    assert_eq!(active_section_for_scroll(449.0, &page(), 150.0), Some("hero"));
    assert_eq!(active_section_for_scroll(450.0, &page(), 150.0), Some("about"));
}

#[test]
fn range_end_is_exclusive() {
    // skills covers [950, 1650).
    assert_eq!(active_section_for_scroll(1649.0, &page(), 150.0), Some("skills"));
    assert_eq!(active_section_for_scroll(1650.0, &page(), 150.0), None);
}

#[test]
fn overlapping_ranges_pick_the_later_section() {
    let sections = vec![SectionBox::new("a", 0.0, 1000.0), SectionBox::new("b", 200.0, 100.0)];
    assert_eq!(active_section_for_scroll(100.0, &sections, 150.0), Some("b"));
    assert_eq!(active_section_for_scroll(200.0, &sections, 150.0), Some("a"));
}

#[test]
fn empty_page_has_no_active_section() {
    assert_eq!(active_section_for_scroll(10.0, &[], 150.0), None);
}
