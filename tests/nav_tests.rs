// Host-side tests for scroll spy, parallax and the mobile menu.

use homepage_core::nav::{
    active_section, leading_number, link_is_active, parallax_speed, parallax_transform,
    MobileMenu, SectionBounds,
};

fn sections() -> Vec<SectionBounds> {
    [("home", 0.0, 800.0), ("team", 800.0, 1200.0), ("research", 2000.0, 600.0)]
        .into_iter()
        .map(|(id, top, height)| SectionBounds {
            id: id.to_string(),
            top,
            height,
        })
        .collect()
}

#[test]
fn section_becomes_current_one_hundred_pixels_early() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0), Some("home"));
    assert_eq!(active_section(&s, 699.0), Some("home"));
    assert_eq!(active_section(&s, 700.0), Some("team"));
    assert_eq!(active_section(&s, 1899.0), Some("team"));
    assert_eq!(active_section(&s, 1900.0), Some("research"));
    assert_eq!(active_section(&s, 2499.0), Some("research"));
    assert_eq!(active_section(&s, 2500.0), None);
}

#[test]
fn later_section_wins_when_ranges_overlap() {
    let s = vec![
        SectionBounds {
            id: "outer".into(),
            top: 0.0,
            height: 2000.0,
        },
        SectionBounds {
            id: "inner".into(),
            top: 500.0,
            height: 300.0,
        },
    ];
    assert_eq!(active_section(&s, 450.0), Some("inner"));
    assert_eq!(active_section(&s, 1000.0), Some("outer"));
}

#[test]
fn no_sections_means_nothing_is_current() {
    assert_eq!(active_section(&[], 300.0), None);
}

#[test]
fn links_match_on_fragment() {
    assert!(link_is_active(Some("#team"), Some("team")));
    assert!(!link_is_active(Some("#team"), Some("home")));
    assert!(!link_is_active(Some("team"), Some("team")));
    assert!(!link_is_active(None, Some("team")));
    assert!(!link_is_active(Some("#team"), None));
}

#[test]
fn parallax_speed_falls_back_to_default() {
    assert_eq!(parallax_speed(Some("0.5")), 0.5);
    assert_eq!(parallax_speed(Some(" -0.2 ")), -0.2);
    assert_eq!(parallax_speed(None), 0.3);
    assert_eq!(parallax_speed(Some("")), 0.3);
    assert_eq!(parallax_speed(Some("fast")), 0.3);
    assert_eq!(parallax_speed(Some("0")), 0.3);
    assert_eq!(parallax_speed(Some("NaN")), 0.3);
    assert_eq!(parallax_speed(Some("inf")), 0.3);
}

#[test]
fn parallax_speed_reads_a_leading_number() {
    assert_eq!(parallax_speed(Some("0.5px")), 0.5);
    assert_eq!(parallax_speed(Some("  .25 slow")), 0.25);
    assert_eq!(parallax_speed(Some("2e-1x")), 0.2);
    assert_eq!(parallax_speed(Some("0px")), 0.3);
    assert_eq!(parallax_speed(Some("px0.5")), 0.3);
}

#[test]
fn leading_number_stops_at_the_first_non_numeric_char() {
    assert_eq!(leading_number("12.5abc"), Some(12.5));
    assert_eq!(leading_number("-3"), Some(-3.0));
    assert_eq!(leading_number("+4."), Some(4.0));
    assert_eq!(leading_number("1e"), Some(1.0));
    assert_eq!(leading_number("1e+2"), Some(100.0));
    assert_eq!(leading_number("1.2.3"), Some(1.2));
    assert_eq!(leading_number("."), None);
    assert_eq!(leading_number("-"), None);
    assert_eq!(leading_number("e5"), None);
    assert_eq!(leading_number(""), None);
}

#[test]
fn parallax_translates_by_a_fraction_of_scroll() {
    assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    assert_eq!(parallax_transform(200.0, 0.5), "translateY(100px)");
    assert_eq!(parallax_transform(100.0, -0.25), "translateY(-25px)");
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut menu = MobileMenu::default();
    assert!(!menu.open);
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.open);
    menu.close();
    assert!(!menu.open);
}
