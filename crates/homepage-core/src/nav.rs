//! Scroll-driven navigation: which section is current, parallax offsets and
//! the mobile menu toggle.

use crate::constants::{NAV_SCROLL_OFFSET, PARALLAX_DEFAULT_SPEED};

/// Layout of one page section as measured in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the reader is in. Later sections win when ranges overlap.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            scroll_y >= s.top - NAV_SCROLL_OFFSET && scroll_y < s.top + s.height - NAV_SCROLL_OFFSET
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link with this `href` should be highlighted.
#[inline]
pub fn link_is_active(href: Option<&str>, active: Option<&str>) -> bool {
    match (href, active) {
        (Some(h), Some(id)) => h.strip_prefix('#') == Some(id),
        _ => false,
    }
}

/// Parse a `data-speed` attribute; missing, invalid or zero falls back to the default.
/// A leading number is enough, so `"0.5px"` reads as `0.5`.
pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(leading_number)
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(PARALLAX_DEFAULT_SPEED)
}

/// Longest decimal prefix of `s` after leading whitespace, if any.
pub fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    let mut has_digits = int_end > end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        if frac_end > int_end + 1 || has_digits {
            has_digits |= frac_end > int_end + 1;
            mantissa_end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

#[inline]
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
