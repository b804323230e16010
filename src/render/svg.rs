//! Minimal SVG text helpers

use std::f64::consts::PI;

/// Escape text for use in SVG content or attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(crate) fn open(width: f64, height: f64) -> String {
    format!(
        r#"<svg width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" xmlns="http://www.w3.org/2000/svg" font-family="sans-serif">"#,
        w = width,
        h = height
    )
}

pub(crate) const CLOSE: &str = "</svg>";

/// Angle of spoke `index` out of `count`: first spoke points up, then clockwise
pub(crate) fn spoke_angle(index: usize, count: usize) -> f64 {
    -PI / 2.0 + 2.0 * PI * index as f64 / count as f64
}
