//! Cumulative radar chart
//!
//! One closed polygon per selected profile over the six severity axes,
//! drawn on rings at 2, 4, 6, 8 and 10.

use super::svg;
use crate::dataset::{Dataset, Scores, MAX_SCORE};
use crate::error::{DashboardError, DashboardResult};
use serde::Serialize;
use std::fmt::Write;

/// Rings drawn and labelled on the radar
pub const RINGS: [u8; 5] = [2, 4, 6, 8, 10];

const LEGEND_WIDTH: f64 = 220.0;
const LABEL_MARGIN: f64 = 110.0;

/// One profile's polygon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub profile: String,
    pub color: String,
    pub scores: Scores,
}

/// Radar data for the selected profiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarView {
    pub axes: Vec<String>,
    pub series: Vec<RadarSeries>,
    max_score: u8,
}

impl RadarView {
    /// Collect score vectors for the named profiles, in the given order
    pub fn new<S: AsRef<str>>(dataset: &Dataset, profiles: &[S]) -> DashboardResult<Self> {
        let series = profiles
            .iter()
            .map(|name| {
                let name = name.as_ref();
                dataset
                    .profile(name)
                    .map(|p| RadarSeries {
                        profile: p.name.clone(),
                        color: p.color.clone(),
                        scores: std::array::from_fn(|axis| p.score(axis).unwrap_or(0)),
                    })
                    .ok_or_else(|| DashboardError::UnknownProfile(name.to_string()))
            })
            .collect::<DashboardResult<Vec<_>>>()?;

        Ok(RadarView {
            axes: dataset.axes().to_vec(),
            series,
            max_score: MAX_SCORE,
        })
    }

    /// Outer ring value; scores are drawn relative to it
    pub fn max_score(&self) -> u8 {
        self.max_score
    }

    /// Render as SVG; `size` is the side of the square plot area
    pub fn to_svg(&self, size: f64) -> String {
        let width = size + LEGEND_WIDTH;
        let cx = size / 2.0;
        let cy = size / 2.0;
        let radius = (size / 2.0 - LABEL_MARGIN).max(10.0);
        let axis_count = self.axes.len();

        let mut out = svg::open(width, size);
        out.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

        let point = |axis: usize, value: f64| {
            let angle = svg::spoke_angle(axis, axis_count);
            let r = radius * value / self.max_score as f64;
            (cx + r * angle.cos(), cy + r * angle.sin())
        };

        // Grid rings
        for ring in RINGS {
            let r = radius * ring as f64 / self.max_score as f64;
            let _ = write!(
                out,
                r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="#cccccc" stroke-width="1"/>"##,
                cx, cy, r
            );
            let _ = write!(
                out,
                r##"<text x="{:.1}" y="{:.1}" font-size="10" fill="#666666">{}</text>"##,
                cx + 3.0,
                cy - r - 2.0,
                ring
            );
        }

        // Spokes and axis labels
        for (i, axis) in self.axes.iter().enumerate() {
            let (x, y) = point(i, self.max_score as f64);
            let _ = write!(
                out,
                r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#cccccc" stroke-width="1"/>"##,
                cx, cy, x, y
            );

            let angle = svg::spoke_angle(i, axis_count);
            let lx = cx + (radius + 14.0) * angle.cos();
            let ly = cy + (radius + 14.0) * angle.sin();
            let anchor = if angle.cos() > 0.1 {
                "start"
            } else if angle.cos() < -0.1 {
                "end"
            } else {
                "middle"
            };
            let _ = write!(
                out,
                r##"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="{}" dominant-baseline="middle" fill="#333333">{}</text>"##,
                lx,
                ly,
                anchor,
                svg::escape(axis)
            );
        }

        // Profile polygons
        for series in &self.series {
            let points: Vec<String> = series
                .scores
                .iter()
                .enumerate()
                .map(|(i, &score)| {
                    let (x, y) = point(i, score.min(self.max_score) as f64);
                    format!("{:.1},{:.1}", x, y)
                })
                .collect();
            let color = svg::escape(&series.color);
            let _ = write!(
                out,
                r#"<polygon points="{}" fill="{}" fill-opacity="0.25" stroke="{}" stroke-width="2"><title>{}</title></polygon>"#,
                points.join(" "),
                color,
                color,
                svg::escape(&series.profile)
            );
        }

        // Legend
        for (i, series) in self.series.iter().enumerate() {
            let y = 30.0 + i as f64 * 24.0;
            let _ = write!(
                out,
                r#"<rect x="{:.1}" y="{:.1}" width="14" height="14" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="13" dominant-baseline="middle">{}</text>"#,
                size + 10.0,
                y - 7.0,
                svg::escape(&series.color),
                size + 30.0,
                y,
                svg::escape(&series.profile)
            );
        }

        out.push_str(svg::CLOSE);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Profile;

    #[test]
    fn test_series_follow_request_order() {
        let dataset = Dataset::builtin();
        let view = RadarView::new(&dataset, &["Schizophrénie", "TPB"]).unwrap();

        assert_eq!(view.axes.len(), 6);
        assert_eq!(view.series.len(), 2);
        assert_eq!(view.series[0].profile, "Schizophrénie");
        assert_eq!(view.series[0].scores, [6, 5, 4, 9, 5, 7]);
        assert_eq!(view.series[1].color, "#FF6F61");
    }

    #[test]
    fn test_scores_clamped_to_outer_ring() {
        let axes = ["A", "B", "C", "D", "E", "F"].map(String::from);
        let loud = Profile::new("Loud", [12, 10, 0, 3, 3, 3], "#123456");
        let dataset = Dataset::new(axes, vec![loud]);

        let view = RadarView::new(&dataset, &["Loud"]).unwrap();
        assert_eq!(view.max_score(), MAX_SCORE);
        assert_eq!(view.series[0].scores, [10, 10, 0, 3, 3, 3]);

        let svg = view.to_svg(400.0);
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_unknown_profile() {
        let dataset = Dataset::builtin();
        assert!(RadarView::new(&dataset, &["Inconnu"]).is_err());
    }

    #[test]
    fn test_svg_has_one_polygon_per_profile() {
        let dataset = Dataset::builtin();
        let view = RadarView::new(&dataset, &dataset.profile_names()).unwrap();
        let svg = view.to_svg(600.0);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 4);
        assert_eq!(svg.matches("<circle").count(), RINGS.len());
        assert!(svg.contains("Perception / cognition"));
        assert!(svg.contains("#FFA500"));
    }

    #[test]
    fn test_empty_selection_draws_grid_only() {
        let dataset = Dataset::builtin();
        let none: [&str; 0] = [];
        let view = RadarView::new(&dataset, &none).unwrap();
        let svg = view.to_svg(400.0);

        assert!(view.series.is_empty());
        assert_eq!(svg.matches("<polygon").count(), 0);
        assert_eq!(svg.matches("<line").count(), 6);
    }
}
