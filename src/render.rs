//! SVG assembly for complete face snapshots.
//!
//! Pure string building, no I/O. Layer order matches the widget: face
//! background, interval sectors, hour marks, hands, center dot, so
//! sectors sit above the background but below the marks and hands.

use crate::geometry::{BASE_OUTER_RADIUS, CANVAS_SIZE, CENTER, point_at};
use crate::theme::Theme;
use crate::types::ClockFrame;

/// Hand lengths and widths in canvas units.
const HOUR_HAND_LENGTH: f64 = 60.0;
const HOUR_HAND_WIDTH: f64 = 4.0;
const MINUTE_HAND_LENGTH: f64 = 80.0;
const MINUTE_HAND_WIDTH: f64 = 2.0;
const SECOND_HAND_LENGTH: f64 = 90.0;
const SECOND_HAND_WIDTH: f64 = 1.0;

/// Hour marks run radially inward from the rim.
const MARK_OUTER: f64 = BASE_OUTER_RADIUS;
const MARK_LENGTH: f64 = 10.0;

const CENTER_DOT_RADIUS: f64 = 5.0;

/// Render a frame as a standalone SVG document on the 200x200 canvas.
pub fn render_svg(frame: &ClockFrame, theme: &Theme) -> String {
    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 {size} {size}\">",
        size = CANVAS_SIZE,
    ));

    // Face background; the stroke straddles the radius, so pull it in
    // far enough to stay on the canvas
    let face_radius = CENTER - theme.face_stroke_width / 2.0;
    svg.push_str(&format!(
        "<circle cx=\"{CENTER}\" cy=\"{CENTER}\" r=\"{face_radius}\" fill=\"{}\" \
         stroke=\"{}\" stroke-width=\"{}\"/>",
        theme.face_fill, theme.face_stroke, theme.face_stroke_width,
    ));

    for sector in &frame.sectors {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            sector.path, sector.fill, sector.fill_opacity, sector.stroke, sector.stroke_width,
        ));
    }

    for hour in 0..12 {
        let angle = hour as f64 * 30.0;
        svg.push_str(&radial_line(angle, MARK_OUTER - MARK_LENGTH, MARK_OUTER, 2.0, &theme.mark_color));
    }

    svg.push_str(&radial_line(
        frame.hour_angle,
        0.0,
        HOUR_HAND_LENGTH,
        HOUR_HAND_WIDTH,
        &theme.hand_color,
    ));
    svg.push_str(&radial_line(
        frame.minute_angle,
        0.0,
        MINUTE_HAND_LENGTH,
        MINUTE_HAND_WIDTH,
        &theme.hand_color,
    ));
    svg.push_str(&radial_line(
        frame.second_angle,
        0.0,
        SECOND_HAND_LENGTH,
        SECOND_HAND_WIDTH,
        &theme.second_hand_color,
    ));

    svg.push_str(&format!(
        "<circle cx=\"{CENTER}\" cy=\"{CENTER}\" r=\"{CENTER_DOT_RADIUS}\" fill=\"{}\"/>",
        theme.center_dot_color,
    ));

    svg.push_str("</svg>");
    svg
}

/// A stroked line from `inner` to `outer` radius at `angle` degrees
/// clockwise from 12 o'clock.
fn radial_line(angle: f64, inner: f64, outer: f64, width: f64, color: &str) -> String {
    let (x1, y1) = point_at(inner, angle);
    let (x2, y2) = point_at(outer, angle);
    format!(
        "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{color}\" \
         stroke-width=\"{width}\" stroke-linecap=\"round\"/>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Interval, WallTime};

    fn sample_frame() -> ClockFrame {
        let intervals = vec![Interval {
            id: 1,
            start: "09:00".to_string(),
            end: "17:00".to_string(),
            color: "#ff0000".to_string(),
        }];
        ClockFrame::project(WallTime::new(10, 30, 45), &intervals)
    }

    #[test]
    fn document_is_well_formed_and_sized() {
        let svg = render_svg(&sample_frame(), &Theme::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 200 200\""));
    }

    #[test]
    fn layers_appear_in_widget_order() {
        let svg = render_svg(&sample_frame(), &Theme::default());
        let face = svg.find("#f8f8f8").expect("face");
        let sector = svg.find("#ff0000").expect("sector");
        let second_hand = svg.find("#f44336").expect("second hand");
        assert!(face < sector);
        assert!(sector < second_hand);
    }

    #[test]
    fn twelve_marks_three_hands_one_dot() {
        let svg = render_svg(&sample_frame(), &Theme::default());
        assert_eq!(svg.matches("<line ").count(), 15);
        assert_eq!(svg.matches("<circle ").count(), 2);
        assert_eq!(svg.matches("<path ").count(), 1);
    }

    #[test]
    fn theme_colors_flow_through() {
        let theme = Theme {
            second_hand_color: "#00bcd4".to_string(),
            ..Theme::default()
        };
        let svg = render_svg(&sample_frame(), &theme);
        assert!(svg.contains("#00bcd4"));
        assert!(!svg.contains("#f44336"));
    }

    #[test]
    fn sector_styling_is_fixed_by_geometry() {
        let svg = render_svg(&sample_frame(), &Theme::default());
        assert!(svg.contains("fill-opacity=\"0.7\""));
    }
}
