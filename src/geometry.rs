//! Annular-sector geometry for the clock face.
//!
//! This is the computational core of the crate: a pure projection from a
//! `{start, end}` time pair and a stacking index to an SVG path on the
//! 200x200 face canvas. It holds no state and never fails: malformed
//! times degrade to the 12 o'clock angle instead of erroring, so a bad
//! form submission can at worst draw a sector in the wrong place.
//!
//! Angles are measured in degrees, clockwise from 12 o'clock, on a
//! 12-hour face: "01:00" and "13:00" land on the same spot.

use serde::{Deserialize, Serialize};

/// Width and height of the face canvas in SVG user units.
pub const CANVAS_SIZE: f64 = 200.0;

/// Face center on both axes.
pub const CENTER: f64 = 100.0;

/// Outer radius of the first (index 0) interval ring.
pub const BASE_OUTER_RADIUS: f64 = 90.0;

/// Inner radius of the first (index 0) interval ring.
pub const BASE_INNER_RADIUS: f64 = 70.0;

/// Radius shrink per stacking step.
pub const RING_STEP: f64 = 4.0;

/// Floor for the outer radius; rings never shrink past this.
pub const MIN_OUTER_RADIUS: f64 = 75.0;

/// Floor for the inner radius.
pub const MIN_INNER_RADIUS: f64 = 55.0;

/// Spans at least this wide render as a closed annulus instead of an arc pair.
const FULL_CIRCLE_SPAN: f64 = 359.9;

const SECTOR_OPACITY: f64 = 0.7;
const SECTOR_STROKE: &str = "#333";
const SECTOR_STROKE_WIDTH: f64 = 1.0;

/// A renderable annular sector derived from one interval.
///
/// Recomputed on every render pass; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Sector {
    /// Degrees clockwise from 12 o'clock.
    pub start_angle: f64,
    /// Degrees clockwise from 12 o'clock; exceeds 360 for wrapped intervals.
    pub end_angle: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// SVG path data in absolute coordinates on the face canvas.
    pub path: String,
    /// Fill color, passed through from the interval unchanged.
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Convert an "HH:MM" time to degrees clockwise from 12 o'clock.
///
/// A string without a `':'` maps to angle 0, and a component that does not
/// parse as an unsigned integer contributes 0. Callers must not rely on
/// the fallback to signal an error; it is a display policy, not
/// validation.
///
/// ```
/// use dialface::geometry::time_to_angle;
///
/// assert_eq!(time_to_angle("09:00"), 270.0);
/// assert_eq!(time_to_angle("12:30"), 15.0);
/// assert_eq!(time_to_angle("garbage"), 0.0);
/// ```
pub fn time_to_angle(time: &str) -> f64 {
    let Some((hours, minutes)) = time.split_once(':') else {
        return 0.0;
    };
    let hours: u32 = hours.trim().parse().unwrap_or(0);
    let minutes: u32 = minutes.trim().parse().unwrap_or(0);
    ((hours % 12) * 60 + minutes) as f64 * 0.5
}

/// Canvas point at `radius` from the center, `angle` degrees clockwise
/// from 12 o'clock.
pub fn point_at(radius: f64, angle: f64) -> (f64, f64) {
    // Shift by -90 so angle 0 points up instead of right.
    let rad = (angle - 90.0).to_radians();
    (CENTER + radius * rad.cos(), CENTER + radius * rad.sin())
}

/// Compute the sector for one interval at the given stacking index.
///
/// Later-added intervals draw as progressively thinner, nested rings
/// until the radius floors are reached; past that they overlap at floor
/// thickness. An end at or before the start wraps across 12 o'clock, so
/// a same-time pair spans the whole face and renders as a full annulus.
pub fn compute_sector(start: &str, end: &str, fill: &str, stack_index: usize) -> Sector {
    let start_angle = time_to_angle(start);
    let mut end_angle = time_to_angle(end);

    if end_angle <= start_angle {
        end_angle += 360.0;
    }

    let shrink = RING_STEP * stack_index as f64;
    let outer_radius = (BASE_OUTER_RADIUS - shrink).max(MIN_OUTER_RADIUS);
    let inner_radius = (BASE_INNER_RADIUS - shrink).max(MIN_INNER_RADIUS);

    let path = if (end_angle - start_angle).abs() >= FULL_CIRCLE_SPAN {
        annulus_path(outer_radius, inner_radius)
    } else {
        arc_path(start_angle, end_angle, outer_radius, inner_radius)
    };

    Sector {
        start_angle,
        end_angle,
        outer_radius,
        inner_radius,
        path,
        fill: fill.to_string(),
        fill_opacity: SECTOR_OPACITY,
        stroke: SECTOR_STROKE.to_string(),
        stroke_width: SECTOR_STROKE_WIDTH,
    }
}

/// Ring covering the whole face.
///
/// A single arc command cannot represent a closed 360 degree sweep, so
/// each circle is drawn as two half arcs; the outer pair winds clockwise
/// and the inner pair counter-clockwise to cut the hole.
fn annulus_path(outer: f64, inner: f64) -> String {
    [
        format!("M {} {}", CENTER + outer, CENTER),
        format!("A {outer} {outer} 0 1 1 {} {}", CENTER - outer, CENTER),
        format!("A {outer} {outer} 0 1 1 {} {}", CENTER + outer, CENTER),
        format!("L {} {}", CENTER + inner, CENTER),
        format!("A {inner} {inner} 0 1 0 {} {}", CENTER - inner, CENTER),
        format!("A {inner} {inner} 0 1 0 {} {}", CENTER + inner, CENTER),
        "Z".to_string(),
    ]
    .join(" ")
}

/// Four-segment closed sector: outer arc, line inward, inner arc back,
/// line out to the start.
fn arc_path(start_angle: f64, end_angle: f64, outer: f64, inner: f64) -> String {
    let large_arc = if end_angle - start_angle > 180.0 { 1 } else { 0 };

    let (outer_start_x, outer_start_y) = point_at(outer, start_angle);
    let (outer_end_x, outer_end_y) = point_at(outer, end_angle);
    let (inner_start_x, inner_start_y) = point_at(inner, start_angle);
    let (inner_end_x, inner_end_y) = point_at(inner, end_angle);

    [
        format!("M {outer_start_x} {outer_start_y}"),
        format!("A {outer} {outer} 0 {large_arc} 1 {outer_end_x} {outer_end_y}"),
        format!("L {inner_end_x} {inner_end_y}"),
        format!("A {inner} {inner} 0 {large_arc} 0 {inner_start_x} {inner_start_y}"),
        "Z".to_string(),
    ]
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quarter_hours_map_to_cardinal_angles() {
        assert_eq!(time_to_angle("03:00"), 90.0);
        assert_eq!(time_to_angle("06:00"), 180.0);
        assert_eq!(time_to_angle("09:00"), 270.0);
    }

    #[test]
    fn midnight_and_noon_coincide_at_zero() {
        assert_eq!(time_to_angle("00:00"), 0.0);
        assert_eq!(time_to_angle("12:00"), 0.0);
    }

    #[test]
    fn malformed_times_fall_back_to_zero() {
        assert_eq!(time_to_angle(""), 0.0);
        assert_eq!(time_to_angle("abc"), 0.0);
        assert_eq!(time_to_angle("1230"), 0.0);
        assert_eq!(time_to_angle("ab:cd"), 0.0);
    }

    #[test]
    fn partial_garbage_keeps_the_parsable_component() {
        // "12:xy" parses hours but not minutes
        assert_eq!(time_to_angle("12:xy"), 0.0);
        assert_eq!(time_to_angle("3:xy"), 90.0);
        assert_eq!(time_to_angle("-1:30"), 15.0);
    }

    #[test]
    fn workday_interval_wraps_past_twelve() {
        let sector = compute_sector("09:00", "17:00", "#ff0000", 0);
        assert_eq!(sector.start_angle, 270.0);
        // 17:00 resolves to 150, at or before the start, so a turn is added
        assert_eq!(sector.end_angle, 510.0);
        assert_eq!(sector.outer_radius, 90.0);
        assert_eq!(sector.inner_radius, 70.0);
        // 240 degree span takes the long way around
        assert!(sector.path.contains("A 90 90 0 1 1"));
        assert!(sector.path.contains("A 70 70 0 1 0"));
        assert!(sector.path.ends_with("Z"));
        assert_eq!(sector.fill, "#ff0000");
        assert_eq!(sector.fill_opacity, 0.7);
    }

    #[test]
    fn short_interval_uses_small_arc() {
        let sector = compute_sector("12:00", "13:00", "#00ff00", 1);
        assert_eq!(sector.start_angle, 0.0);
        assert_eq!(sector.end_angle, 30.0);
        assert_eq!(sector.outer_radius, 86.0);
        assert_eq!(sector.inner_radius, 66.0);
        assert!(sector.path.contains("A 86 86 0 0 1"));
        assert!(sector.path.contains("A 66 66 0 0 0"));
    }

    #[test]
    fn same_time_interval_renders_full_annulus() {
        let sector = compute_sector("10:00", "10:00", "#0000ff", 0);
        assert_eq!(sector.end_angle - sector.start_angle, 360.0);
        // Two half arcs per circle, two circles
        assert_eq!(sector.path.matches("A ").count(), 4);
        assert!(sector.path.starts_with("M 190 100"));
        assert!(sector.path.contains("L 170 100"));
    }

    #[test]
    fn stacked_rings_nest_until_the_floor() {
        let expected = [(90.0, 70.0), (86.0, 66.0), (82.0, 62.0), (78.0, 58.0), (75.0, 55.0)];
        for (index, (outer, inner)) in expected.into_iter().enumerate() {
            let sector = compute_sector("01:00", "02:00", "#fff", index);
            assert_eq!(sector.outer_radius, outer, "outer at index {index}");
            assert_eq!(sector.inner_radius, inner, "inner at index {index}");
        }
        // Past the floor everything overlaps at floor thickness
        let deep = compute_sector("01:00", "02:00", "#fff", 10);
        assert_eq!(deep.outer_radius, 75.0);
        assert_eq!(deep.inner_radius, 55.0);
    }

    #[test]
    fn exact_half_turn_stays_small_arc() {
        // 00:00 -> 06:00 is exactly 180 degrees; the long-arc flag needs
        // a strictly greater span
        let sector = compute_sector("00:00", "06:00", "#fff", 0);
        assert!(sector.path.contains("A 90 90 0 0 1"));
    }

    proptest! {
        #[test]
        fn prop_valid_times_stay_in_range(hours in 0u8..24, minutes in 0u8..60) {
            let angle = time_to_angle(&format!("{hours:02}:{minutes:02}"));
            prop_assert!((0.0..360.0).contains(&angle));
        }

        #[test]
        fn prop_am_and_pm_share_the_face(hours in 0u8..12, minutes in 0u8..60) {
            let am = time_to_angle(&format!("{hours:02}:{minutes:02}"));
            let pm = time_to_angle(&format!("{:02}:{minutes:02}", hours + 12));
            prop_assert_eq!(am, pm);
        }

        #[test]
        fn prop_effective_span_is_positive_and_bounded(
            start_h in 0u8..24, start_m in 0u8..60,
            end_h in 0u8..24, end_m in 0u8..60,
        ) {
            let sector = compute_sector(
                &format!("{start_h:02}:{start_m:02}"),
                &format!("{end_h:02}:{end_m:02}"),
                "#abcdef",
                0,
            );
            let span = sector.end_angle - sector.start_angle;
            prop_assert!(span > 0.0);
            prop_assert!(span <= 360.0);
        }

        #[test]
        fn prop_rings_shrink_monotonically_and_never_invert(index in 0usize..32) {
            let sector = compute_sector("02:00", "04:00", "#fff", index);
            let next = compute_sector("02:00", "04:00", "#fff", index + 1);
            prop_assert!(sector.outer_radius >= 75.0);
            prop_assert!(sector.inner_radius >= 55.0);
            prop_assert!(next.outer_radius <= sector.outer_radius);
            prop_assert!(next.inner_radius <= sector.inner_radius);
            prop_assert!(sector.outer_radius - sector.inner_radius >= 15.0);
        }

        #[test]
        fn prop_paths_are_closed_and_nonempty(
            start_h in 0u8..24, start_m in 0u8..60,
            end_h in 0u8..24, end_m in 0u8..60,
            index in 0usize..8,
        ) {
            let sector = compute_sector(
                &format!("{start_h:02}:{start_m:02}"),
                &format!("{end_h:02}:{end_m:02}"),
                "#123456",
                index,
            );
            prop_assert!(sector.path.starts_with("M "));
            prop_assert!(sector.path.ends_with("Z"));
        }
    }
}
