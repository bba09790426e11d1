//! Scroll progress of an element through a viewport interval.
//!
//! The interval is described by two lines across the viewport, both given as
//! fractions of the viewport height measured from its top edge:
//!
//! - the **start line**: progress begins once the element's top edge reaches it
//! - the **end line**: progress completes once the element's bottom edge reaches it
//!
//! ```text
//!  0.0 ┌──────────────┐
//!      │              │  ← element below start line: t = 0
//! start├ ─ ─ ─ ─ ─ ─ ─┤
//!      │   ┌──────┐   │
//!      │   │ elem │   │  ← straddling: 0 < t < 1
//!      │   └──────┘   │
//!  end ├ ─ ─ ─ ─ ─ ─ ─┤
//!  1.0 └──────────────┘
//! ```

/// Snapshot of an element's vertical position relative to the viewport.
///
/// Read fresh on every update and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Top edge of the element, relative to the top of the viewport
    pub element_top: f32,
    /// Bottom edge of the element, relative to the top of the viewport
    pub element_bottom: f32,
    /// Height of the viewport the lines are measured against
    pub viewport_height: f32,
}

impl Geometry {
    pub fn new(element_top: f32, element_bottom: f32, viewport_height: f32) -> Self {
        Self {
            element_top,
            element_bottom,
            viewport_height,
        }
    }

    /// Progress of this geometry through the `[start, end]` interval.
    pub fn progress(&self, start: f32, end: f32) -> f32 {
        compute_progress(
            self.element_top,
            self.element_bottom,
            self.viewport_height,
            start,
            end,
        )
    }
}

/// Compute the scroll progress of an element in `[0, 1]`.
///
/// `start` and `end` are fractions of `viewport_height`. Returns exactly `0.0`
/// while the element's top edge is still below the start line and exactly
/// `1.0` once its bottom edge has passed the end line.
///
/// A non-positive (or non-finite) viewport height yields `0.0`.
pub fn compute_progress(
    element_top: f32,
    element_bottom: f32,
    viewport_height: f32,
    start: f32,
    end: f32,
) -> f32 {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return 0.0;
    }

    let start_line = start * viewport_height;
    let end_line = end * viewport_height;

    // Signed distance of the leading edge from the start line (positive = not reached yet)
    let a = element_top - start_line;
    // Signed distance of the trailing edge from the end line
    let b = element_bottom - end_line;

    if a.is_nan() || a > 0.0 {
        return 0.0;
    }
    // Also covers a == b == 0 (element collapsed onto a single start/end line)
    if b.is_nan() || b <= 0.0 {
        return 1.0;
    }

    // a <= 0 < b, so b - a >= b > 0 and the ratio lies in [0, 1)
    -a / (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_before_interval_is_zero() {
        // Element starts below the viewport bottom, interval 0..1
        assert_eq!(compute_progress(900.0, 1100.0, 800.0, 1.0, 0.0), 0.0);
        assert_eq!(compute_progress(10.0, 50.0, 800.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_after_interval_is_one() {
        assert_eq!(compute_progress(-300.0, -100.0, 800.0, 1.0, 0.0), 1.0);
        // Bottom edge exactly on the end line counts as finished
        assert_eq!(compute_progress(-200.0, 0.0, 800.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_linear_inside_interval() {
        // Full-viewport pass: start line at the bottom, end line at the top.
        // a = 600 - 800 = -200, b = 800 - 0 = 800 -> t = 200 / 1000
        let t = compute_progress(600.0, 800.0, 800.0, 1.0, 0.0);
        assert!(approx_eq(t, 0.2));

        let t = compute_progress(-100.0, 100.0, 800.0, 1.0, 0.0);
        // a = -900, b = 100 -> 900 / 1000
        assert!(approx_eq(t, 0.9));
    }

    #[test]
    fn test_start_line_touch_is_zero() {
        // Top edge exactly on the start line: a = 0, b > 0
        assert_eq!(compute_progress(400.0, 600.0, 800.0, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_degenerate_single_line() {
        // start == end and the element collapses onto the line: a == b == 0
        assert_eq!(compute_progress(400.0, 400.0, 800.0, 0.5, 0.5), 1.0);

        // Straddling the single line still interpolates
        let t = compute_progress(300.0, 500.0, 800.0, 0.5, 0.5);
        assert!(approx_eq(t, 0.5));
    }

    #[test]
    fn test_zero_viewport_is_zero() {
        assert_eq!(compute_progress(-100.0, 100.0, 0.0, 0.0, 1.0), 0.0);
        assert_eq!(compute_progress(-100.0, 100.0, -5.0, 0.0, 1.0), 0.0);
        assert_eq!(compute_progress(-100.0, 100.0, f32::NAN, 0.0, 1.0), 0.0);
    }

    /// Scroll an element of `height` up through an 800px viewport and check
    /// progress stays in range, never decreases and finishes at exactly 1.
    fn assert_monotonic_sweep(start: f32, end: f32, height: f32) {
        let mut previous = 0.0;
        let mut top = 1000.0;
        while top > -2500.0 {
            let t = compute_progress(top, top + height, 800.0, start, end);
            assert!((0.0..=1.0).contains(&t), "t = {} out of range", t);
            assert!(
                t >= previous,
                "progress decreased: {} -> {} ({}..{}, h={})",
                previous,
                t,
                start,
                end,
                height
            );
            previous = t;
            top -= 7.5;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_monotonic_while_scrolling_up() {
        // Lines crossed in reverse: enters at the bottom, finishes at the top
        assert_monotonic_sweep(0.9, 0.1, 120.0);
        // start <= end: tall elements interpolate
        assert_monotonic_sweep(0.0, 1.0, 1200.0);
        assert_monotonic_sweep(0.25, 0.75, 600.0);
    }

    #[test]
    fn test_short_element_steps_from_zero_to_one() {
        // Shorter than (end - start) * vh: the bottom edge is already past the
        // end line when the top edge reaches the start line
        assert_monotonic_sweep(0.2, 0.8, 120.0);
        assert_eq!(compute_progress(161.0, 281.0, 800.0, 0.2, 0.8), 0.0);
        assert_eq!(compute_progress(160.0, 280.0, 800.0, 0.2, 0.8), 1.0);
    }

    #[test]
    fn test_geometry_progress_matches_free_function() {
        let geometry = Geometry::new(600.0, 800.0, 800.0);
        assert_eq!(
            geometry.progress(1.0, 0.0),
            compute_progress(600.0, 800.0, 800.0, 1.0, 0.0)
        );
    }
}
