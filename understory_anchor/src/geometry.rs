// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle helpers shared by the boundary resolver and the placement solver.
//!
//! All coordinates are `f64` pixels in one fixed space (document or viewport).
//! Nothing here rounds; rounding happens once, when a [`LayerStyle`](crate::LayerStyle) is emitted.
//! Rectangles are expected to be finite (no NaNs).

use kurbo::{Rect, Vec2};

/// Intersection of two rectangles.
///
/// Disjoint inputs produce a zero-area rectangle pinned to the overlap's
/// would-be corner, so [`is_empty`] and [`area`] report them consistently.
pub fn intersect(a: Rect, b: Rect) -> Rect {
    let (a, b) = (normalize(a), normalize(b));
    let x0 = a.x0.max(b.x0);
    let y0 = a.y0.max(b.y0);
    let x1 = a.x1.min(b.x1).max(x0);
    let y1 = a.y1.min(b.y1).max(y0);
    Rect::new(x0, y0, x1, y1)
}

/// True if `inner` lies entirely within `outer` (edges may touch).
pub fn contains_rect(outer: Rect, inner: Rect) -> bool {
    let (outer, inner) = (normalize(outer), normalize(inner));
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// Translate a rectangle by `delta`.
#[inline]
pub fn translate(rect: Rect, delta: Vec2) -> Rect {
    rect + delta
}

/// Area of a rectangle; never negative.
pub fn area(rect: Rect) -> f64 {
    let r = normalize(rect);
    r.width() * r.height()
}

/// True if the rectangle has no area (zero or collapsed width or height).
pub fn is_empty(rect: Rect) -> bool {
    let r = normalize(rect);
    r.width() <= 0.0 || r.height() <= 0.0
}

/// Shrink a rectangle by `amount` on all four sides.
///
/// An axis that would invert collapses onto its midpoint instead.
/// Negative amounts grow the rectangle.
pub fn shrink(rect: Rect, amount: f64) -> Rect {
    let r = normalize(rect);
    let (x0, x1) = shrink_span(r.x0, r.x1, amount);
    let (y0, y1) = shrink_span(r.y0, r.y1, amount);
    Rect::new(x0, y0, x1, y1)
}

/// Fraction of `rect`'s area that lies inside `boundary`, in `0.0..=1.0`.
///
/// An empty boundary gives `0.0` for every rectangle.
/// A zero-area `rect` scores `1.0` when it sits inside a non-empty boundary and `0.0` otherwise.
pub fn fit_fraction(rect: Rect, boundary: Rect) -> f64 {
    if is_empty(boundary) {
        return 0.0;
    }
    let total = area(rect);
    if total <= 0.0 {
        return if contains_rect(boundary, rect) {
            1.0
        } else {
            0.0
        };
    }
    (area(intersect(rect, boundary)) / total).clamp(0.0, 1.0)
}

/// Order corners so that `x0 <= x1` and `y0 <= y1`.
#[inline]
fn normalize(rect: Rect) -> Rect {
    Rect::new(
        rect.x0.min(rect.x1),
        rect.y0.min(rect.y1),
        rect.x0.max(rect.x1),
        rect.y0.max(rect.y1),
    )
}

fn shrink_span(lo: f64, hi: f64, amount: f64) -> (f64, f64) {
    let (lo, hi) = (lo + amount, hi - amount);
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn intersect_overlapping() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 25.0, 150.0, 75.0);
        assert_eq!(intersect(a, b), Rect::new(50.0, 25.0, 100.0, 75.0));
        assert_eq!(intersect(b, a), intersect(a, b), "intersection is symmetric");
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        let i = intersect(a, b);
        assert!(is_empty(i));
        assert_eq!(area(i), 0.0);
    }

    #[test]
    fn intersect_accepts_inverted_corners() {
        let a = Rect::new(100.0, 100.0, 0.0, 0.0);
        let b = Rect::new(50.0, 50.0, 150.0, 150.0);
        assert_eq!(intersect(a, b), Rect::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn containment() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(contains_rect(outer, Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(contains_rect(outer, outer), "edges may touch");
        assert!(!contains_rect(outer, Rect::new(90.0, 90.0, 110.0, 100.0)));
    }

    #[test]
    fn translate_moves_both_corners() {
        let r = translate(Rect::new(0.0, 0.0, 10.0, 5.0), Vec2::new(3.0, -2.0));
        assert_eq!(r, Rect::new(3.0, -2.0, 13.0, 3.0));
    }

    #[test]
    fn shrink_insets_and_collapses() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(shrink(r, 10.0), Rect::new(10.0, 10.0, 90.0, 30.0));
        // Height 40 cannot lose 2 * 30; the axis collapses onto its midpoint.
        let collapsed = shrink(r, 30.0);
        assert_eq!(collapsed.y0, 20.0);
        assert_eq!(collapsed.y1, 20.0);
        assert!(is_empty(collapsed));
        assert_eq!(shrink(r, 0.0), r);
    }

    #[test]
    fn fit_fraction_partial_overlap() {
        let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
        let half_out = Rect::new(50.0, 0.0, 150.0, 100.0);
        assert!((fit_fraction(half_out, boundary) - 0.5).abs() < 1e-12);
        assert_eq!(fit_fraction(Rect::new(10.0, 10.0, 20.0, 20.0), boundary), 1.0);
        assert_eq!(fit_fraction(Rect::new(200.0, 0.0, 210.0, 10.0), boundary), 0.0);
    }

    #[test]
    fn fit_fraction_degenerate_inputs() {
        let empty = Rect::new(10.0, 10.0, 10.0, 50.0);
        assert_eq!(fit_fraction(Rect::new(10.0, 10.0, 20.0, 20.0), empty), 0.0);

        let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
        let point_inside = Rect::from_origin_size((5.0, 5.0), Size::ZERO);
        let point_outside = Rect::from_origin_size((500.0, 5.0), Size::ZERO);
        assert_eq!(fit_fraction(point_inside, boundary), 1.0);
        assert_eq!(fit_fraction(point_outside, boundary), 0.0);
    }
}
