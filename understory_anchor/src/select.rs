// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate scoring, selection, and sliding.
//!
//! ## Scoring
//!
//! A candidate's score is the fraction of its layer area inside the boundary
//! (see [`geometry::fit_fraction`]).
//!
//! ## Selection
//!
//! The highest score wins. Ties go to the earliest candidate, so the order of
//! `possible_placements` doubles as a priority list. With a non-zero flip threshold the
//! previous pass's placement is kept unless the winner beats it by at least the threshold.
//!
//! ## Sliding
//!
//! Without snapping, the winner is translated along its anchor edge (never across it) to
//! reduce overflow. The shift is limited so the layer still overlaps the trigger's extent
//! on that axis; `center` placements slide on both axes under the same limit.

use kurbo::{Rect, Vec2};

use crate::enumerate::Candidate;
use crate::geometry;
use crate::placement::Placement;

/// A candidate with its score.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scored {
    /// The candidate.
    pub candidate: Candidate,
    /// Fit fraction in `0.0..=1.0`.
    pub fit: f64,
    /// Position in enumeration order.
    pub index: usize,
}

/// Score one candidate against a boundary.
#[inline]
pub fn score(candidate: Candidate, boundary: Rect, index: usize) -> Scored {
    Scored {
        fit: geometry::fit_fraction(candidate.layer, boundary),
        candidate,
        index,
    }
}

/// Pick the best-fitting candidate.
///
/// Returns `None` only for an empty candidate sequence. `previous` and `flip_threshold`
/// implement hysteresis: when `previous` is among the candidates and the winner's fit
/// exceeds it by less than `flip_threshold`, the previous placement is kept.
pub fn select_best(
    candidates: impl IntoIterator<Item = Candidate>,
    boundary: Rect,
    previous: Option<Placement>,
    flip_threshold: f64,
) -> Option<Scored> {
    let mut best: Option<Scored> = None;
    let mut sticky: Option<Scored> = None;
    for (i, candidate) in candidates.into_iter().enumerate() {
        let scored = score(candidate, boundary, i);
        if previous == Some(candidate.placement) && sticky.is_none() {
            sticky = Some(scored);
        }
        match best {
            Some(b) if scored.fit <= b.fit => {}
            _ => best = Some(scored),
        }
    }
    match (best, sticky) {
        (Some(b), Some(s)) if b.fit - s.fit < flip_threshold => Some(s),
        (best, _) => best,
    }
}

/// Translation that slides `candidate` toward the inside of `boundary`.
///
/// Returns zero for an empty boundary or a layer that already fits.
pub fn slide(candidate: &Candidate, trigger: Rect, boundary: Rect) -> Vec2 {
    if geometry::is_empty(boundary) {
        return Vec2::ZERO;
    }
    let layer = candidate.layer;
    let dx = || {
        shift_into(
            (layer.x0, layer.x1),
            (boundary.x0, boundary.x1),
            (trigger.x0, trigger.x1),
        )
    };
    let dy = || {
        shift_into(
            (layer.y0, layer.y1),
            (boundary.y0, boundary.y1),
            (trigger.y0, trigger.y1),
        )
    };
    // `center` slides on both axes.
    let side = candidate.side();
    Vec2::new(
        if side.is_horizontal() { 0.0 } else { dx() },
        if side.is_vertical() { 0.0 } else { dy() },
    )
}

/// Shift for a span `[s, e]` to fit inside `[lo, hi]`, kept overlapping `[t0, t1]`.
///
/// A span longer than the bounds aligns its start with `lo`.
fn shift_into((s, e): (f64, f64), (lo, hi): (f64, f64), (t0, t1): (f64, f64)) -> f64 {
    let wanted = if e - s > hi - lo || s < lo {
        lo - s
    } else if e > hi {
        hi - e
    } else {
        0.0
    };
    // Keep [s + d, e + d] touching [t0, t1]: t0 - e <= d <= t1 - s.
    wanted.max(t0 - e).min(t1 - s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Size;

    const BOUNDARY: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn cand(p: Placement, trigger: Rect, size: Size) -> Candidate {
        Candidate::new(p, trigger, size, 0.0)
    }

    #[test]
    fn best_fit_wins() {
        let trigger = Rect::new(780.0, 100.0, 830.0, 120.0);
        let size = Size::new(100.0, 20.0);
        let cs = [
            cand(Placement::RightCenter, trigger, size),
            cand(Placement::LeftCenter, trigger, size),
        ];
        let best = select_best(cs, BOUNDARY, None, 0.0).unwrap();
        assert_eq!(best.candidate.placement, Placement::LeftCenter);
        assert_eq!(best.index, 1);
        assert_eq!(best.fit, 1.0);
    }

    #[test]
    fn ties_go_to_first_listed() {
        let trigger = Rect::new(300.0, 300.0, 350.0, 320.0);
        let size = Size::new(50.0, 20.0);
        let order = [Placement::BottomLeft, Placement::TopLeft, Placement::RightTop];
        let cs: Vec<_> = order.iter().map(|&p| cand(p, trigger, size)).collect();
        let best = select_best(cs, BOUNDARY, None, 0.0).unwrap();
        assert_eq!(best.candidate.placement, Placement::BottomLeft);
        assert_eq!(best.index, 0);
    }

    #[test]
    fn empty_boundary_picks_first() {
        let trigger = Rect::new(300.0, 300.0, 350.0, 320.0);
        let size = Size::new(50.0, 20.0);
        let empty = Rect::new(10.0, 10.0, 10.0, 10.0);
        let cs = [
            cand(Placement::TopCenter, trigger, size),
            cand(Placement::BottomCenter, trigger, size),
        ];
        let best = select_best(cs, empty, None, 0.0).unwrap();
        assert_eq!(best.candidate.placement, Placement::TopCenter);
        assert_eq!(best.fit, 0.0);
    }

    #[test]
    fn no_candidates_gives_none() {
        assert!(select_best(core::iter::empty(), BOUNDARY, None, 0.0).is_none());
    }

    #[test]
    fn hysteresis_keeps_previous_within_threshold() {
        // Top overflows by 5 of 20 rows (fit 0.75); bottom fits fully.
        let trigger = Rect::new(300.0, 15.0, 350.0, 35.0);
        let size = Size::new(50.0, 20.0);
        let cs = [
            cand(Placement::BottomCenter, trigger, size),
            cand(Placement::TopCenter, trigger, size),
        ];
        let kept = select_best(cs, BOUNDARY, Some(Placement::TopCenter), 0.5).unwrap();
        assert_eq!(kept.candidate.placement, Placement::TopCenter);

        let flipped = select_best(cs, BOUNDARY, Some(Placement::TopCenter), 0.2).unwrap();
        assert_eq!(flipped.candidate.placement, Placement::BottomCenter);

        // A gain equal to the threshold is enough to flip.
        let at = select_best(cs, BOUNDARY, Some(Placement::TopCenter), 0.25).unwrap();
        assert_eq!(at.candidate.placement, Placement::BottomCenter);

        let pure = select_best(cs, BOUNDARY, Some(Placement::TopCenter), 0.0).unwrap();
        assert_eq!(pure.candidate.placement, Placement::BottomCenter);
    }

    #[test]
    fn slide_along_edge_only() {
        // Bottom-center layer wider than the room to its right.
        let trigger = Rect::new(740.0, 100.0, 790.0, 120.0);
        let c = cand(Placement::BottomCenter, trigger, Size::new(200.0, 40.0));
        assert_eq!(c.layer.x1, 865.0);
        let d = slide(&c, trigger, BOUNDARY);
        assert_eq!(d, Vec2::new(-65.0, 0.0));
    }

    #[test]
    fn side_layers_slide_vertically_only() {
        // Right-center layer overflows both the right and the bottom edge.
        let trigger = Rect::new(740.0, 590.0, 790.0, 600.0);
        let c = cand(Placement::RightCenter, trigger, Size::new(100.0, 40.0));
        assert_eq!(c.layer, Rect::new(790.0, 575.0, 890.0, 615.0));
        assert_eq!(slide(&c, trigger, BOUNDARY), Vec2::new(0.0, -15.0));
    }

    #[test]
    fn slide_keeps_contact_with_trigger() {
        // The trigger sits mostly outside; the layer may not detach from it.
        let trigger = Rect::new(790.0, 100.0, 840.0, 120.0);
        let c = cand(Placement::BottomLeft, trigger, Size::new(100.0, 20.0));
        let d = slide(&c, trigger, BOUNDARY);
        let moved = geometry::translate(c.layer, d);
        assert_eq!(moved.x1, 800.0);
        assert!(moved.x1 >= trigger.x0 && moved.x0 <= trigger.x1);

        let far = Rect::new(1000.0, 100.0, 1050.0, 120.0);
        let c = cand(Placement::BottomLeft, far, Size::new(100.0, 20.0));
        let moved = geometry::translate(c.layer, slide(&c, far, BOUNDARY));
        assert_eq!(moved.x1, far.x0, "clamped to touch the trigger");
    }

    #[test]
    fn slide_center_moves_both_axes() {
        let trigger = Rect::new(0.0, 0.0, 20.0, 20.0);
        let c = cand(Placement::Center, trigger, Size::new(40.0, 40.0));
        assert_eq!(c.layer, Rect::new(-10.0, -10.0, 30.0, 30.0));
        assert_eq!(slide(&c, trigger, BOUNDARY), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn slide_noop_when_fitting_or_boundary_empty() {
        let trigger = Rect::new(300.0, 300.0, 350.0, 320.0);
        let c = cand(Placement::TopCenter, trigger, Size::new(50.0, 20.0));
        assert_eq!(slide(&c, trigger, BOUNDARY), Vec2::ZERO);
        assert_eq!(slide(&c, trigger, Rect::ZERO), Vec2::ZERO);
    }
}
