// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One resolution pass: boundary, then enumeration, then scoring.

use kurbo::{Point, Rect, Vec2};
use tracing::debug;

use crate::arrow::{Arrow, arrow_for};
use crate::boundary::{BoundaryProvider, resolve_boundary};
use crate::enumerate::{Candidate, candidates};
use crate::geometry;
use crate::options::Options;
use crate::placement::{Placement, Side};
use crate::select::{Scored, score, select_best, slide};
use crate::style::LayerStyle;

/// Outcome of a resolution pass.
///
/// A plain value: it is replaced wholesale by the next pass and never patched in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Final layer rectangle (unrounded).
    pub layer: Rect,
    /// Winning placement.
    pub placement: Placement,
    /// Side of the winning placement.
    pub side: Side,
    /// Layer anchor point after any sliding.
    pub anchor: Point,
    /// True if `layer` is exactly the enumerated rectangle of `placement`
    /// (always the case with `snap`; without it, true when no slide was needed).
    pub was_snapped: bool,
    /// Fit fraction of the enumerated winner before sliding.
    pub fit: f64,
    /// Boundary the pass resolved against.
    pub boundary: Rect,
    /// True if the boundary had no area; `placement` is then the first candidate.
    pub boundary_empty: bool,
    /// Arrow on the layer edge facing the trigger, if any.
    pub arrow: Option<Arrow>,
}

impl Resolution {
    /// Style for positioning the layer; `with_size` adds width and height.
    pub fn style(&self, with_size: bool) -> LayerStyle {
        LayerStyle::from_rect(self.layer, with_size)
    }
}

/// Resolve against an already computed boundary.
pub fn resolve(trigger: Rect, boundary: Rect, options: &Options) -> Resolution {
    resolve_with_previous(trigger, boundary, options, None)
}

/// Resolve against an already computed boundary, with the previous pass's placement for hysteresis.
pub fn resolve_with_previous(
    trigger: Rect,
    boundary: Rect,
    options: &Options,
    previous: Option<Placement>,
) -> Resolution {
    let winner = select_best(
        candidates(trigger, options),
        boundary,
        previous,
        options.flip_threshold(),
    )
    .unwrap_or_else(|| fallback(trigger, boundary, options));
    finish(trigger, boundary, options, winner)
}

/// Full pass: walk the ancestor chain, then enumerate and score.
pub fn resolve_in<B: BoundaryProvider>(
    trigger: Rect,
    provider: &B,
    options: &Options,
    previous: Option<Placement>,
) -> Resolution {
    let boundary = resolve_boundary(
        provider,
        options.overflow_container(),
        options.container_offset(),
    );
    resolve_with_previous(trigger, boundary, options, previous)
}

// Unreachable through `Options`, which always yields at least one candidate.
fn fallback(trigger: Rect, boundary: Rect, options: &Options) -> Scored {
    let placement = options.placement();
    let size = options.layer_dimensions().size_for(placement.side());
    let candidate = Candidate::new(placement, trigger, size, options.trigger_offset());
    score(candidate, boundary, 0)
}

fn finish(trigger: Rect, boundary: Rect, options: &Options, winner: Scored) -> Resolution {
    let candidate = winner.candidate;
    let shift = if options.snap() {
        Vec2::ZERO
    } else {
        slide(&candidate, trigger, boundary)
    };
    let layer = geometry::translate(candidate.layer, shift);
    let side = candidate.side();
    let resolution = Resolution {
        layer,
        placement: candidate.placement,
        side,
        anchor: candidate.layer_anchor + shift,
        was_snapped: shift == Vec2::ZERO,
        fit: winner.fit,
        boundary,
        boundary_empty: geometry::is_empty(boundary),
        arrow: arrow_for(side, layer, trigger, options.arrow_offset()),
    };
    debug!(
        placement = %resolution.placement,
        side = %resolution.side,
        fit = resolution.fit,
        snapped = resolution.was_snapped,
        boundary_empty = resolution.boundary_empty,
        "resolved layer placement"
    );
    resolution
}
