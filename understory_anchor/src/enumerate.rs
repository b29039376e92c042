// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate enumeration.
//!
//! Turns each allowed placement into a concrete layer rectangle. Enumeration is lazy
//! and strictly in order: the layer size function may differ per side and is called
//! once per candidate as the iterator advances.

use core::slice;

use kurbo::{Point, Rect, Size};

use crate::options::Options;
use crate::placement::{Placement, Side};

/// A placement turned into geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    /// The placement this candidate realizes.
    pub placement: Placement,
    /// Layer rectangle.
    pub layer: Rect,
    /// Point on the trigger the layer attaches to.
    pub trigger_anchor: Point,
    /// Matching point on the layer; `trigger_anchor` pushed out by the trigger offset.
    pub layer_anchor: Point,
}

impl Candidate {
    /// Build the candidate for one placement.
    ///
    /// The layer anchor is the trigger anchor moved `trigger_offset` along the side's
    /// normal; `center` ignores the offset.
    pub fn new(placement: Placement, trigger: Rect, layer_size: Size, trigger_offset: f64) -> Self {
        let side = placement.side();
        let trigger_anchor = placement.trigger_anchor(trigger);
        let offset = if side == Side::Center {
            0.0
        } else {
            trigger_offset
        };
        let layer_anchor = trigger_anchor + side.normal() * offset;
        let origin = layer_anchor - placement.layer_anchor_offset(layer_size);
        Self {
            placement,
            layer: Rect::from_origin_size(origin, layer_size),
            trigger_anchor,
            layer_anchor,
        }
    }

    /// Side of the trigger the layer occupies.
    #[inline]
    pub fn side(&self) -> Side {
        self.placement.side()
    }
}

/// Lazy, ordered iterator over the candidates of one resolution pass.
///
/// Created by [`candidates`].
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    trigger: Rect,
    options: &'a Options,
    placements: slice::Iter<'a, Placement>,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let placement = *self.placements.next()?;
        let size = self.options.layer_dimensions().size_for(placement.side());
        Some(Candidate::new(
            placement,
            self.trigger,
            size,
            self.options.trigger_offset(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.placements.size_hint()
    }
}

impl ExactSizeIterator for Candidates<'_> {}

/// Enumerate candidates for `trigger`.
///
/// With `auto` on, yields one candidate per entry of `possible_placements`, in order.
/// Otherwise yields only the configured `placement`.
pub fn candidates(trigger: Rect, options: &Options) -> Candidates<'_> {
    Candidates {
        trigger,
        options,
        placements: options.candidates().iter(),
    }
}
