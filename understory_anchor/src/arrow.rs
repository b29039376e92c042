// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow placement on the layer edge facing the trigger.

use kurbo::Rect;

use crate::placement::Side;

/// Where to draw an arrow pointing from the layer at the trigger.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrow {
    /// Layer edge the arrow sits on; the opposite of the layer's side.
    pub edge: Side,
    /// Distance along that edge from the layer's left (horizontal edges) or top
    /// (vertical edges), in layer-local pixels.
    pub offset: f64,
}

/// Compute the arrow for a layer on `side` of `trigger`.
///
/// The arrow aims at the trigger's center, clamped to stay `min_offset` away from the
/// ends of the edge; an edge shorter than `2 * min_offset` puts the arrow at its middle.
/// `Side::Center` layers have no arrow.
pub fn arrow_for(side: Side, layer: Rect, trigger: Rect, min_offset: f64) -> Option<Arrow> {
    let center = trigger.center();
    let (target, start, len) = match side {
        Side::Top | Side::Bottom => (center.x, layer.x0, layer.width()),
        Side::Left | Side::Right => (center.y, layer.y0, layer.height()),
        Side::Center => return None,
    };
    let offset = if len < 2.0 * min_offset {
        len * 0.5
    } else {
        (target - start).clamp(min_offset, len - min_offset)
    };
    Some(Arrow {
        edge: side.opposite(),
        offset,
    })
}
