// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary resolution: the visible region a layer may occupy.
//!
//! ## Model
//!
//! The host describes the trigger's ancestors, innermost first, as [`Ancestor`] records:
//! each carries the ancestor's visible client rectangle and [`ClipFlags`] saying whether it
//! clips its content. The viewport closes the chain.
//!
//! The resolver intersects the viewport with every clipping ancestor, stopping after an
//! ancestor marked [`ClipFlags::OUTERMOST`], then insets the result by the container offset.
//! With `overflow_container` off, ancestors are skipped and only the viewport constrains
//! the layer (the layer is expected to be portaled out of its ancestors).
//!
//! The result may have no area. That is not an error: scoring then treats every
//! candidate as an equally bad fit and the first one wins.

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::Rect;

use crate::geometry;

bitflags! {
    /// How an ancestor treats content that overflows it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClipFlags: u8 {
        /// Overflow is hidden or clipped.
        const CLIPS     = 0b0000_0001;
        /// The ancestor is a scroll container (implies clipping).
        const SCROLLS   = 0b0000_0010;
        /// Stop walking after this ancestor.
        const OUTERMOST = 0b0000_0100;
    }
}

impl ClipFlags {
    /// True if content outside this ancestor is invisible.
    #[inline]
    pub fn clips(self) -> bool {
        self.intersects(Self::CLIPS | Self::SCROLLS)
    }
}

/// One ancestor of the trigger as seen by the boundary resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ancestor {
    /// Visible client rectangle, in the same space as the trigger.
    pub rect: Rect,
    /// Overflow behavior.
    pub flags: ClipFlags,
}

impl Ancestor {
    /// An ancestor that clips its content.
    pub const fn clipping(rect: Rect) -> Self {
        Self {
            rect,
            flags: ClipFlags::CLIPS,
        }
    }

    /// A scroll container.
    pub const fn scrolling(rect: Rect) -> Self {
        Self {
            rect,
            flags: ClipFlags::SCROLLS,
        }
    }

    /// An ancestor whose overflow is visible; it does not constrain the layer.
    pub const fn visible(rect: Rect) -> Self {
        Self {
            rect,
            flags: ClipFlags::empty(),
        }
    }

    /// Mark this ancestor as the outermost one to consider.
    pub const fn outermost(mut self) -> Self {
        self.flags = self.flags.union(ClipFlags::OUTERMOST);
        self
    }
}

/// Source of the trigger's ancestor chain.
///
/// This is the seam toward the host's element tree: implement it over whatever
/// tree your toolkit has. [`AncestorChain`] is a ready-made value implementation.
pub trait BoundaryProvider {
    /// Ancestors of the trigger, innermost first.
    fn ancestors(&self) -> impl Iterator<Item = Ancestor> + '_;

    /// The viewport rectangle.
    fn viewport(&self) -> Rect;
}

/// An owned ancestor chain plus viewport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AncestorChain {
    /// Ancestors, innermost first.
    pub ancestors: Vec<Ancestor>,
    /// The viewport.
    pub viewport: Rect,
}

impl AncestorChain {
    /// A chain with no ancestors.
    pub fn new(viewport: Rect) -> Self {
        Self {
            ancestors: Vec::new(),
            viewport,
        }
    }

    /// Append the next-outer ancestor.
    pub fn with(mut self, ancestor: Ancestor) -> Self {
        self.ancestors.push(ancestor);
        self
    }
}

impl BoundaryProvider for AncestorChain {
    fn ancestors(&self) -> impl Iterator<Item = Ancestor> + '_ {
        self.ancestors.iter().copied()
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }
}

/// Compute the effective boundary for a trigger.
///
/// Intersects the viewport with each clipping ancestor, innermost first, stopping after one
/// marked [`ClipFlags::OUTERMOST`]; skips ancestors when `overflow_container` is off.
/// The result is inset by `container_offset` and may be empty.
pub fn resolve_boundary<B: BoundaryProvider>(
    provider: &B,
    overflow_container: bool,
    container_offset: f64,
) -> Rect {
    let mut boundary = provider.viewport();
    if overflow_container {
        for ancestor in provider.ancestors() {
            if ancestor.flags.clips() {
                boundary = geometry::intersect(boundary, ancestor.rect);
            }
            if ancestor.flags.contains(ClipFlags::OUTERMOST) {
                break;
            }
        }
    }
    geometry::shrink(boundary, container_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn viewport_only() {
        let chain = AncestorChain::new(viewport());
        assert_eq!(resolve_boundary(&chain, true, 0.0), viewport());
    }

    #[test]
    fn clipping_ancestors_intersect() {
        let chain = AncestorChain::new(viewport())
            .with(Ancestor::scrolling(Rect::new(100.0, 100.0, 400.0, 700.0)))
            .with(Ancestor::visible(Rect::new(0.0, 0.0, 50.0, 50.0)))
            .with(Ancestor::clipping(Rect::new(50.0, 150.0, 300.0, 500.0)));
        assert_eq!(
            resolve_boundary(&chain, true, 0.0),
            Rect::new(100.0, 150.0, 300.0, 500.0),
            "visible-overflow ancestors must not clip"
        );
    }

    #[test]
    fn walk_stops_at_outermost() {
        let chain = AncestorChain::new(viewport())
            .with(Ancestor::scrolling(Rect::new(100.0, 100.0, 400.0, 400.0)).outermost())
            .with(Ancestor::clipping(Rect::new(0.0, 0.0, 150.0, 150.0)));
        assert_eq!(
            resolve_boundary(&chain, true, 0.0),
            Rect::new(100.0, 100.0, 400.0, 400.0)
        );
    }

    #[test]
    fn overflow_container_off_uses_viewport() {
        let chain = AncestorChain::new(viewport())
            .with(Ancestor::scrolling(Rect::new(100.0, 100.0, 400.0, 400.0)));
        assert_eq!(resolve_boundary(&chain, false, 0.0), viewport());
    }

    #[test]
    fn container_offset_insets() {
        let chain = AncestorChain::new(viewport());
        assert_eq!(
            resolve_boundary(&chain, true, 10.0),
            Rect::new(10.0, 10.0, 790.0, 590.0)
        );
    }

    #[test]
    fn disjoint_ancestors_give_empty_boundary() {
        let chain = AncestorChain::new(viewport())
            .with(Ancestor::clipping(Rect::new(0.0, 0.0, 100.0, 100.0)))
            .with(Ancestor::clipping(Rect::new(200.0, 200.0, 300.0, 300.0)));
        let b = resolve_boundary(&chain, true, 0.0);
        assert!(geometry::is_empty(b));
    }
}
