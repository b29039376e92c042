// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attachment points handed to the UI toolkit.
//!
//! A toolkit renders the trigger with [`TriggerProps`], the layer with [`LayerProps`],
//! and mounts layer content through [`Bindings::render`], which wraps it in a [`Portal`]
//! so it can live outside the trigger's clipping ancestors.

use understory_anchor::{Arrow, LayerStyle, Side};

use crate::host::Signals;

/// Attachment for the trigger element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerProps<N> {
    /// Trigger handle.
    pub node: N,
    /// Signals the toolkit should forward from the trigger's subtree while open.
    pub forward: Signals,
}

/// Attachment for the layer element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerProps<N> {
    /// Layer handle.
    pub node: N,
    /// Inline position style; `None` until the first pass resolves.
    pub style: Option<LayerStyle>,
    /// Signals the toolkit should forward from the layer's subtree while open.
    pub forward: Signals,
}

/// Layer content mounted outside normal layout flow.
#[derive(Clone, Debug, PartialEq)]
pub struct Portal<N, C> {
    /// Layer handle the content belongs to.
    pub layer: N,
    /// Position style for the portal root.
    pub style: LayerStyle,
    /// Side the layer occupies.
    pub side: Side,
    /// Arrow placement, if any.
    pub arrow: Option<Arrow>,
    /// Caller-supplied content.
    pub content: C,
}

/// Snapshot of everything a toolkit needs to render an anchored layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bindings<N> {
    /// Trigger attachment.
    pub trigger: TriggerProps<N>,
    /// Layer attachment.
    pub layer: LayerProps<N>,
    /// Resolved side, or the configured placement's side before the first pass.
    pub layer_side: Side,
    /// Arrow placement, if resolved.
    pub arrow: Option<Arrow>,
    /// True while the layer is open.
    pub is_open: bool,
}

impl<N: Copy> Bindings<N> {
    /// Wrap layer content for mounting.
    ///
    /// Returns `None` while closed or before the first resolution, in which case the
    /// toolkit mounts nothing.
    pub fn render<C>(&self, content: C) -> Option<Portal<N, C>> {
        if !self.is_open {
            return None;
        }
        let style = self.layer.style?;
        Some(Portal {
            layer: self.layer.node,
            style,
            side: self.layer_side,
            arrow: self.arrow,
            content,
        })
    }
}
