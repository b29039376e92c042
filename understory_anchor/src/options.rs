// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution options and their builder.
//!
//! [`Options`] is immutable once built. Every resolution pass reads it as-is;
//! to change behavior, build a new value and hand it to the driver.

use alloc::rc::Rc;
use core::fmt;

use kurbo::Size;

use crate::error::ConfigError;
use crate::placement::{Placement, PlacementSet, Side};

/// Layer size used when enumerating candidates.
///
/// A menu that is wider when opened sideways than when dropped down can supply a
/// per-side function; it is called once per candidate, in enumeration order.
#[derive(Clone)]
pub enum LayerDimensions {
    /// The same size for every side.
    Fixed(Size),
    /// Size computed from the candidate's side.
    BySide(Rc<dyn Fn(Side) -> Size>),
}

impl LayerDimensions {
    /// Wrap a per-side size function.
    pub fn by_side(f: impl Fn(Side) -> Size + 'static) -> Self {
        Self::BySide(Rc::new(f))
    }

    /// Layer size for a candidate on `side`.
    ///
    /// Negative or non-finite components from a size function are clamped to zero.
    pub fn size_for(&self, side: Side) -> Size {
        match self {
            Self::Fixed(size) => *size,
            Self::BySide(f) => {
                let size = f(side);
                Size::new(sanitize(size.width), sanitize(size.height))
            }
        }
    }

    /// True if the size depends on the side.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::BySide(_))
    }
}

impl Default for LayerDimensions {
    fn default() -> Self {
        Self::Fixed(Size::ZERO)
    }
}

impl From<Size> for LayerDimensions {
    fn from(size: Size) -> Self {
        Self::Fixed(size)
    }
}

impl fmt::Debug for LayerDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::BySide(_) => f.write_str("BySide(..)"),
        }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Per-resolution configuration.
///
/// Build with [`Options::builder`]. Defaults:
///
/// | option | default |
/// |---|---|
/// | `placement` | `top-center` |
/// | `possible_placements` | all (`auto`) |
/// | `auto` | `false` |
/// | `snap` | `false` |
/// | `overflow_container` | `true` |
/// | `trigger_offset`, `container_offset`, `arrow_offset` | `0` |
/// | `flip_threshold` | `0` |
/// | `layer_dimensions` | fixed `0×0` |
#[derive(Clone, Debug)]
pub struct Options {
    placement: Placement,
    possible_placements: PlacementSet,
    auto: bool,
    snap: bool,
    overflow_container: bool,
    trigger_offset: f64,
    container_offset: f64,
    arrow_offset: f64,
    flip_threshold: f64,
    layer_dimensions: LayerDimensions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            placement: Placement::TopCenter,
            possible_placements: PlacementSet::All,
            auto: false,
            snap: false,
            overflow_container: true,
            trigger_offset: 0.0,
            container_offset: 0.0,
            arrow_offset: 0.0,
            flip_threshold: 0.0,
            layer_dimensions: LayerDimensions::default(),
        }
    }
}

impl Options {
    /// Start building options from the defaults.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder {
            options: Self::default(),
        }
    }

    /// Check the invariants [`OptionsBuilder::build`] enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto && self.possible_placements.is_empty() {
            return Err(ConfigError::EmptyPlacements);
        }
        finite("trigger_offset", self.trigger_offset)?;
        non_negative("container_offset", self.container_offset)?;
        non_negative("arrow_offset", self.arrow_offset)?;
        if !(0.0..=1.0).contains(&self.flip_threshold) {
            return Err(ConfigError::FlipThreshold(self.flip_threshold));
        }
        if let LayerDimensions::Fixed(size) = self.layer_dimensions {
            let ok = |v: f64| v.is_finite() && v >= 0.0;
            if !ok(size.width) || !ok(size.height) {
                return Err(ConfigError::LayerSize {
                    width: size.width,
                    height: size.height,
                });
            }
        }
        Ok(())
    }

    /// Placement used when `auto` is off, and the tie-free fallback otherwise.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Ordered candidates for `auto` search.
    pub fn possible_placements(&self) -> &PlacementSet {
        &self.possible_placements
    }

    /// Search all possible placements each pass instead of using `placement` alone.
    pub fn auto(&self) -> bool {
        self.auto
    }

    /// Use the winning candidate rectangle as-is instead of sliding it into the boundary.
    pub fn snap(&self) -> bool {
        self.snap
    }

    /// Constrain the layer by clipping ancestors, not only by the viewport.
    pub fn overflow_container(&self) -> bool {
        self.overflow_container
    }

    /// Gap between trigger and layer along the side's normal.
    pub fn trigger_offset(&self) -> f64 {
        self.trigger_offset
    }

    /// Inset applied to every side of the resolved boundary.
    pub fn container_offset(&self) -> f64 {
        self.container_offset
    }

    /// Minimum distance between an arrow and the ends of the layer edge it sits on.
    pub fn arrow_offset(&self) -> f64 {
        self.arrow_offset
    }

    /// Fit-fraction margin another candidate needs to displace the previous placement.
    pub fn flip_threshold(&self) -> f64 {
        self.flip_threshold
    }

    /// Layer size source.
    pub fn layer_dimensions(&self) -> &LayerDimensions {
        &self.layer_dimensions
    }

    /// The placements a pass enumerates: the whole set in `auto` mode, otherwise just `placement`.
    pub fn candidates(&self) -> &[Placement] {
        if self.auto {
            self.possible_placements.as_slice()
        } else {
            core::slice::from_ref(&self.placement)
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

/// Builder for [`Options`].
#[derive(Clone, Debug)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Preferred placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.options.placement = placement;
        self
    }

    /// Ordered candidates for `auto` search.
    pub fn possible_placements(mut self, set: impl Into<PlacementSet>) -> Self {
        self.options.possible_placements = set.into();
        self
    }

    /// Enable or disable `auto` search.
    pub fn auto(mut self, auto: bool) -> Self {
        self.options.auto = auto;
        self
    }

    /// Enable or disable snapping.
    pub fn snap(mut self, snap: bool) -> Self {
        self.options.snap = snap;
        self
    }

    /// Constrain by clipping ancestors (`true`) or only by the viewport (`false`).
    pub fn overflow_container(mut self, overflow_container: bool) -> Self {
        self.options.overflow_container = overflow_container;
        self
    }

    /// Gap between trigger and layer.
    pub fn trigger_offset(mut self, offset: f64) -> Self {
        self.options.trigger_offset = offset;
        self
    }

    /// Boundary inset.
    pub fn container_offset(mut self, offset: f64) -> Self {
        self.options.container_offset = offset;
        self
    }

    /// Arrow clearance from the layer's corners.
    pub fn arrow_offset(mut self, offset: f64) -> Self {
        self.options.arrow_offset = offset;
        self
    }

    /// Hysteresis margin for `auto` search.
    pub fn flip_threshold(mut self, threshold: f64) -> Self {
        self.options.flip_threshold = threshold;
        self
    }

    /// Layer size, fixed or per side.
    pub fn layer_dimensions(mut self, dims: impl Into<LayerDimensions>) -> Self {
        self.options.layer_dimensions = dims.into();
        self
    }

    /// Validate and finish.
    pub fn build(self) -> Result<Options, ConfigError> {
        self.options.validate()?;
        Ok(self.options)
    }
}
