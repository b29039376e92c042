// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor --heading-base-level=0

//! Understory Anchor: a Kurbo-native placement solver for anchored layers.
//!
//! Tooltips, menus, dropdowns, and popovers all share one problem: given a trigger's
//! bounds, a layer size, and the clipping ancestors around the trigger, where should the
//! layer go so that it stays visible?
//!
//! - Resolves the visible boundary from an ancestor chain and the viewport.
//! - Enumerates candidate rectangles for named placements (`top-center`, `left-bottom`, ...).
//! - Scores candidates by how much of them fits inside the boundary and picks a winner.
//! - Either snaps to the winner or slides it along its anchor edge to stay in view.
//!
//! ## Not a driver
//!
//! This crate is pure computation. It does not listen to scroll or resize, schedule
//! frames, or render anything. See `understory_layer` for the reactive side.
//!
//! ## Pipeline
//!
//! A pass always runs in the same order:
//!
//! 1. [`resolve_boundary`]: intersect the viewport with clipping ancestors, then inset by
//!    the container offset. The result may be empty; that is reported, not an error.
//! 2. [`candidates`]: lazily turn each allowed placement into a [`Candidate`]. Layer size
//!    may depend on the side ([`LayerDimensions::BySide`]).
//! 3. [`select_best`]: highest fit fraction wins; ties go to the earliest placement.
//! 4. [`slide`] (unless snapping), then a [`Resolution`] with placement, side, arrow,
//!    and the final rectangle.
//!
//! [`resolve_in`] runs the whole pipeline against a [`BoundaryProvider`].
//!
//! ## API overview
//!
//! - [`Options`] / [`OptionsBuilder`]: validated, immutable configuration.
//! - [`Placement`], [`Side`], [`Align`], [`PlacementSet`]: placement vocabulary.
//! - [`Ancestor`], [`ClipFlags`], [`AncestorChain`], [`BoundaryProvider`]: boundary input.
//! - [`Resolution`], [`LayerStyle`], [`Arrow`]: outputs.
//! - [`geometry`]: rectangle helpers.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_anchor::{Ancestor, AncestorChain, Options, Placement, Side, resolve_in};
//!
//! let options = Options::builder()
//!     .placement(Placement::RightCenter)
//!     .possible_placements([Placement::RightCenter, Placement::LeftCenter])
//!     .auto(true)
//!     .trigger_offset(8.0)
//!     .layer_dimensions(Size::new(120.0, 40.0))
//!     .build()
//!     .unwrap();
//!
//! // A trigger hugging the right edge of a scroll container.
//! let chain = AncestorChain::new(Rect::new(0.0, 0.0, 1024.0, 768.0))
//!     .with(Ancestor::scrolling(Rect::new(0.0, 0.0, 800.0, 600.0)));
//! let trigger = Rect::new(740.0, 100.0, 790.0, 120.0);
//!
//! let r = resolve_in(trigger, &chain, &options, None);
//! assert_eq!(r.placement, Placement::LeftCenter);
//! assert_eq!(r.side, Side::Left);
//! assert_eq!(r.anchor, Point::new(732.0, 110.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arrow;
mod boundary;
mod enumerate;
mod error;
pub mod geometry;
mod options;
mod placement;
mod resolve;
mod select;
mod style;

pub use arrow::{Arrow, arrow_for};
pub use boundary::{Ancestor, AncestorChain, BoundaryProvider, ClipFlags, resolve_boundary};
pub use enumerate::{Candidate, Candidates, candidates};
pub use error::{ConfigError, ParsePlacementError};
pub use options::{LayerDimensions, Options, OptionsBuilder};
pub use placement::{Align, Placement, PlacementSet, Side};
pub use resolve::{Resolution, resolve, resolve_in, resolve_with_previous};
pub use select::{Scored, score, select_best, slide};
pub use style::LayerStyle;
