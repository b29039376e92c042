// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_layer --heading-base-level=0

//! Understory Layer: the reactive driver for anchored layers.
//!
//! ## Overview
//!
//! [`understory_anchor`] answers "where should this layer go right now". This crate answers
//! "when": it keeps an open layer positioned while its surroundings scroll, resize, or
//! mutate, and tells the consumer when the user clicks outside it.
//!
//! - [`LayerController`] owns a [`Host`] and follows the consumer's open flag.
//! - Opening attaches listeners and resolves synchronously.
//! - Every repositioning [`Signals`] value schedules at most one frame; the frame runs one pass.
//! - Closing, [`LayerController::teardown`], or drop cancels the pending frame and releases
//!   listeners. A frame delivered after that is ignored.
//! - [`LayerController::pointer_down`] reports clicks whose path contains neither the
//!   trigger nor the layer.
//! - The latest [`Resolution`](understory_anchor::Resolution) lives in a [`LatestSlot`];
//!   [`LayerController::bindings`] packages it for rendering.
//!
//! ## Host
//!
//! A host is any type implementing [`Measure`], [`Listeners`], and [`FrameScheduler`].
//! The controller never reaches into a platform on its own.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_anchor::{Ancestor, BoundaryProvider, Options, Placement, Side};
//! use understory_layer::{FrameScheduler, LayerController, Listeners, Measure, Signals};
//!
//! #[derive(Default)]
//! struct Page {
//!     trigger: Rect,
//!     frame_requested: bool,
//! }
//!
//! impl BoundaryProvider for Page {
//!     fn ancestors(&self) -> impl Iterator<Item = Ancestor> + '_ {
//!         core::iter::empty()
//!     }
//!     fn viewport(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 600.0)
//!     }
//! }
//!
//! impl Measure for Page {
//!     type Node = u32;
//!     fn trigger(&self) -> u32 { 1 }
//!     fn layer(&self) -> u32 { 2 }
//!     fn trigger_bounds(&self) -> Option<Rect> { Some(self.trigger) }
//! }
//!
//! impl Listeners for Page {
//!     fn attach(&mut self, _: Signals) {}
//!     fn release(&mut self) {}
//! }
//!
//! impl FrameScheduler for Page {
//!     fn request_frame(&mut self) { self.frame_requested = true; }
//!     fn cancel_frame(&mut self) { self.frame_requested = false; }
//! }
//!
//! let options = Options::builder()
//!     .placement(Placement::BottomCenter)
//!     .possible_placements([Placement::BottomCenter, Placement::TopCenter])
//!     .auto(true)
//!     .trigger_offset(4.0)
//!     .layer_dimensions(Size::new(160.0, 80.0))
//!     .build()
//!     .unwrap();
//!
//! let page = Page { trigger: Rect::new(300.0, 100.0, 360.0, 124.0), ..Page::default() };
//! let mut layer = LayerController::new(page, options);
//! layer.set_open(true);
//! assert_eq!(layer.bindings().layer_side, Side::Bottom);
//!
//! // The page scrolls; the trigger is now near the bottom of the viewport.
//! layer.host_mut().trigger = Rect::new(300.0, 560.0, 360.0, 584.0);
//! layer.notify(Signals::SCROLL);
//! assert!(layer.host().frame_requested);
//!
//! let r = layer.on_frame().unwrap();
//! assert_eq!(r.placement, Placement::TopCenter);
//!
//! layer.set_open(false);
//! assert!(layer.latest().is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod controller;
mod host;
mod slot;

pub use binding::{Bindings, LayerProps, Portal, TriggerProps};
pub use controller::{Disappearance, LayerController, Skip};
pub use host::{FrameScheduler, Host, Listeners, Measure, Signals};
pub use slot::LatestSlot;
