// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the controller drives.
//!
//! ## Overview
//!
//! The controller never touches a platform directly. A host supplies:
//!
//! - [`Measure`]: element handles, trigger bounds, and the ancestor chain
//!   (through the [`BoundaryProvider`] supertrait).
//! - [`Listeners`]: attach and release platform listeners for the [`Signals`] a live
//!   layer reacts to.
//! - [`FrameScheduler`]: request and cancel a single animation-frame callback.
//!
//! Any type implementing all three is a [`Host`].

use bitflags::bitflags;
use kurbo::Rect;
use understory_anchor::BoundaryProvider;

bitflags! {
    /// Platform signals a live layer listens to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Signals: u8 {
        /// Scrolling of the document or of any ancestor of the trigger.
        const SCROLL   = 0b0000_0001;
        /// Viewport or element resize, including layer content.
        const RESIZE   = 0b0000_0010;
        /// Tree or attribute mutation that can move the trigger.
        const MUTATION = 0b0000_0100;
        /// Pointer presses, for outside-click detection.
        const POINTER  = 0b0000_1000;
    }
}

impl Signals {
    /// Signals that reposition the layer.
    pub const REPOSITION: Self = Self::SCROLL.union(Self::RESIZE).union(Self::MUTATION);
}

/// Element lookup and measurement.
pub trait Measure: BoundaryProvider {
    /// Opaque element handle.
    type Node: Copy + Eq + core::fmt::Debug;

    /// Handle of the trigger element.
    fn trigger(&self) -> Self::Node;

    /// Handle of the layer element.
    fn layer(&self) -> Self::Node;

    /// Current trigger bounds, or `None` if the trigger is not mounted.
    fn trigger_bounds(&self) -> Option<Rect>;

    /// True if the layer element is mounted.
    fn layer_mounted(&self) -> bool {
        true
    }
}

/// Platform listener registration.
pub trait Listeners {
    /// Start delivering `signals` for the trigger, its ancestors, and the layer.
    fn attach(&mut self, signals: Signals);

    /// Release every listener registered by [`attach`](Self::attach).
    fn release(&mut self);
}

/// Animation-frame scheduling.
///
/// The controller requests at most one frame at a time and calls
/// [`cancel_frame`](Self::cancel_frame) only for a frame it requested and has not yet seen.
pub trait FrameScheduler {
    /// Ask for [`LayerController::on_frame`](crate::LayerController::on_frame) to be called on the next frame.
    fn request_frame(&mut self);

    /// Withdraw the outstanding frame request.
    fn cancel_frame(&mut self);
}

/// Everything the controller needs from its environment.
pub trait Host: Measure + Listeners + FrameScheduler {}

impl<T: Measure + Listeners + FrameScheduler> Host for T {}
