// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer controller: open/close state, frame-coalesced repositioning, and dismissal.
//!
//! ## States
//!
//! - **Idle**: closed. No listeners, no frame requests, empty slot.
//! - **Active**: open. Listeners attached; each repositioning signal requests at most one
//!   frame, and the frame runs one resolution pass.
//!
//! Opening attaches listeners and resolves synchronously. Closing, [`teardown`], or
//! dropping the controller cancels any outstanding frame and releases listeners; a frame
//! that arrives afterwards is ignored.
//!
//! [`teardown`]: LayerController::teardown

use alloc::boxed::Box;

use kurbo::Rect;
use thiserror::Error;
use tracing::{debug, trace};
use understory_anchor::{Options, Resolution, geometry, resolve_boundary, resolve_in};

use crate::binding::{Bindings, LayerProps, TriggerProps};
use crate::host::{Host, Signals};
use crate::slot::LatestSlot;

/// Why a pass did not produce a new resolution.
///
/// None of these are failures; the previous snapshot stays in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Skip {
    /// The controller is idle.
    #[error("layer is closed")]
    Inactive,
    /// A frame arrived without a pending request.
    #[error("no frame was requested")]
    NotScheduled,
    /// The trigger element is not mounted.
    #[error("trigger element is not mounted")]
    MissingTrigger,
    /// The layer element is not mounted.
    #[error("layer element is not mounted")]
    MissingLayer,
}

/// How much of the trigger has left the visible boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disappearance {
    /// Part of the trigger is clipped.
    Partial,
    /// None of the trigger is visible.
    Full,
}

impl Disappearance {
    /// Classify `trigger` against the unpadded `visible` boundary; `None` means fully visible.
    pub fn classify(trigger: Rect, visible: Rect) -> Option<Self> {
        if !geometry::is_empty(visible) && geometry::contains_rect(visible, trigger) {
            None
        } else if geometry::fit_fraction(trigger, visible) > 0.0 {
            Some(Self::Partial)
        } else {
            Some(Self::Full)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Active { frame_pending: bool },
}

/// Drives one anchored layer against a [`Host`].
///
/// ## Usage
///
/// - Construct with [`LayerController::new`] and register callbacks with
///   [`on_outside_click`](Self::on_outside_click) / [`on_disappear`](Self::on_disappear).
/// - Call [`set_open`](Self::set_open) as the consumer's open flag changes.
/// - Forward platform signals with [`notify`](Self::notify) and pointer presses with
///   [`pointer_down`](Self::pointer_down).
/// - Call [`on_frame`](Self::on_frame) when the host's frame callback fires.
/// - Render from [`bindings`](Self::bindings).
pub struct LayerController<H: Host> {
    host: H,
    options: Options,
    state: State,
    latest: LatestSlot,
    hidden: Option<Disappearance>,
    on_outside_click: Option<Box<dyn FnMut()>>,
    on_disappear: Option<Box<dyn FnMut(Disappearance)>>,
}

impl<H: Host> core::fmt::Debug for LayerController<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayerController")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("latest", &self.latest.get())
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

impl<H: Host> LayerController<H> {
    /// Create an idle controller.
    pub fn new(host: H, options: Options) -> Self {
        Self {
            host,
            options,
            state: State::Idle,
            latest: LatestSlot::default(),
            hidden: None,
            on_outside_click: None,
            on_disappear: None,
        }
    }

    /// Callback for a pointer press outside both trigger and layer while open.
    ///
    /// The controller does not close itself; the consumer decides.
    pub fn on_outside_click(&mut self, f: impl FnMut() + 'static) {
        self.on_outside_click = Some(Box::new(f));
    }

    /// Callback for the trigger becoming partially or fully hidden while open.
    pub fn on_disappear(&mut self, f: impl FnMut(Disappearance) + 'static) {
        self.on_disappear = Some(Box::new(f));
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably (e.g. to update measurements before a signal).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options; an open layer repositions on the next frame.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.schedule();
    }

    /// True while open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Follow the consumer's open flag.
    pub fn set_open(&mut self, open: bool) {
        match (open, self.state) {
            (true, State::Idle) => {
                self.state = State::Active {
                    frame_pending: false,
                };
                self.host.attach(Signals::all());
                debug!("layer opened");
                if let Err(Skip::MissingTrigger | Skip::MissingLayer) = self.pass() {
                    // Elements not mounted yet; retry next frame.
                    self.schedule();
                }
            }
            (false, State::Active { .. }) => self.teardown(),
            _ => {}
        }
    }

    /// Report platform signals; repositioning signals coalesce into one frame.
    pub fn notify(&mut self, signals: Signals) {
        if signals.intersects(Signals::REPOSITION) {
            self.schedule();
        }
    }

    /// Run the scheduled pass, if any.
    pub fn on_frame(&mut self) -> Result<Resolution, Skip> {
        match self.state {
            State::Idle => {
                trace!("frame after teardown ignored");
                Err(Skip::Inactive)
            }
            State::Active {
                frame_pending: false,
            } => Err(Skip::NotScheduled),
            State::Active {
                frame_pending: true,
            } => {
                self.state = State::Active {
                    frame_pending: false,
                };
                self.pass()
            }
        }
    }

    /// Resolve immediately, e.g. after layer content changed size.
    ///
    /// A pending frame stays pending and will resolve again.
    pub fn refresh(&mut self) -> Result<Resolution, Skip> {
        if !self.is_open() {
            return Err(Skip::Inactive);
        }
        self.pass()
    }

    /// Report a pointer press with its root→target node path.
    ///
    /// Returns true if it counted as an outside click.
    pub fn pointer_down(&mut self, path: &[H::Node]) -> bool {
        if !self.is_open() {
            return false;
        }
        let (trigger, layer) = (self.host.trigger(), self.host.layer());
        if path.contains(&trigger) || path.contains(&layer) {
            return false;
        }
        debug!("outside click");
        if let Some(cb) = self.on_outside_click.as_mut() {
            cb();
        }
        true
    }

    /// Release listeners and cancel any pending frame. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        let State::Active { frame_pending } = self.state else {
            return;
        };
        if frame_pending {
            self.host.cancel_frame();
        }
        self.host.release();
        self.state = State::Idle;
        self.latest.clear();
        self.hidden = None;
        debug!("layer closed");
    }

    /// The latest resolution.
    pub fn latest(&self) -> Option<Resolution> {
        self.latest.get()
    }

    /// A shared handle to the latest-resolution slot.
    pub fn slot(&self) -> LatestSlot {
        self.latest.clone()
    }

    /// Attachment snapshot for rendering.
    pub fn bindings(&self) -> Bindings<H::Node> {
        let latest = self.latest.get();
        let open = self.is_open();
        let forward = |s: Signals| if open { s } else { Signals::empty() };
        let with_size = self.options.layer_dimensions().is_dynamic();
        Bindings {
            trigger: TriggerProps {
                node: self.host.trigger(),
                forward: forward(Signals::RESIZE | Signals::MUTATION),
            },
            layer: LayerProps {
                node: self.host.layer(),
                style: latest.map(|r| r.style(with_size)),
                forward: forward(Signals::RESIZE),
            },
            layer_side: latest.map_or(self.options.placement().side(), |r| r.side),
            arrow: latest.and_then(|r| r.arrow),
            is_open: open,
        }
    }

    fn schedule(&mut self) {
        match self.state {
            State::Active {
                frame_pending: false,
            } => {
                self.state = State::Active {
                    frame_pending: true,
                };
                self.host.request_frame();
                trace!("frame requested");
            }
            State::Active {
                frame_pending: true,
            } => trace!("signal coalesced into pending frame"),
            State::Idle => {}
        }
    }

    fn pass(&mut self) -> Result<Resolution, Skip> {
        let Some(trigger) = self.host.trigger_bounds() else {
            trace!("trigger missing; keeping previous resolution");
            return Err(Skip::MissingTrigger);
        };
        if !self.host.layer_mounted() {
            trace!("layer missing; keeping previous resolution");
            return Err(Skip::MissingLayer);
        }
        let previous = self.latest.get().map(|r| r.placement);
        let resolution = resolve_in(trigger, &self.host, &self.options, previous);
        self.latest.set(resolution);
        self.track_visibility(trigger);
        Ok(resolution)
    }

    fn track_visibility(&mut self, trigger: Rect) {
        let visible = resolve_boundary(&self.host, self.options.overflow_container(), 0.0);
        let now = Disappearance::classify(trigger, visible);
        if now == self.hidden {
            return;
        }
        self.hidden = now;
        if let Some(d) = now {
            debug!(?d, "trigger left the visible boundary");
            if let Some(cb) = self.on_disappear.as_mut() {
                cb(d);
            }
        }
    }
}

impl<H: Host> Drop for LayerController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
