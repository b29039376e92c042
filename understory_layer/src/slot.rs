// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The latest-resolution slot shared between the controller and its readers.

use alloc::rc::Rc;
use core::cell::Cell;

use understory_anchor::Resolution;

/// Single-writer slot holding the most recent [`Resolution`].
///
/// Clones share the slot. Only the controller writes; each write replaces the whole
/// value, so a reader never sees a half-updated rectangle.
#[derive(Clone, Debug, Default)]
pub struct LatestSlot(Rc<Cell<Option<Resolution>>>);

impl LatestSlot {
    /// The latest resolution, if the layer is active and has been resolved.
    pub fn get(&self) -> Option<Resolution> {
        self.0.get()
    }

    pub(crate) fn set(&self, resolution: Resolution) {
        self.0.set(Some(resolution));
    }

    pub(crate) fn clear(&self) {
        self.0.set(None);
    }
}
