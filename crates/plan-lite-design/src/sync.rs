// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dirty-flag plumbing between the design and its render loops.
//!
//! Each view (2D plan editor, 3D walkthrough) owns one [`DirtyFlag`]
//! wired to every mutation event. Mutations mark the flag
//! synchronously; the view's render loop polls it once per frame with
//! [`DirtyFlag::take`] and redraws only when something changed, which
//! decouples render cadence from edit cadence.

use crate::design::Design;
use std::cell::Cell;
use std::rc::Rc;

/// A shared single-thread dirty bit.
///
/// Clones share the same bit; the clones registered in callbacks mark
/// it, the view's copy consumes it.
#[derive(Clone, Debug, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.0.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.0.get()
    }

    /// Read and clear in one step; the render loop's per-frame poll.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Wire a fresh dirty flag to every mutation event of a design.
///
/// The flag starts dirty so a newly attached view draws its first
/// frame. Call once per view; flags are independent, so a redraw of
/// one view never swallows another's.
pub fn watch(design: &mut Design) -> DirtyFlag {
    let flag = DirtyFlag::new();
    flag.mark();

    let events = &mut design.floorplan_mut().events;
    let f = flag.clone();
    events.new_corner.add(move |_| f.mark());
    let f = flag.clone();
    events.new_wall.add(move |_| f.mark());
    let f = flag.clone();
    events.updated_rooms.add(move |_| f.mark());

    let events = &mut design.scene_mut().events;
    let f = flag.clone();
    events.item_loading.add(move |_| f.mark());
    let f = flag.clone();
    events.item_loaded.add(move |_| f.mark());
    let f = flag.clone();
    events.item_load_error.add(move |_| f.mark());
    let f = flag.clone();
    events.item_removed.add(move |_| f.mark());

    flag
}
