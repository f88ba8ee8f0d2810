// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Renderer backend contract.
//!
//! The engine drives two independently rendered views: an
//! immediate-mode 2D plan editor and an animation-loop 3D scene. Both
//! re-derive their own view state from the model when notified; the
//! engine never reaches into renderer internals. These traits are the
//! whole boundary.

use crate::types::{HalfEdgeId, ItemId};

/// Entry points a view must expose to the engine's mode-switch and
/// layout handling.
pub trait PlanView {
    /// Drop derived view state and rebuild from the current model.
    /// Called after a design is loaded or cleared.
    fn reset(&mut self);

    /// The viewport changed size.
    fn resize_view(&mut self, width: u32, height: u32);

    /// Mark the view dirty; it should redraw on its next frame.
    ///
    /// Views keep their own dirty flag so the render cadence stays
    /// decoupled from the edit cadence: an idle view skips frames, a
    /// burst of edits coalesces into one redraw.
    fn set_needs_redraw(&mut self);

    /// Whether a redraw is pending.
    fn needs_redraw(&self) -> bool;
}

/// Hit-testing entry points the engine's click routing depends on.
///
/// Screen coordinates are view-local pixels; the view owns the
/// transform between screen space and plan space.
pub trait HitTest {
    /// The wall half-edge under the given screen point, if any.
    fn edge_at(&self, x: f64, y: f64) -> Option<HalfEdgeId>;

    /// The room under the given screen point, as an index into the
    /// floorplan's current room list.
    fn room_at(&self, x: f64, y: f64) -> Option<usize>;

    /// The item under the given screen point, if any.
    fn item_at(&self, x: f64, y: f64) -> Option<ItemId>;
}
