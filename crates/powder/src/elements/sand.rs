//! Sand element: falls, sinks through water, slides down one chosen diagonal.

use super::{Motion, Side};
use crate::api::Neighborhood;

pub fn update_sand(view: &Neighborhood, side: Side) -> Motion {
    if view.on_bottom_row() {
        return Motion::Settle;
    }

    if let Some(displaced) = view.get(0, 1).filter(|m| m.yields_to_solids()) {
        return Motion::Move { dx: 0, dy: 1, displaced };
    }

    // Only the chosen diagonal is tried; no fallback to the other side.
    if view.is_empty(side.dx(), 1) {
        return Motion::step(side.dx(), 1);
    }

    Motion::Stay
}
