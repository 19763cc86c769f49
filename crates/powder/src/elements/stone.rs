//! Stone element: falls straight down, sinking through water, never slides.

use super::Motion;
use crate::api::Neighborhood;

pub fn update_stone(view: &Neighborhood) -> Motion {
    if view.on_bottom_row() {
        return Motion::Settle;
    }
    match view.get(0, 1) {
        Some(displaced) if displaced.yields_to_solids() => Motion::Move { dx: 0, dy: 1, displaced },
        _ => Motion::Stay,
    }
}
