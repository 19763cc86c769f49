//! Water element: falls into empty space, otherwise drifts one cell sideways.
//!
//! The drift is a three-way draw over {left, right, stay}. Falling always wins
//! over the draw. Water never displaces anything; it only moves into `Empty`.

use super::{Motion, Side};
use crate::api::Neighborhood;

pub fn update_water(view: &Neighborhood, drift: Option<Side>) -> Motion {
    if view.is_empty(0, 1) {
        return Motion::step(0, 1);
    }
    match drift {
        Some(side) if view.is_empty(side.dx(), 0) => Motion::step(side.dx(), 0),
        _ => Motion::Stay,
    }
}
