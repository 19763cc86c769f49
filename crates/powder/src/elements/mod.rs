//! Per-material movement rules dispatched from the tick loop.
//!
//! Rules are pure: they read a [`Neighborhood`], draw their tie-break from the
//! injected RNG and return a [`Motion`]. Applying it is the engine's job.

mod sand;
mod steam;
mod stone;
mod water;

use rand::Rng;

use crate::api::Neighborhood;
use crate::cell::Material;

/// What a particle wants to do this tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Motion {
    /// No move; the particle stays live.
    Stay,
    /// Bottom row reached: the particle becomes permanently inert.
    Settle,
    /// Move by `(dx, dy)`. `displaced` is whatever the target held; it ends up
    /// in the mover's old cell.
    Move {
        dx: i32,
        dy: i32,
        displaced: Material,
    },
}

impl Motion {
    /// Plain relocation into an `Empty` neighbour.
    #[must_use]
    pub fn step(dx: i32, dy: i32) -> Self {
        Self::Move {
            dx,
            dy,
            displaced: Material::Empty,
        }
    }
}

/// Lateral direction for tie-breaks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn dx(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Fair coin between left and right.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Three-way draw over {left, right, stay}; `None` means stay.
    pub fn pick_or_stay<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        match rng.gen_range(0..3) {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }
}

/// Evaluate the rule for `material` at the view's origin.
///
/// The tie-break is drawn before the rule looks around, so each evaluated
/// Sand, Water or Steam particle consumes exactly one draw whatever it ends
/// up doing. Empty never owns a particle and Metal never moves; both stay.
pub fn evaluate<R: Rng + ?Sized>(material: Material, view: &Neighborhood, rng: &mut R) -> Motion {
    match material {
        Material::Sand => sand::update_sand(view, Side::pick(rng)),
        Material::Stone => stone::update_stone(view),
        Material::Water => water::update_water(view, Side::pick_or_stay(rng)),
        Material::Steam => steam::update_steam(view, Side::pick_or_stay(rng)),
        Material::Metal | Material::Empty => Motion::Stay,
    }
}
