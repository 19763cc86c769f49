//! Read-only relative-offset view handed to material rules.

use crate::cell::Material;
use crate::Grid;

/// Out-of-bounds offsets read as `None`; rules treat that as "no move".
/// There is no write access: rules describe a motion and the tick engine
/// applies it.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> Neighborhood<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Material> {
        let (x, y) = (self.x + dx, self.y + dy);
        self.grid.in_bounds(x, y).then(|| self.grid.get(x, y))
    }

    /// True only for an in-bounds `Empty` neighbour.
    #[must_use]
    pub fn is_empty(&self, dx: i32, dy: i32) -> bool {
        self.get(dx, dy) == Some(Material::Empty)
    }

    #[must_use]
    pub fn on_bottom_row(&self) -> bool {
        self.y == self.grid.height as i32 - 1
    }
}
