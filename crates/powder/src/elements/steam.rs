//! Steam element: rises, then tries the drawn diagonal, then the drawn side.

use super::{Motion, Side};
use crate::api::Neighborhood;

pub fn update_steam(view: &Neighborhood, drift: Option<Side>) -> Motion {
    if view.is_empty(0, -1) {
        return Motion::step(0, -1);
    }
    let Some(side) = drift else {
        return Motion::Stay;
    };
    let dx = side.dx();
    if view.is_empty(dx, -1) {
        return Motion::step(dx, -1);
    }
    if view.is_empty(dx, 0) {
        return Motion::step(dx, 0);
    }
    Motion::Stay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Material;
    use crate::Grid;

    #[test]
    fn rises_into_empty() {
        let grid = Grid::new(5, 5);
        let view = Neighborhood::new(&grid, 2, 2);
        assert_eq!(update_steam(&view, None), Motion::step(0, -1));
    }

    #[test]
    fn prefers_diagonal_over_lateral() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 1, Material::Metal);
        let view = Neighborhood::new(&grid, 2, 2);
        assert_eq!(update_steam(&view, Some(Side::Left)), Motion::step(-1, -1));
        assert_eq!(update_steam(&view, Some(Side::Right)), Motion::step(1, -1));
        assert_eq!(update_steam(&view, None), Motion::Stay);
    }

    #[test]
    fn falls_back_to_lateral_when_diagonal_blocked() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 1, Material::Metal);
        grid.set(1, 1, Material::Stone);
        let view = Neighborhood::new(&grid, 2, 2);
        assert_eq!(update_steam(&view, Some(Side::Left)), Motion::step(-1, 0));
    }

    #[test]
    fn top_row_only_drifts_sideways() {
        let grid = Grid::new(5, 5);
        let view = Neighborhood::new(&grid, 0, 0);
        assert_eq!(update_steam(&view, Some(Side::Left)), Motion::Stay);
        assert_eq!(update_steam(&view, Some(Side::Right)), Motion::step(1, 0));
        assert_eq!(update_steam(&view, None), Motion::Stay);
    }

    #[test]
    fn boxed_in_steam_stays() {
        let mut grid = Grid::new(3, 3);
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)] {
            grid.set(x, y, Material::Metal);
        }
        let view = Neighborhood::new(&grid, 1, 1);
        for drift in [Some(Side::Left), Some(Side::Right), None] {
            assert_eq!(update_steam(&view, drift), Motion::Stay);
        }
    }
}
