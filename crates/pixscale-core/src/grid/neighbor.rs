//! Neighbor sampling
//!
//! A neighbor outside the grid is [`Neighbor::Absent`]. `Absent` compares
//! unequal to everything, including another `Absent`, so a comparison that
//! touches the border never succeeds. Like `f32::NAN`, this makes
//! `Neighbor` `PartialEq` but not `Eq`.

use super::Grid;
use crate::Rgba;

/// A pixel sampled next to another one, or the border marker.
#[derive(Debug, Clone, Copy)]
pub enum Neighbor<P> {
    /// In-bounds pixel value
    Present(P),
    /// Position lies outside the grid
    Absent,
}

impl<P> Neighbor<P> {
    /// Pixel value, `None` when absent.
    #[inline]
    pub fn pixel(self) -> Option<P> {
        match self {
            Neighbor::Present(p) => Some(p),
            Neighbor::Absent => None,
        }
    }

    /// `true` for the border marker.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Neighbor::Absent)
    }
}

impl<P: PartialEq> PartialEq for Neighbor<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Neighbor::Present(a), Neighbor::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl<P> From<Option<P>> for Neighbor<P> {
    fn from(pixel: Option<P>) -> Self {
        match pixel {
            Some(p) => Neighbor::Present(p),
            None => Neighbor::Absent,
        }
    }
}

/// A pixel and its four axis-aligned neighbors.
///
/// ```text
///           above
///     left  center  right
///           below
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<P> {
    pub center: P,
    pub above: Neighbor<P>,
    pub right: Neighbor<P>,
    pub left: Neighbor<P>,
    pub below: Neighbor<P>,
}

impl Grid {
    /// Sample the pixel at `(x + dx, y + dy)`.
    ///
    /// Returns [`Neighbor::Absent`] when the offset position falls outside
    /// the grid on either side; never wraps or clamps.
    #[inline]
    pub fn neighbor(&self, x: u32, y: u32, dx: i32, dy: i32) -> Neighbor<Rgba> {
        let nx = i64::from(x) + i64::from(dx);
        let ny = i64::from(y) + i64::from(dy);
        match (u32::try_from(nx), u32::try_from(ny)) {
            (Ok(nx), Ok(ny)) => self.get_pixel(nx, ny).into(),
            _ => Neighbor::Absent,
        }
    }

    /// Sample the neighborhood of (x, y).
    ///
    /// Returns `None` if (x, y) itself is out of bounds.
    pub fn neighborhood(&self, x: u32, y: u32) -> Option<Neighborhood<Rgba>> {
        if x < self.width() && y < self.height() {
            Some(self.neighborhood_unchecked(x, y))
        } else {
            None
        }
    }

    /// Sample the neighborhood of (x, y) without checking the center.
    ///
    /// # Panics
    ///
    /// May panic if `x >= width` or `y >= height`. Neighbors are always
    /// bounds-checked.
    #[inline]
    pub fn neighborhood_unchecked(&self, x: u32, y: u32) -> Neighborhood<Rgba> {
        Neighborhood {
            center: self.get_pixel_unchecked(x, y),
            above: self.neighbor(x, y, 0, -1),
            right: self.neighbor(x, y, 1, 0),
            left: self.neighbor(x, y, -1, 0),
            below: self.neighbor(x, y, 0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    #[test]
    fn test_absent_never_equal() {
        let absent: Neighbor<Rgba> = Neighbor::Absent;
        assert!(absent != Neighbor::Absent);
        assert!(absent != Neighbor::Present(RED));
        assert!(Neighbor::Present(RED) != absent);
        // Not reflexive
        #[allow(clippy::eq_op)]
        let reflexive = absent == absent;
        assert!(!reflexive);
    }

    #[test]
    fn test_present_equality() {
        assert!(Neighbor::Present(RED) == Neighbor::Present(RED));
        assert!(Neighbor::Present(RED) != Neighbor::Present(BLUE));
    }

    #[test]
    fn test_transparent_is_not_absent() {
        // A real zero-valued pixel must not collide with the border marker
        let grid = Grid::new(1, 1).unwrap();
        assert!(!grid.neighbor(0, 0, 0, 0).is_absent());
        assert!(grid.neighbor(0, 0, 1, 0) != Neighbor::Present(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::from_pixels(2, 1, vec![RED, BLUE]).unwrap();
        assert!(grid.neighbor(0, 0, -1, 0).is_absent());
        assert!(grid.neighbor(0, 0, 0, -1).is_absent());
        assert!(grid.neighbor(0, 0, 0, 1).is_absent());
        assert_eq!(grid.neighbor(0, 0, 1, 0).pixel(), Some(BLUE));
        assert!(grid.neighbor(1, 0, 1, 0).is_absent());
        assert_eq!(grid.neighbor(1, 0, -1, 0).pixel(), Some(RED));
    }

    #[test]
    fn test_neighbor_far_offsets() {
        let grid = Grid::filled(2, 2, RED).unwrap();
        assert!(grid.neighbor(u32::MAX, 0, 1, 0).is_absent());
        assert!(grid.neighbor(0, 0, i32::MIN, 0).is_absent());
    }

    #[test]
    fn test_neighborhood_center() {
        let grid = Grid::from_pixels(
            3,
            3,
            vec![
                BLUE, RED, BLUE, //
                BLUE, BLUE, RED, //
                BLUE, BLUE, BLUE,
            ],
        )
        .unwrap();
        let n = grid.neighborhood(1, 1).unwrap();
        assert_eq!(n.center, BLUE);
        assert_eq!(n.above.pixel(), Some(RED));
        assert_eq!(n.right.pixel(), Some(RED));
        assert_eq!(n.left.pixel(), Some(BLUE));
        assert_eq!(n.below.pixel(), Some(BLUE));
    }

    #[test]
    fn test_neighborhood_out_of_bounds() {
        let grid = Grid::new(0, 0).unwrap();
        assert!(grid.neighborhood(0, 0).is_none());
    }
}
