/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that off-board input such as `-1` can reach validation instead of wrapping.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Conversion into an `ndarray` index. Only meaningful for validated, in-bounds coordinates.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

pub const fn in_bounds((x, y): Coord2, (size_x, size_y): Coord2) -> bool {
    x >= 0 && y >= 0 && x < size_x && y < size_y
}

/// Whether `other` is `center` itself or one of its 8 neighbours.
pub const fn is_adjacent_or_same(center: Coord2, other: Coord2) -> bool {
    let dx = center.0 as i32 - other.0 as i32;
    let dy = center.1 as i32 - other.1 as i32;
    dx.abs() <= 1 && dy.abs() <= 1
}

pub fn iter_neighbors(center: Coord2, bounds: Coord2) -> NeighborIter {
    NeighborIter::new(center, bounds)
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (Coord, Coord), bounds: Coord2) -> Option<Coord2> {
    let next_x = coords.0.checked_add(delta.0)?;
    let next_y = coords.1.checked_add(delta.1)?;
    let next = (next_x, next_y);
    in_bounds(next, bounds).then_some(next)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = iter_neighbors((0, 0), (9, 9)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(iter_neighbors((4, 8), (9, 9)).count(), 5);
        assert_eq!(iter_neighbors((8, 4), (9, 9)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let neighbors: Vec<_> = iter_neighbors((4, 4), (9, 9)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(4, 4)));
        assert!(neighbors.iter().all(|&pos| is_adjacent_or_same((4, 4), pos)));
    }

    #[test]
    fn single_row_board() {
        assert_eq!(iter_neighbors((0, 0), (1, 1)).count(), 0);
        assert_eq!(iter_neighbors((2, 0), (5, 1)).count(), 2);
    }

    #[test]
    fn bounds_reject_negative_coordinates() {
        assert!(!in_bounds((-1, 0), (9, 9)));
        assert!(!in_bounds((0, 9), (9, 9)));
        assert!(in_bounds((8, 8), (9, 9)));
    }

    #[test]
    fn mult_saturates_negative_to_zero() {
        assert_eq!(mult(9, 9), 81);
        assert_eq!(mult(-3, 9), 0);
    }
}
