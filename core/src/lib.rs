#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use types::*;

mod cell;
mod error;
mod field;
mod generator;
mod types;

/// Cells kept mine-free around the first click: the click and its 8 neighbours.
pub const EXCLUSION_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Most mines a board of `size` can hold while keeping the first click's
    /// exclusion zone free. `None` for boards that cannot reserve the zone at all.
    pub const fn max_mines((size_x, size_y): Coord2) -> Option<CellCount> {
        if size_x <= 0 || size_y <= 0 {
            return None;
        }
        mult(size_x, size_y).checked_sub(EXCLUSION_ZONE_CELLS)
    }

    pub fn validate(&self) -> Result<()> {
        match Self::max_mines(self.size) {
            Some(max) if self.mines <= max => Ok(()),
            _ => Err(GameError::InvalidConfiguration {
                size: self.size,
                mines: self.mines,
            }),
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((9, 9), 10)
    }
}

/// Mine mask of a board, produced by a [`MinefieldGenerator`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Mine-free layout to place mines into.
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 <= 0 || size.1 <= 0 {
            return Err(GameError::InvalidConfiguration {
                size,
                mines: mine_coords.len() as CellCount,
            });
        }

        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            layout.validate_coords(coords)?;
            layout.place_mine(coords);
        }

        Ok(layout)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if in_bounds(coords, size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, size })
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Places a mine, returning whether the cell was still free of one.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords] {
            return false;
        }
        self[coords] = true;
        self.mine_count += 1;
        true
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        iter_neighbors(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn config_reserves_exclusion_zone() {
        assert!(GameConfig::new((9, 9), 72).is_ok());
        assert_eq!(
            GameConfig::new((9, 9), 73),
            Err(GameError::InvalidConfiguration {
                size: (9, 9),
                mines: 73
            })
        );
    }

    #[test]
    fn config_rejects_tiny_and_degenerate_boards() {
        assert!(GameConfig::new((2, 2), 0).is_err());
        assert!(GameConfig::new((0, 9), 0).is_err());
        assert!(GameConfig::new((-3, 9), 0).is_err());
        assert!(GameConfig::new((3, 3), 0).is_ok());
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.size, (9, 9));
        assert_eq!(config.mines, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn layout_counts_adjacent_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2), (2, 2)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
        assert_eq!(layout.iter_mines().collect::<Vec<_>>(), [(0, 0), (2, 2)]);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBounds {
                coords: (3, 0),
                size: (3, 3)
            })
        );
    }
}
