use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts for deferred generation, anchored at the first revealed cell.
pub trait MinefieldGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> MineLayout;
}

/// Replays a fixed board. The layout is returned as-is, without any exclusion zone.
impl MinefieldGenerator for MineLayout {
    fn generate(&mut self, _config: &GameConfig, _start: Coord2) -> MineLayout {
        self.clone()
    }
}
